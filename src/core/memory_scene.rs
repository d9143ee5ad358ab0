//! In-Memory-Szene für Tests und den Headless-Demo-Lauf.
//!
//! Bildet die Teile eines Renderers nach, die der Inspector berührt:
//! Primitives mit Screen-Bounds, ein kugelförmiger Globus, der linear auf ein
//! Viewport-Rechteck abgebildet ist, und eine LOD-Auswahl, die die
//! Readiness-Tabelle neu aufbaut, solange Updates nicht ausgesetzt sind.

use super::frustum::FrustumStatistics;
use super::scene::{CommandFilter, DebugPrimitive, ImageryLayerId, PrimitiveId, Scene, ScreenRect};
use super::terrain::{Cartographic, ReadinessTable, SurfaceDebug, Tile, TileId};
use glam::{DMat4, DVec3, Vec2};
use indexmap::IndexMap;
use std::f64::consts::{FRAC_PI_2, PI};

/// Mittlerer Erdradius (Kugel-Näherung) in Metern.
pub const GLOBE_RADIUS: f64 = 6_371_000.0;

/// Primitive-Eintrag der In-Memory-Szene.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryPrimitive {
    /// Sichtbarkeit
    pub show: bool,
    /// Debug-Bounding-Volume aktiv
    pub debug_show_bounding_volume: bool,
    /// Model-Matrix
    pub model_matrix: DMat4,
    /// Pick-Fläche in Screen-Pixeln (None = nicht pickbar)
    pub screen_bounds: Option<ScreenRect>,
    /// Draw-Commands pro Frame
    pub command_count: usize,
    /// Gesetzt, wenn das Primitive vom Inspector eingefügt wurde
    pub debug: Option<DebugPrimitive>,
}

/// Art eines Imagery-Layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageryLayerKind {
    /// Basis-Imagery
    Base,
    /// Tile-Koordinaten-Overlay
    TileCoordinates,
}

/// Ergebnis eines simulierten Frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Owner aller eingereichten Draw-Commands
    pub submitted: Vec<PrimitiveId>,
    /// Tiles, die gezeichnet wurden (Scan-Reihenfolge)
    pub tiles: Vec<TileId>,
}

/// Einfache Szene ohne GPU.
#[derive(Debug, Clone)]
pub struct MemoryScene {
    primitives: IndexMap<PrimitiveId, MemoryPrimitive>,
    next_id: u64,
    command_filter: CommandFilter,
    show_frustums: bool,
    globe_viewport: Option<ScreenRect>,
    tiles: IndexMap<TileId, Tile>,
    lod_selection: Vec<TileId>,
    readiness_table: ReadinessTable,
    surface_debug: SurfaceDebug,
    imagery_layers: Vec<(ImageryLayerId, ImageryLayerKind)>,
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryScene {
    /// Erstellt eine leere Szene mit Globus über dem gesamten Standard-Viewport (1280×720).
    pub fn new() -> Self {
        Self {
            primitives: IndexMap::new(),
            next_id: 1,
            command_filter: CommandFilter::Unfiltered,
            show_frustums: false,
            globe_viewport: Some(ScreenRect::new(0.0, 0.0, 1280.0, 720.0)),
            tiles: IndexMap::new(),
            lod_selection: Vec::new(),
            readiness_table: ReadinessTable::new(),
            surface_debug: SurfaceDebug::default(),
            imagery_layers: vec![(ImageryLayerId(0), ImageryLayerKind::Base)],
        }
    }

    /// Erstellt eine Szene ohne Globus (kein Ellipsoid-Treffer, keine Oberfläche).
    pub fn without_globe() -> Self {
        Self {
            globe_viewport: None,
            ..Self::new()
        }
    }

    fn allocate_id(&mut self) -> PrimitiveId {
        let id = PrimitiveId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Fügt ein pickbares Modell-Primitive hinzu.
    pub fn add_model(&mut self, screen_bounds: ScreenRect, model_matrix: DMat4) -> PrimitiveId {
        let id = self.allocate_id();
        self.primitives.insert(
            id,
            MemoryPrimitive {
                show: true,
                debug_show_bounding_volume: false,
                model_matrix,
                screen_bounds: Some(screen_bounds),
                command_count: 1,
                debug: None,
            },
        );
        id
    }

    /// Primitive-Eintrag lesen.
    pub fn primitive(&self, id: PrimitiveId) -> Option<&MemoryPrimitive> {
        self.primitives.get(&id)
    }

    /// Alle vom Inspector eingefügten Debug-Primitives.
    pub fn debug_primitives(&self) -> impl Iterator<Item = (PrimitiveId, &DebugPrimitive)> + '_ {
        self.primitives
            .iter()
            .filter_map(|(id, primitive)| primitive.debug.as_ref().map(|debug| (*id, debug)))
    }

    /// IDs aller Primitives mit aktivem Debug-Bounding-Volume.
    pub fn primitives_with_bounding_volume(&self) -> Vec<PrimitiveId> {
        self.primitives
            .iter()
            .filter(|(_, primitive)| primitive.debug_show_bounding_volume)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Fügt ein Tile hinzu; es nimmt ab sofort an der LOD-Auswahl teil.
    pub fn add_tile(&mut self, tile: Tile) -> TileId {
        let id = tile.id;
        self.tiles.insert(id, tile);
        self.lod_selection.push(id);
        self.select_tiles();
        id
    }

    /// Imagery-Layer in Collection-Reihenfolge.
    pub fn imagery_layers(&self) -> &[(ImageryLayerId, ImageryLayerKind)] {
        &self.imagery_layers
    }

    /// Setzt das Screen-Rechteck, auf das der Globus abgebildet wird.
    pub fn set_globe_viewport(&mut self, viewport: Option<ScreenRect>) {
        self.globe_viewport = viewport;
    }

    /// Screen-Position einer geographischen Koordinate (Inverse von `pick_ellipsoid`).
    pub fn screen_position_of(&self, position: Cartographic) -> Option<Vec2> {
        let rect = self.globe_viewport?;
        let u = (position.longitude + PI) / (2.0 * PI);
        let v = (FRAC_PI_2 - position.latitude) / PI;
        Some(Vec2::new(
            rect.x + (u * f64::from(rect.width)) as f32,
            rect.y + (v * f64::from(rect.height)) as f32,
        ))
    }

    /// LOD-Auswahl: baut die Readiness-Tabelle aus allen sichtbaren Tiles neu auf.
    /// Bei ausgesetzten Updates bleibt die Tabelle unverändert.
    pub fn select_tiles(&mut self) {
        if self.surface_debug.suspend_lod_update {
            return;
        }
        self.readiness_table.clear();
        for id in &self.lod_selection {
            if let Some(tile) = self.tiles.get(id) {
                self.readiness_table.push(tile.readiness(), *id);
            }
        }
    }

    /// Simuliert einen Frame: LOD-Auswahl und Command-Filter.
    pub fn render_frame(&mut self) -> FrameReport {
        self.select_tiles();

        FrameReport {
            submitted: self.submitted_primitives().collect(),
            tiles: self.readiness_table.tiles().collect(),
        }
    }

    fn submitted_primitives(&self) -> impl Iterator<Item = PrimitiveId> + '_ {
        self.primitives
            .iter()
            .filter(|(id, primitive)| primitive.show && self.command_filter.accepts(**id))
            .map(|(id, _)| *id)
    }

    /// Alle eingereichten Commands landen im einzigen Frustum "0".
    fn frame_statistics(&self) -> FrustumStatistics {
        let total: usize = self
            .submitted_primitives()
            .filter_map(|id| self.primitives.get(&id))
            .map(|primitive| primitive.command_count)
            .sum();
        FrustumStatistics::new(total).with_frustum("0", total)
    }
}

impl Scene for MemoryScene {
    fn pick(&self, screen_pos: Vec2) -> Option<PrimitiveId> {
        // Zuletzt eingefügt liegt oben
        self.primitives
            .iter()
            .rev()
            .find(|(_, primitive)| {
                primitive.show
                    && primitive
                        .screen_bounds
                        .is_some_and(|bounds| bounds.contains(screen_pos))
            })
            .map(|(id, _)| *id)
    }

    fn contains_primitive(&self, id: PrimitiveId) -> bool {
        self.primitives.contains_key(&id)
    }

    fn set_primitive_show(&mut self, id: PrimitiveId, show: bool) {
        if let Some(primitive) = self.primitives.get_mut(&id) {
            primitive.show = show;
        }
    }

    fn primitive_show(&self, id: PrimitiveId) -> Option<bool> {
        self.primitives.get(&id).map(|primitive| primitive.show)
    }

    fn set_primitive_debug_bounding_volume(&mut self, id: PrimitiveId, show: bool) {
        if let Some(primitive) = self.primitives.get_mut(&id) {
            primitive.debug_show_bounding_volume = show;
        }
    }

    fn primitive_debug_bounding_volume(&self, id: PrimitiveId) -> Option<bool> {
        self.primitives
            .get(&id)
            .map(|primitive| primitive.debug_show_bounding_volume)
    }

    fn primitive_model_matrix(&self, id: PrimitiveId) -> Option<DMat4> {
        self.primitives.get(&id).map(|primitive| primitive.model_matrix)
    }

    fn add_debug_primitive(&mut self, primitive: DebugPrimitive) -> PrimitiveId {
        let id = self.allocate_id();
        let model_matrix = match &primitive {
            DebugPrimitive::ReferenceFrame { model_matrix } => *model_matrix,
            DebugPrimitive::PerformanceDisplay { .. } => DMat4::IDENTITY,
        };
        self.primitives.insert(
            id,
            MemoryPrimitive {
                show: true,
                debug_show_bounding_volume: false,
                model_matrix,
                screen_bounds: None,
                command_count: 1,
                debug: Some(primitive),
            },
        );
        id
    }

    fn remove_primitive(&mut self, id: PrimitiveId) -> bool {
        self.primitives.shift_remove(&id).is_some()
    }

    fn debug_command_filter(&self) -> CommandFilter {
        self.command_filter
    }

    fn set_debug_command_filter(&mut self, filter: CommandFilter) {
        self.command_filter = filter;
    }

    fn set_debug_show_frustums(&mut self, show: bool) {
        self.show_frustums = show;
    }

    fn debug_show_frustums(&self) -> bool {
        self.show_frustums
    }

    fn debug_frustum_statistics(&self) -> Option<FrustumStatistics> {
        self.show_frustums.then(|| self.frame_statistics())
    }

    fn pick_ellipsoid(&self, screen_pos: Vec2) -> Option<DVec3> {
        let rect = self.globe_viewport?;
        if !rect.contains(screen_pos) || rect.width <= 0.0 || rect.height <= 0.0 {
            return None;
        }
        let u = f64::from((screen_pos.x - rect.x) / rect.width);
        let v = f64::from((screen_pos.y - rect.y) / rect.height);
        let longitude = u * 2.0 * PI - PI;
        let latitude = FRAC_PI_2 - v * PI;
        Some(DVec3::new(
            GLOBE_RADIUS * latitude.cos() * longitude.cos(),
            GLOBE_RADIUS * latitude.cos() * longitude.sin(),
            GLOBE_RADIUS * latitude.sin(),
        ))
    }

    fn cartesian_to_cartographic(&self, cartesian: DVec3) -> Option<Cartographic> {
        let length = cartesian.length();
        if length < f64::EPSILON {
            return None;
        }
        Some(Cartographic {
            longitude: cartesian.y.atan2(cartesian.x),
            latitude: (cartesian.z / length).clamp(-1.0, 1.0).asin(),
            height: length - GLOBE_RADIUS,
        })
    }

    fn has_terrain_surface(&self) -> bool {
        self.globe_viewport.is_some()
    }

    fn surface_debug(&self) -> SurfaceDebug {
        self.surface_debug
    }

    fn set_wireframe(&mut self, wireframe: bool) {
        self.surface_debug.wireframe = wireframe;
    }

    fn set_suspend_lod_update(&mut self, suspend: bool) {
        self.surface_debug.suspend_lod_update = suspend;
        if !suspend {
            self.select_tiles();
        }
    }

    fn set_bounding_sphere_tile(&mut self, tile: Option<TileId>) {
        self.surface_debug.bounding_sphere_tile = tile;
    }

    fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    fn readiness_table(&self) -> &ReadinessTable {
        &self.readiness_table
    }

    fn readiness_table_mut(&mut self) -> &mut ReadinessTable {
        &mut self.readiness_table
    }

    fn add_tile_coordinates_layer(&mut self) -> ImageryLayerId {
        let id = ImageryLayerId(self.next_id);
        self.next_id += 1;
        self.imagery_layers
            .push((id, ImageryLayerKind::TileCoordinates));
        id
    }

    fn remove_imagery_layer(&mut self, id: ImageryLayerId) -> bool {
        let before = self.imagery_layers.len();
        self.imagery_layers.retain(|(layer_id, _)| *layer_id != id);
        self.imagery_layers.len() != before
    }
}

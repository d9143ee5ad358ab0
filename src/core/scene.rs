//! Vertrag zur Render-Szene: alles, was der Inspector vom Renderer liest oder schreibt.
//!
//! Die Szene besitzt Primitives, Tiles und Imagery-Layer. Der Inspector hält nur IDs
//! und greift ausschließlich über das `Scene`-Trait zu.

use super::frustum::FrustumStatistics;
use super::terrain::{Cartographic, ReadinessTable, SurfaceDebug, Tile, TileId};
use glam::{DMat4, DVec3, Vec2};

/// Referenz (nicht Besitz) auf ein vom Renderer verwaltetes Primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveId(pub u64);

/// Referenz auf einen Layer der Imagery-Layer-Collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageryLayerId(pub u64);

/// Prädikat für Draw-Commands, das der Renderer pro Frame auswertet.
///
/// Bewusst ein Enum statt Closure: der aktive Filter bleibt inspizierbar und
/// es gibt immer genau einen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandFilter {
    /// Alle Commands werden gerendert
    #[default]
    Unfiltered,
    /// Nur Commands, deren Owner dieses Primitive ist
    ByOwner(PrimitiveId),
}

impl CommandFilter {
    /// Prüft, ob ein Command des gegebenen Owners gerendert wird.
    pub fn accepts(&self, owner: PrimitiveId) -> bool {
        match self {
            CommandFilter::Unfiltered => true,
            CommandFilter::ByOwner(id) => *id == owner,
        }
    }

    /// Gibt das gefilterte Primitive zurück (falls aktiv).
    pub fn owner(&self) -> Option<PrimitiveId> {
        match self {
            CommandFilter::Unfiltered => None,
            CommandFilter::ByOwner(id) => Some(*id),
        }
    }
}

/// Rechteck in Screen-Pixeln (x, y, Breite, Höhe).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScreenRect {
    /// Linke Kante
    pub x: f32,
    /// Obere Kante
    pub y: f32,
    /// Breite
    pub width: f32,
    /// Höhe
    pub height: f32,
}

impl ScreenRect {
    /// Erstellt ein neues Rechteck.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Prüft, ob der Punkt innerhalb (inkl. Rand) liegt.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Debug-Primitives, die der Inspector selbst in die Szene einfügt.
#[derive(Debug, Clone, PartialEq)]
pub enum DebugPrimitive {
    /// Achsenkreuz für die Model-Matrix eines selektierten Primitives
    ReferenceFrame {
        /// Model-Matrix des Ziel-Primitives
        model_matrix: DMat4,
    },
    /// Performance-Anzeige (FPS/MS-Graph)
    PerformanceDisplay {
        /// Position und Größe
        rectangle: ScreenRect,
        /// Hintergrundfarbe (RGBA)
        background_color: [f32; 4],
        /// CSS-Font-String
        font: String,
    },
}

/// Render-Szene als externer Kollaborator des Inspectors.
pub trait Scene {
    // ── Primitives ──────────────────────────────────────────────

    /// Strahl-Pick an Device-Koordinaten; liefert das getroffene Primitive.
    fn pick(&self, screen_pos: Vec2) -> Option<PrimitiveId>;

    /// Prüft, ob das Primitive (noch) in der Szene existiert.
    fn contains_primitive(&self, id: PrimitiveId) -> bool;

    /// Sichtbarkeit eines Primitives setzen. Unbekannte IDs werden ignoriert.
    fn set_primitive_show(&mut self, id: PrimitiveId, show: bool);

    /// Sichtbarkeit eines Primitives (None = unbekannt).
    fn primitive_show(&self, id: PrimitiveId) -> Option<bool>;

    /// Debug-Bounding-Volume eines Primitives ein-/ausschalten.
    fn set_primitive_debug_bounding_volume(&mut self, id: PrimitiveId, show: bool);

    /// Zustand des Debug-Bounding-Volumes (None = unbekannt).
    fn primitive_debug_bounding_volume(&self, id: PrimitiveId) -> Option<bool>;

    /// Model-Matrix eines Primitives.
    fn primitive_model_matrix(&self, id: PrimitiveId) -> Option<DMat4>;

    /// Fügt ein Debug-Primitive hinzu und gibt dessen ID zurück.
    fn add_debug_primitive(&mut self, primitive: DebugPrimitive) -> PrimitiveId;

    /// Entfernt ein Primitive. Gibt `false` zurück, wenn es nicht (mehr) existierte.
    fn remove_primitive(&mut self, id: PrimitiveId) -> bool;

    // ── Render-Filter & Frustums ────────────────────────────────

    /// Aktiver Command-Filter.
    fn debug_command_filter(&self) -> CommandFilter;

    /// Ersetzt den Command-Filter (atomar aus Sicht des Renderers).
    fn set_debug_command_filter(&mut self, filter: CommandFilter);

    /// Frustum-Visualisierung ein-/ausschalten.
    fn set_debug_show_frustums(&mut self, show: bool);

    /// Ob die Frustum-Visualisierung aktiv ist.
    fn debug_show_frustums(&self) -> bool;

    /// Statistik des letzten Frames (nur bei aktiver Frustum-Visualisierung).
    fn debug_frustum_statistics(&self) -> Option<FrustumStatistics>;

    // ── Ellipsoid / Kamera ──────────────────────────────────────

    /// Projiziert Device-Koordinaten auf das Referenz-Ellipsoid.
    fn pick_ellipsoid(&self, screen_pos: Vec2) -> Option<DVec3>;

    /// Wandelt eine kartesische Position in geographische Koordinaten um.
    fn cartesian_to_cartographic(&self, cartesian: DVec3) -> Option<Cartographic>;

    // ── Terrain-Oberfläche ──────────────────────────────────────

    /// Ob ein Globus mit Terrain-Oberfläche angehängt ist.
    fn has_terrain_surface(&self) -> bool;

    /// Aktuelle Debug-Schalter der Oberfläche.
    fn surface_debug(&self) -> SurfaceDebug;

    /// Wireframe-Darstellung der Oberfläche.
    fn set_wireframe(&mut self, wireframe: bool);

    /// LOD-Updates aussetzen bzw. wieder aufnehmen.
    fn set_suspend_lod_update(&mut self, suspend: bool);

    /// Tile, dessen Bounding-Sphere gezeichnet wird.
    fn set_bounding_sphere_tile(&mut self, tile: Option<TileId>);

    /// Tile-Daten (Level, X/Y, Ausdehnung, Imagery).
    fn tile(&self, id: TileId) -> Option<&Tile>;

    /// Nach Readiness gebuckette Tiles des aktuellen Frames.
    fn readiness_table(&self) -> &ReadinessTable;

    /// Schreibzugriff auf die Readiness-Tabelle.
    fn readiness_table_mut(&mut self) -> &mut ReadinessTable;

    // ── Imagery-Layer ───────────────────────────────────────────

    /// Fügt einen Tile-Koordinaten-Layer hinzu.
    fn add_tile_coordinates_layer(&mut self) -> ImageryLayerId;

    /// Entfernt einen Imagery-Layer.
    fn remove_imagery_layer(&mut self, id: ImageryLayerId) -> bool;
}

//! Terrain-Datentypen: Tiles, geographische Ausdehnung und die Readiness-Tabelle.

use std::collections::BTreeMap;

/// Referenz auf ein vom Renderer verwaltetes Quadtree-Tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

/// Geographische Koordinate (Radiant, Höhe in Metern).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cartographic {
    /// Länge in Radiant
    pub longitude: f64,
    /// Breite in Radiant
    pub latitude: f64,
    /// Höhe über dem Ellipsoid
    pub height: f64,
}

impl Cartographic {
    /// Erstellt eine Koordinate auf Ellipsoid-Höhe 0.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            height: 0.0,
        }
    }
}

/// Geographische Ausdehnung eines Tiles (Radiant).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Westliche Länge
    pub west: f64,
    /// Südliche Breite
    pub south: f64,
    /// Östliche Länge
    pub east: f64,
    /// Nördliche Breite
    pub north: f64,
}

impl Extent {
    /// Erstellt eine Ausdehnung aus den vier Kanten.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Prüft, ob die Koordinate innerhalb der Ausdehnung liegt (Kanten inklusive).
    pub fn contains(&self, position: Cartographic) -> bool {
        position.longitude >= self.west
            && position.longitude <= self.east
            && position.latitude >= self.south
            && position.latitude <= self.north
    }
}

/// Imagery-Eintrag eines Tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileImagery {
    /// Ob die Imagery vollständig geladen ist
    pub ready: bool,
    /// Alpha des zugehörigen Imagery-Layers
    pub layer_alpha: f32,
}

impl TileImagery {
    /// Zählt zur Readiness, wenn geladen und nicht vollständig transparent.
    pub fn is_visible_and_ready(&self) -> bool {
        self.ready && self.layer_alpha != 0.0
    }
}

/// Terrain-Tile mit Quadtree-Adresse.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Renderer-ID
    pub id: TileId,
    /// Quadtree-Level
    pub level: u32,
    /// X-Index im Level
    pub x: u32,
    /// Y-Index im Level
    pub y: u32,
    /// Geographische Ausdehnung
    pub extent: Extent,
    /// Imagery-Layer dieses Tiles
    pub imagery: Vec<TileImagery>,
}

impl Tile {
    /// Anzahl geladener, sichtbarer Imagery-Layer (Readiness-Bucket).
    pub fn readiness(&self) -> usize {
        self.imagery
            .iter()
            .filter(|imagery| imagery.is_visible_and_ready())
            .count()
    }
}

/// Debug-Schalter der Terrain-Oberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceDebug {
    /// Oberfläche als Wireframe zeichnen
    pub wireframe: bool,
    /// LOD-Tile-Auswahl eingefroren
    pub suspend_lod_update: bool,
    /// Tile, dessen Bounding-Sphere gezeichnet wird
    pub bounding_sphere_tile: Option<TileId>,
}

/// Sparse Tabelle: Readiness-Bucket → Tiles, die in diesem Frame gerendert werden.
///
/// Der Bucket-Index ist direkt der Slot. Lücken sind erlaubt, Indizes sind
/// nach oben offen. Iteration läuft immer aufsteigend nach Bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadinessTable {
    buckets: BTreeMap<usize, Vec<TileId>>,
}

impl ReadinessTable {
    /// Erstellt eine leere Tabelle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entfernt alle Buckets.
    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    /// Ersetzt den Inhalt eines Buckets.
    pub fn set_bucket(&mut self, bucket: usize, tiles: Vec<TileId>) {
        if tiles.is_empty() {
            self.buckets.remove(&bucket);
        } else {
            self.buckets.insert(bucket, tiles);
        }
    }

    /// Hängt ein Tile an einen Bucket an.
    pub fn push(&mut self, bucket: usize, tile: TileId) {
        self.buckets.entry(bucket).or_default().push(tile);
    }

    /// Tiles eines Buckets (leer bei Lücke).
    pub fn bucket(&self, bucket: usize) -> &[TileId] {
        self.buckets.get(&bucket).map_or(&[], Vec::as_slice)
    }

    /// Iteriert aufsteigend über alle belegten Buckets.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[TileId])> + '_ {
        self.buckets
            .iter()
            .map(|(bucket, tiles)| (*bucket, tiles.as_slice()))
    }

    /// Alle Tiles in Scan-Reihenfolge (Bucket aufsteigend, innerhalb Tabellenreihenfolge).
    pub fn tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        self.buckets.values().flat_map(|tiles| tiles.iter().copied())
    }

    /// Anzahl Slots inklusive Lücken (höchster Bucket + 1).
    pub fn slot_count(&self) -> usize {
        self.buckets.keys().next_back().map_or(0, |max| max + 1)
    }

    /// Gesamtzahl der Tiles über alle Buckets.
    pub fn tile_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Gibt `true` zurück, wenn kein Tile gerendert wird.
    pub fn is_empty(&self) -> bool {
        self.tile_count() == 0
    }
}

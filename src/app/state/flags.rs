/// Kombinierter Zustand aus "Suspend LOD update" und "Tile-Filter".
///
/// Ein aktiver Tile-Filter setzt ausgesetzte Updates voraus; die Kombination
/// "Filter an, Updates laufen" ist nicht darstellbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileUpdateMode {
    /// Normale LOD-Auswahl
    #[default]
    Live,
    /// LOD-Auswahl eingefroren
    Suspended,
    /// Eingefroren und auf ein Tile reduziert
    Isolated,
}

/// Eingaben, die den `TileUpdateMode` verändern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileUpdateToggle {
    /// Checkbox "Suspend LOD update"
    SuspendUpdates(bool),
    /// Checkbox "Show only selected" (Tile)
    FilterTile(bool),
}

impl TileUpdateMode {
    /// Einzige Übergangsfunktion zwischen den Modi.
    pub fn apply(self, toggle: TileUpdateToggle) -> Self {
        match toggle {
            TileUpdateToggle::SuspendUpdates(true) => match self {
                TileUpdateMode::Isolated => TileUpdateMode::Isolated,
                _ => TileUpdateMode::Suspended,
            },
            // Fortsetzen beendet auch die Isolation
            TileUpdateToggle::SuspendUpdates(false) => TileUpdateMode::Live,
            TileUpdateToggle::FilterTile(true) => TileUpdateMode::Isolated,
            // Filter aus läuft immer über "Updates fortsetzen"
            TileUpdateToggle::FilterTile(false) => TileUpdateMode::Live,
        }
    }

    /// Beobachtbares "Suspend LOD update"-Flag.
    pub fn suspends_updates(self) -> bool {
        self != TileUpdateMode::Live
    }

    /// Beobachtbares Tile-Filter-Flag.
    pub fn filters_tile(self) -> bool {
        self == TileUpdateMode::Isolated
    }
}

/// Debug-Schalter des Inspectors (Checkbox-Zustände).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebugFlags {
    /// Frustums anzeigen
    pub frustums: bool,
    /// Performance-Anzeige
    pub performance: bool,
    /// Bounding-Sphere des selektierten Primitives
    pub primitive_bounding_sphere: bool,
    /// Achsenkreuz des selektierten Primitives
    pub primitive_reference_frame: bool,
    /// Nur das selektierte Primitive rendern
    pub filter_primitive: bool,
    /// Oberfläche als Wireframe
    pub wireframe: bool,
    /// Tile-Koordinaten-Overlay
    pub tile_coordinates: bool,
    /// Bounding-Sphere des selektierten Tiles
    pub tile_bounding_sphere: bool,
    /// Suspend-Updates und Tile-Filter als ein Zustand
    pub tile_update_mode: TileUpdateMode,
}

impl DebugFlags {
    /// Beobachtbares "Suspend LOD update"-Flag.
    pub fn suspend_updates(&self) -> bool {
        self.tile_update_mode.suspends_updates()
    }

    /// Beobachtbares Tile-Filter-Flag.
    pub fn filter_tile(&self) -> bool {
        self.tile_update_mode.filters_tile()
    }
}

use super::super::state::{PanelSection, PickMode};
use crate::core::{PrimitiveId, TileId};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Panel ===
    /// Drop-Down des Inspectors ein-/ausklappen
    ToggleDropDown,
    /// Abschnitt des Panels ein-/ausklappen
    ToggleSection { section: PanelSection },

    // === Allgemein ===
    /// Frustum-Visualisierung inkl. Statistik-Polling setzen
    SetShowFrustums { enabled: bool },
    /// Performance-Anzeige setzen
    SetShowPerformance { enabled: bool },
    /// Frustum-Statistik-Text aus der Szene aktualisieren (Timer)
    RefreshFrustumStatistics,

    // === Primitives ===
    /// Bounding-Sphere des selektierten Primitives setzen
    SetPrimitiveBoundingSphere { enabled: bool },
    /// Referenz-Achsenkreuz des selektierten Primitives setzen
    SetPrimitiveReferenceFrame { enabled: bool },
    /// Render-Filter auf das selektierte Primitive setzen
    SetFilterPrimitive { enabled: bool },
    /// Selektiertes Primitive ersetzen (None = Selektion aufheben)
    SelectPrimitive { primitive: Option<PrimitiveId> },
    /// Primitive nach dem Selektions-Blinken wieder einblenden (Timer)
    RevealPrimitive { primitive: PrimitiveId },

    // === Terrain ===
    /// Wireframe-Darstellung der Oberfläche setzen
    SetWireframe { enabled: bool },
    /// LOD-Updates aussetzen bzw. fortsetzen
    SetSuspendUpdates { enabled: bool },
    /// Tile-Koordinaten-Overlay setzen
    SetTileCoordinates { enabled: bool },
    /// Bounding-Sphere des selektierten Tiles setzen
    SetTileBoundingSphere { enabled: bool },
    /// Render-Isolation auf das selektierte Tile setzen
    SetFilterTile { enabled: bool },
    /// Selektiertes Tile ersetzen (None = Selektion aufheben)
    SelectTile { tile: Option<TileId> },

    // === Picking ===
    /// Pick-Modus scharf schalten (deaktiviert einen anderen aktiven Modus)
    ArmPick { mode: PickMode },
    /// Pick-Modus deaktivieren
    DisarmPick { mode: PickMode },
    /// Primitive an Screen-Position auflösen und selektieren
    ResolvePrimitivePick { screen_pos: glam::Vec2 },
    /// Tile an Screen-Position auflösen und selektieren
    ResolveTilePick { screen_pos: glam::Vec2 },
}

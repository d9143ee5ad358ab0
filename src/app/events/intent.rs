use super::super::state::PanelSection;
use crate::core::{PrimitiveId, TileId};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Drop-Down-Button geklickt
    DropDownToggled,
    /// Abschnitts-Schalter (+/-) geklickt
    SectionToggled { section: PanelSection },

    /// Checkbox "Frustums" geändert
    ShowFrustumsChanged { enabled: bool },
    /// Checkbox "Performance" geändert
    ShowPerformanceChanged { enabled: bool },

    /// Pick-Primitive-Button geklickt (Toggle)
    PickPrimitiveRequested,
    /// Pick-Tile-Button geklickt (Toggle)
    PickTileRequested,
    /// Maustaste im Canvas gedrückt (Device-Koordinaten)
    PointerPressed { screen_pos: glam::Vec2 },

    /// Checkbox "Bounding Sphere" (Primitive) geändert
    PrimitiveBoundingSphereChanged { enabled: bool },
    /// Checkbox "Reference Frame" geändert
    PrimitiveReferenceFrameChanged { enabled: bool },
    /// Checkbox "Show only selected" (Primitive) geändert
    FilterPrimitiveChanged { enabled: bool },
    /// Primitive programmatisch selektieren (None = aufheben)
    PrimitiveSelectionRequested { primitive: Option<PrimitiveId> },

    /// Checkbox "Wireframe" geändert
    WireframeChanged { enabled: bool },
    /// Checkbox "Suspend LOD update" geändert
    SuspendUpdatesChanged { enabled: bool },
    /// Checkbox "Show tile coordinates" geändert
    TileCoordinatesChanged { enabled: bool },
    /// Checkbox "Bounding Sphere" (Tile) geändert
    TileBoundingSphereChanged { enabled: bool },
    /// Checkbox "Show only selected" (Tile) geändert
    FilterTileChanged { enabled: bool },
    /// Tile programmatisch selektieren (None = aufheben)
    TileSelectionRequested { tile: Option<TileId> },
}

//! Globe-Inspector Library.
//! Selektions- und Filter-Logik eines Debug-Inspectors für Globus-Szenen,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, FilterState, PanelSection, PickMode,
    SelectionChange, TileUpdateMode,
};
pub use core::{
    Cartographic, CommandFilter, Extent, FrustumStatistics, MemoryScene, PrimitiveId,
    ReadinessTable, Scene, ScreenRect, Tile, TileId, TileImagery,
};
pub use shared::InspectorOptions;

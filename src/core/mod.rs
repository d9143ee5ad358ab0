//! Core-Domänentypen: Szenen-Vertrag, Terrain-Tiles, Readiness-Tabelle, Frustum-Statistik.

pub mod frustum;
pub mod memory_scene;
/// Vertrag zur externen Render-Szene
///
/// Der Inspector besitzt keine Render-Daten, sondern referenziert Primitives
/// und Tiles über IDs und greift über das `Scene`-Trait zu.
pub mod scene;
pub mod terrain;

pub use frustum::FrustumStatistics;
pub use memory_scene::{FrameReport, ImageryLayerKind, MemoryPrimitive, MemoryScene};
pub use scene::{CommandFilter, DebugPrimitive, ImageryLayerId, PrimitiveId, Scene, ScreenRect};
pub use terrain::{
    Cartographic, Extent, ReadinessTable, SurfaceDebug, Tile, TileId, TileImagery,
};

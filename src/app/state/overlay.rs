use crate::app::timers::TimerId;
use crate::core::{ImageryLayerId, PrimitiveId};

/// Handles der Overlays, die der Inspector in Szene und Timer-Queue besitzt.
#[derive(Debug, Clone, Default)]
pub struct OverlayState {
    /// Periodischer Timer für den Frustum-Statistik-Text
    pub frustum_poller: Option<TimerId>,
    /// Zuletzt gelesene Frustum-Statistik als Text
    pub frustum_stat_text: String,
    /// Eingefügte Performance-Anzeige
    pub performance_display: Option<PrimitiveId>,
    /// Eingefügter Tile-Koordinaten-Layer
    pub tile_coordinates_layer: Option<ImageryLayerId>,
}

impl OverlayState {
    /// Erstellt einen Zustand ohne aktive Overlays.
    pub fn new() -> Self {
        Self::default()
    }
}

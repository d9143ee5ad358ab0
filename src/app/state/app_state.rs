use crate::app::timers::TimerQueue;
use crate::app::CommandLog;
use crate::core::{CommandFilter, Scene};
use crate::shared::InspectorOptions;
use std::time::Instant;

use super::{DebugFlags, FilterState, OverlayState, PanelState, PickController, SelectionStore};

/// Hauptzustand des Inspectors
pub struct AppState {
    /// Inspizierte Szene (vom Host besessen, hier als Kollaborator geführt)
    pub scene: Box<dyn Scene>,
    /// Selektierte Primitive/Tile-Slots
    pub selection: SelectionStore,
    /// Pick-Modus und Pointer-Listener
    pub picking: PickController,
    /// Checkbox-Zustände
    pub flags: DebugFlags,
    /// Handles eingefügter Overlays
    pub overlays: OverlayState,
    /// Sichtbarkeit der Panel-Abschnitte
    pub panel: PanelState,
    /// Geplante Blink-/Polling-Commands
    pub timers: TimerQueue,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Timer, Performance-Anzeige)
    pub options: InspectorOptions,
}

impl AppState {
    /// Erstellt den Inspector-Zustand für eine Szene.
    ///
    /// Schlägt fehl, wenn die Szene keinen Globus mit Terrain-Oberfläche hat.
    pub fn new(scene: Box<dyn Scene>, options: InspectorOptions) -> anyhow::Result<Self> {
        Self::with_clock(scene, options, Instant::now())
    }

    /// Wie [`AppState::new`], mit explizitem Startzeitpunkt der Timer-Uhr.
    pub fn with_clock(
        scene: Box<dyn Scene>,
        options: InspectorOptions,
        now: Instant,
    ) -> anyhow::Result<Self> {
        if !scene.has_terrain_surface() {
            anyhow::bail!("Szene ohne Terrain-Oberfläche: Inspector benötigt einen Globus");
        }

        Ok(Self {
            scene,
            selection: SelectionStore::new(),
            picking: PickController::new(),
            flags: DebugFlags::default(),
            overlays: OverlayState::new(),
            panel: PanelState::new(),
            timers: TimerQueue::new(now),
            command_log: CommandLog::new(),
            options,
        })
    }

    /// Abgeleiteter Filterzustand des Primitive-Slots.
    pub fn primitive_filter_state(&self) -> FilterState {
        match (self.scene.debug_command_filter(), self.selection.primitive()) {
            (CommandFilter::ByOwner(owner), Some(selected)) if owner == selected => {
                FilterState::ByPrimitive(owner)
            }
            _ => FilterState::None,
        }
    }

    /// Abgeleiteter Filterzustand des Tile-Slots.
    pub fn tile_filter_state(&self) -> FilterState {
        if !self.flags.filter_tile() {
            return FilterState::None;
        }
        let Some(tile) = self.selection.tile() else {
            return FilterState::None;
        };
        self.scene
            .tile(tile)
            .map_or(FilterState::None, |data| FilterState::ByTile {
                tile,
                bucket: data.readiness(),
            })
    }
}

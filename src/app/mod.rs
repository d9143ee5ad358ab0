//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand des Inspectors (Selektion, Pick-Modi,
/// Debug-Schalter, Overlays, Panel).
pub mod state;
pub mod timers;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{
    AppState, DebugFlags, FilterState, OverlayState, PanelSection, PanelState, PickController,
    PickMode, SelectionChange, SelectionStore, TileUpdateMode,
};
pub use timers::{TimerId, TimerQueue};

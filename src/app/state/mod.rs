//! Application State — zentrale Datenhaltung des Inspectors.

mod app_state;
mod flags;
mod overlay;
mod panel;
mod picking;
mod selection;

pub use app_state::AppState;
pub use flags::{DebugFlags, TileUpdateMode, TileUpdateToggle};
pub use overlay::OverlayState;
pub use panel::{PanelSection, PanelState};
pub use picking::{PickController, PickMode};
pub use selection::{FilterState, SelectionChange, SelectionStore};

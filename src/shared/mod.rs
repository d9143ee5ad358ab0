//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und Konstanten, die zwischen `app`, `ui` und dem
//! Binary geteilt werden.

pub mod options;

pub use options::InspectorOptions;
pub use options::{FLASH_DELAY_MS, FRUSTUM_STATS_INTERVAL_MS};

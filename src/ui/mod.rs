//! UI-Layer mit egui: rendert den Inspector-Zustand und erzeugt Intents.

pub mod inspector_panel;

pub use inspector_panel::render_inspector_panel;

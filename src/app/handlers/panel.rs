//! Handler für Drop-Down und Panel-Abschnitte.

use crate::app::state::PanelSection;
use crate::app::AppState;

/// Klappt das Drop-Down des Inspectors um.
pub fn toggle_drop_down(state: &mut AppState) {
    state.panel.drop_down_visible = !state.panel.drop_down_visible;
}

/// Klappt einen Abschnitt um.
pub fn toggle_section(state: &mut AppState, section: PanelSection) {
    let visible = state.panel.toggle(section);
    log::debug!("Abschnitt {:?} sichtbar: {}", section, visible);
}

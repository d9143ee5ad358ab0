//! Handler für Overlays: Frustums, Performance-Anzeige, Wireframe, Tile-Koordinaten.

use crate::app::use_cases;
use crate::app::{AppCommand, AppState};
use crate::core::DebugPrimitive;

/// Schaltet die Frustum-Visualisierung samt Statistik-Polling.
///
/// Ein laufender Poller wird immer zuerst abgebrochen, es gibt höchstens einen.
pub fn set_show_frustums(state: &mut AppState, enabled: bool) {
    state.flags.frustums = enabled;
    if let Some(poller) = state.overlays.frustum_poller.take() {
        state.timers.cancel(poller);
    }
    state.scene.set_debug_show_frustums(enabled);

    if enabled {
        let poller = state.timers.schedule_repeating(
            state.options.frustum_stats_interval(),
            AppCommand::RefreshFrustumStatistics,
        );
        state.overlays.frustum_poller = Some(poller);
        log::debug!("Frustum-Poller {:?} gestartet", poller);
    } else {
        state.overlays.frustum_stat_text.clear();
    }
}

/// Liest die Frustum-Statistik der Szene in den Anzeige-Text.
pub fn refresh_frustum_statistics(state: &mut AppState) {
    let statistics = state.scene.debug_frustum_statistics();
    state.overlays.frustum_stat_text =
        use_cases::frustum_stats::frustum_stats_text(statistics.as_ref());
}

/// Fügt die Performance-Anzeige ein bzw. entfernt sie.
pub fn set_show_performance(state: &mut AppState, enabled: bool) {
    state.flags.performance = enabled;

    match (enabled, state.overlays.performance_display) {
        (true, None) => {
            let display = state
                .scene
                .add_debug_primitive(DebugPrimitive::PerformanceDisplay {
                    rectangle: state.options.performance_display_rectangle(),
                    background_color: state.options.performance_display_background,
                    font: state.options.performance_display_font.clone(),
                });
            state.overlays.performance_display = Some(display);
            log::debug!("Performance-Anzeige {:?} eingefügt", display);
        }
        (false, Some(display)) => {
            if state.scene.remove_primitive(display) {
                log::debug!("Performance-Anzeige {:?} entfernt", display);
            } else {
                log::warn!("Performance-Anzeige {:?} war nicht mehr vorhanden", display);
            }
            state.overlays.performance_display = None;
        }
        _ => {}
    }
}

/// Setzt die Wireframe-Darstellung der Oberfläche.
pub fn set_wireframe(state: &mut AppState, enabled: bool) {
    state.flags.wireframe = enabled;
    state.scene.set_wireframe(enabled);
}

/// Fügt den Tile-Koordinaten-Layer ein bzw. entfernt ihn.
pub fn set_tile_coordinates(state: &mut AppState, enabled: bool) {
    state.flags.tile_coordinates = enabled;

    match (enabled, state.overlays.tile_coordinates_layer) {
        (true, None) => {
            let layer = state.scene.add_tile_coordinates_layer();
            state.overlays.tile_coordinates_layer = Some(layer);
            log::debug!("Tile-Koordinaten-Layer {:?} eingefügt", layer);
        }
        (false, Some(layer)) => {
            if !state.scene.remove_imagery_layer(layer) {
                log::warn!("Tile-Koordinaten-Layer {:?} war nicht mehr vorhanden", layer);
            }
            state.overlays.tile_coordinates_layer = None;
        }
        _ => {}
    }
}

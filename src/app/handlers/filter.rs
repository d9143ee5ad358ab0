//! Handler für Render-Filter und LOD-Update-Steuerung.

use crate::app::use_cases;
use crate::app::use_cases::render_filter;
use crate::app::AppState;

/// Schaltet den Primitive-Filter.
pub fn set_filter_primitive(state: &mut AppState, enabled: bool) {
    state.flags.filter_primitive = enabled;
    use_cases::selection::apply_primitive_filter(state);
}

/// Schaltet die Isolation des selektierten Tiles.
pub fn set_filter_tile(state: &mut AppState, enabled: bool) {
    let tile = state.selection.tile();
    let bucket = render_filter::apply_tile_isolation(
        state.scene.as_mut(),
        &mut state.flags.tile_update_mode,
        enabled,
        tile,
    );
    if enabled {
        log::info!("Tile-Filter aktiv: {:?} in Bucket {:?}", tile, bucket);
    } else {
        log::info!("Tile-Filter aus, LOD-Updates laufen wieder");
    }
}

/// Setzt "Suspend LOD update". Fortsetzen beendet auch einen aktiven Tile-Filter.
pub fn set_suspend_updates(state: &mut AppState, enabled: bool) {
    render_filter::apply_suspend_updates(
        state.scene.as_mut(),
        &mut state.flags.tile_update_mode,
        enabled,
    );
}

//! Handler für Pick-Modi und Pick-Auflösung.

use crate::app::state::PickMode;
use crate::app::use_cases;
use crate::app::use_cases::picking::TilePick;
use crate::app::AppState;

/// Schaltet einen Pick-Modus scharf; ein anderer aktiver Modus wird verdrängt.
pub fn arm(state: &mut AppState, mode: PickMode) {
    if let Some(displaced) = state.picking.arm(mode) {
        log::debug!("Pick-Modus {:?} verdrängt durch {:?}", displaced, mode);
    }
    log::debug!("Pick-Modus scharf: {:?}", mode);
}

/// Deaktiviert einen Pick-Modus (idempotent).
pub fn disarm(state: &mut AppState, mode: PickMode) {
    if state.picking.disarm(mode) {
        log::debug!("Pick-Modus deaktiviert: {:?}", mode);
    }
}

/// Löst einen Primitive-Pick auf. Der Modus wird vor der Auflösung verbraucht.
pub fn resolve_primitive_pick(state: &mut AppState, screen_pos: glam::Vec2) {
    if !state.picking.take_listener(PickMode::PickingPrimitive) {
        log::debug!("Primitive-Pick ohne aktiven Modus ignoriert");
        return;
    }

    match use_cases::picking::resolve_primitive(state.scene.as_ref(), screen_pos) {
        Some(primitive) => {
            use_cases::selection::set_primitive(state, Some(primitive));
        }
        None => log::info!("Primitive-Pick ohne Treffer bei {:?}", screen_pos),
    }
}

/// Löst einen Tile-Pick auf. Der Modus wird vor der Auflösung verbraucht.
pub fn resolve_tile_pick(state: &mut AppState, screen_pos: glam::Vec2) {
    if !state.picking.take_listener(PickMode::PickingTile) {
        log::debug!("Tile-Pick ohne aktiven Modus ignoriert");
        return;
    }

    match use_cases::picking::resolve_tile(state.scene.as_ref(), screen_pos) {
        TilePick::Missed => log::info!("Tile-Pick verfehlt den Globus bei {:?}", screen_pos),
        TilePick::Resolved(tile) => use_cases::selection::set_tile(state, tile),
    }
}

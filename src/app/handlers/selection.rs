//! Handler für Primitive- und Tile-Selektion samt Dekorations-Schaltern.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{PrimitiveId, TileId};

/// Ersetzt das selektierte Primitive.
pub fn select_primitive(state: &mut AppState, primitive: Option<PrimitiveId>) {
    use_cases::selection::set_primitive(state, primitive);
}

/// Blendet ein Primitive nach dem Selektions-Blinken wieder ein.
pub fn reveal_primitive(state: &mut AppState, primitive: PrimitiveId) {
    use_cases::selection::reveal_primitive(state, primitive);
}

/// Setzt den Bounding-Sphere-Schalter und überträgt ihn auf die Selektion.
pub fn set_primitive_bounding_sphere(state: &mut AppState, enabled: bool) {
    state.flags.primitive_bounding_sphere = enabled;
    use_cases::selection::apply_primitive_bounding_sphere(state);
}

/// Setzt den Reference-Frame-Schalter und überträgt ihn auf die Selektion.
pub fn set_primitive_reference_frame(state: &mut AppState, enabled: bool) {
    state.flags.primitive_reference_frame = enabled;
    use_cases::selection::apply_primitive_reference_frame(state);
}

/// Ersetzt das selektierte Tile.
pub fn select_tile(state: &mut AppState, tile: Option<TileId>) {
    use_cases::selection::set_tile(state, tile);
}

/// Setzt den Tile-Bounding-Sphere-Schalter.
pub fn set_tile_bounding_sphere(state: &mut AppState, enabled: bool) {
    state.flags.tile_bounding_sphere = enabled;
    use_cases::selection::apply_tile_bounding_sphere(state);
}

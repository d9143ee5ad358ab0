//! Use-Case: Primitive- und Tile-Selektion samt Debug-Dekorationen.
//!
//! Jede Zuweisung räumt zuerst die Dekorationen des vorherigen Werts ab
//! (Bounding-Volume, Achsenkreuz, Filter) und wendet sie danach gemäß der
//! Checkbox-Zustände neu an. Keine Dekoration zeigt danach auf ein altes Ziel.

use super::render_filter;
use crate::app::AppCommand;
use crate::core::{DebugPrimitive, PrimitiveId, Tile, TileId};
use crate::AppState;

/// Setzt das selektierte Primitive.
///
/// Gibt `false` zurück, wenn sich nichts geändert hat (gleiche Referenz,
/// unbekanntes oder inspector-eigenes Primitive).
pub fn set_primitive(state: &mut AppState, primitive: Option<PrimitiveId>) -> bool {
    if state.selection.primitive() == primitive {
        return false;
    }
    if let Some(id) = primitive {
        if !state.scene.contains_primitive(id) {
            log::warn!("Primitive {:?} nicht in der Szene, Selektion unverändert", id);
            return false;
        }
        if is_inspector_owned(state, id) {
            log::warn!("Primitive {:?} ist ein Debug-Primitive des Inspectors, nicht selektierbar", id);
            return false;
        }
    }

    if let Some(previous) = state.selection.primitive() {
        state
            .scene
            .set_primitive_debug_bounding_volume(previous, false);
    }
    render_filter::apply_primitive_filter(state.scene.as_mut(), false, None);
    remove_reference_frame(state);

    state.selection.replace_primitive(primitive);

    if let Some(id) = primitive {
        log::info!("Primitive {:?} selektiert", id);
        flash_primitive(state, id);
        apply_primitive_bounding_sphere(state);
        apply_primitive_reference_frame(state);
        apply_primitive_filter(state);
    } else {
        log::info!("Primitive-Selektion aufgehoben");
    }

    true
}

/// Achsenkreuz und Performance-Anzeige gehören dem Inspector und werden beim
/// Umselektieren selbst entfernt.
fn is_inspector_owned(state: &AppState, id: PrimitiveId) -> bool {
    state.selection.reference_frame() == Some(id) || state.overlays.performance_display == Some(id)
}

/// Blendet das Primitive kurz aus; ein Timer blendet es wieder ein.
fn flash_primitive(state: &mut AppState, primitive: PrimitiveId) {
    state.scene.set_primitive_show(primitive, false);
    state.timers.schedule_once(
        state.options.flash_delay(),
        AppCommand::RevealPrimitive { primitive },
    );
}

/// Blendet ein Primitive nach dem Selektions-Blinken wieder ein.
pub fn reveal_primitive(state: &mut AppState, primitive: PrimitiveId) {
    state.scene.set_primitive_show(primitive, true);
}

/// Überträgt die Bounding-Sphere-Checkbox auf das selektierte Primitive.
pub fn apply_primitive_bounding_sphere(state: &mut AppState) {
    if let Some(id) = state.selection.primitive() {
        state
            .scene
            .set_primitive_debug_bounding_volume(id, state.flags.primitive_bounding_sphere);
    }
}

/// Überträgt die Reference-Frame-Checkbox: Achsenkreuz einfügen oder entfernen.
pub fn apply_primitive_reference_frame(state: &mut AppState) {
    if !state.flags.primitive_reference_frame {
        remove_reference_frame(state);
        return;
    }
    if state.selection.reference_frame().is_some() {
        return;
    }
    let Some(id) = state.selection.primitive() else {
        return;
    };
    let Some(model_matrix) = state.scene.primitive_model_matrix(id) else {
        log::warn!("Primitive {:?} ohne Model-Matrix, kein Achsenkreuz", id);
        return;
    };

    let frame = state
        .scene
        .add_debug_primitive(DebugPrimitive::ReferenceFrame { model_matrix });
    state.selection.attach_reference_frame(frame);
    log::debug!("Achsenkreuz {:?} für Primitive {:?}", frame, id);
}

fn remove_reference_frame(state: &mut AppState) {
    if let Some(frame) = state.selection.take_reference_frame() {
        if !state.scene.remove_primitive(frame) {
            log::debug!("Achsenkreuz {:?} war bereits entfernt", frame);
        }
    }
}

/// Überträgt die Filter-Checkbox auf das selektierte Primitive.
pub fn apply_primitive_filter(state: &mut AppState) {
    render_filter::apply_primitive_filter(
        state.scene.as_mut(),
        state.flags.filter_primitive,
        state.selection.primitive(),
    );
}

/// Anzeige-Text eines Tiles: Adresse, SW- und NE-Ecke.
pub fn tile_display_text(tile: &Tile) -> String {
    format!(
        "L: {} X: {} Y: {}\nSW corner: {}, {}\nNE corner: {}, {}",
        tile.level,
        tile.x,
        tile.y,
        tile.extent.west,
        tile.extent.south,
        tile.extent.east,
        tile.extent.north
    )
}

/// Setzt das selektierte Tile und wendet Bounding-Sphere und Isolation neu an.
///
/// `None` hebt die Selektion auf; die Dekorationen laufen trotzdem durch
/// denselben Pfad und zeigen danach auf kein Tile mehr.
pub fn set_tile(state: &mut AppState, tile: Option<TileId>) {
    match tile {
        Some(id) => {
            let Some(text) = state.scene.tile(id).map(tile_display_text) else {
                log::warn!("Tile {:?} nicht in der Szene, Selektion unverändert", id);
                return;
            };
            if state.selection.tile() != Some(id) {
                state.selection.set_tile_text(text);
                log::info!("Tile {:?} selektiert", id);
            }
            state.selection.replace_tile(Some(id));
        }
        None => {
            state.selection.replace_tile(None);
            state.selection.set_tile_text(String::new());
        }
    }

    apply_tile_bounding_sphere(state);
    apply_tile_filter(state);
}

/// Überträgt die Tile-Bounding-Sphere-Checkbox auf die Oberfläche.
pub fn apply_tile_bounding_sphere(state: &mut AppState) {
    let tile = if state.flags.tile_bounding_sphere {
        state.selection.tile()
    } else {
        None
    };
    state.scene.set_bounding_sphere_tile(tile);
}

/// Überträgt die Tile-Filter-Checkbox (Isolation des selektierten Tiles).
pub fn apply_tile_filter(state: &mut AppState) {
    let enabled = state.flags.filter_tile();
    let tile = state.selection.tile();
    render_filter::apply_tile_isolation(
        state.scene.as_mut(),
        &mut state.flags.tile_update_mode,
        enabled,
        tile,
    );
}

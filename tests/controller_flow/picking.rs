use crate::common::Inspector;
use globe_inspector::{AppCommand, AppIntent, PickMode, TileId};

#[test]
fn arming_tile_pick_displaces_primitive_pick() {
    let mut inspector = Inspector::new();

    inspector.send(AppIntent::PickPrimitiveRequested);
    assert!(inspector.state.picking.pick_primitive_active());

    inspector.send(AppIntent::PickTileRequested);

    assert!(!inspector.state.picking.pick_primitive_active());
    assert!(inspector.state.picking.pick_tile_active());
    assert_eq!(inspector.state.picking.armed_mode(), PickMode::PickingTile);
}

#[test]
fn click_is_routed_only_to_remaining_listener() {
    let mut inspector = Inspector::new();
    inspector.send(AppIntent::PickPrimitiveRequested);
    inspector.send(AppIntent::PickTileRequested);

    // Über Modell A, aber nur der Tile-Listener ist registriert
    let pos = inspector.model_a_pos;
    inspector.click(pos);

    assert_eq!(inspector.state.selection.primitive(), None);
    assert!(inspector
        .state
        .command_log
        .entries()
        .iter()
        .all(|command| !matches!(command, AppCommand::ResolvePrimitivePick { .. })));
}

#[test]
fn pick_button_toggles_off_when_pressed_again() {
    let mut inspector = Inspector::new();

    inspector.send(AppIntent::PickPrimitiveRequested);
    inspector.send(AppIntent::PickPrimitiveRequested);

    assert_eq!(inspector.state.picking.armed_mode(), PickMode::Idle);
}

#[test]
fn primitive_pick_hit_selects_and_disarms() {
    let mut inspector = Inspector::new();

    let pos = inspector.model_b_pos;
    inspector.pick_primitive_at(pos);

    assert_eq!(
        inspector.state.selection.primitive(),
        Some(inspector.model_b)
    );
    assert!(inspector.state.selection.has_picked_primitive());
    assert!(!inspector.state.picking.pick_primitive_active());
}

#[test]
fn primitive_pick_miss_keeps_selection_and_disarms() {
    let mut inspector = Inspector::new();
    let pos = inspector.model_a_pos;
    inspector.pick_primitive_at(pos);

    let miss = inspector.off_globe_pos;
    inspector.pick_primitive_at(miss);

    assert_eq!(
        inspector.state.selection.primitive(),
        Some(inspector.model_a)
    );
    assert_eq!(inspector.state.picking.armed_mode(), PickMode::Idle);
}

#[test]
fn second_click_after_pick_is_not_captured() {
    let mut inspector = Inspector::new();
    let pos = inspector.model_a_pos;
    inspector.pick_primitive_at(pos);
    let logged = inspector.state.command_log.len();

    let other = inspector.model_b_pos;
    inspector.click(other);

    assert_eq!(inspector.state.command_log.len(), logged);
    assert_eq!(
        inspector.state.selection.primitive(),
        Some(inspector.model_a)
    );
}

#[test]
fn tile_pick_uses_lowest_readiness_bucket_on_overlap() {
    let mut inspector = Inspector::new();

    let pos = inspector.overlap_pos;
    inspector.pick_tile_at(pos);

    assert_eq!(inspector.state.selection.tile(), Some(TileId(2)));
    assert!(!inspector.state.picking.pick_tile_active());
}

#[test]
fn tile_pick_off_globe_keeps_selection_and_disarms() {
    let mut inspector = Inspector::new();
    let pos = inspector.tile_three_pos;
    inspector.pick_tile_at(pos);

    let miss = inspector.off_globe_pos;
    inspector.pick_tile_at(miss);

    assert_eq!(inspector.state.selection.tile(), Some(TileId(3)));
    assert_eq!(inspector.state.picking.armed_mode(), PickMode::Idle);
}

#[test]
fn tile_pick_on_globe_without_tile_clears_selection() {
    let mut inspector = Inspector::new();
    let pos = inspector.tile_three_pos;
    inspector.pick_tile_at(pos);

    let empty = inspector.empty_globe_pos;
    inspector.pick_tile_at(empty);

    assert_eq!(inspector.state.selection.tile(), None);
    assert!(!inspector.state.selection.has_picked_tile());
    assert!(inspector.state.selection.tile_text().is_empty());
}

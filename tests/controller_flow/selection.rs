use crate::common::Inspector;
use globe_inspector::{AppIntent, CommandFilter, FilterState, Scene, SelectionChange};

#[test]
fn selected_primitive_blinks_and_reappears_after_flash_delay() {
    let mut inspector = Inspector::new();
    let pos = inspector.model_a_pos;
    inspector.pick_primitive_at(pos);
    let model = inspector.model_a;

    assert_eq!(inspector.state.scene.primitive_show(model), Some(false));

    inspector.tick_at(49);
    assert_eq!(inspector.state.scene.primitive_show(model), Some(false));

    inspector.tick_at(50);
    assert_eq!(inspector.state.scene.primitive_show(model), Some(true));
    assert!(inspector.state.timers.is_empty());
}

#[test]
fn decorations_follow_selection_across_picks() {
    let mut inspector = Inspector::new();
    inspector.send(AppIntent::PrimitiveBoundingSphereChanged { enabled: true });
    inspector.send(AppIntent::PrimitiveReferenceFrameChanged { enabled: true });
    inspector.send(AppIntent::FilterPrimitiveChanged { enabled: true });
    let (a, b) = (inspector.model_a, inspector.model_b);

    let pos = inspector.model_a_pos;
    inspector.pick_primitive_at(pos);
    let frame_a = inspector
        .state
        .selection
        .reference_frame()
        .expect("Achsenkreuz für A");
    assert_eq!(inspector.state.primitive_filter_state(), FilterState::ByPrimitive(a));

    inspector.tick_at(50);
    let pos = inspector.model_b_pos;
    inspector.pick_primitive_at(pos);

    let scene = &inspector.state.scene;
    assert_eq!(scene.primitive_debug_bounding_volume(a), Some(false));
    assert_eq!(scene.primitive_debug_bounding_volume(b), Some(true));
    assert!(!scene.contains_primitive(frame_a));
    assert_eq!(scene.debug_command_filter(), CommandFilter::ByOwner(b));
    assert_eq!(inspector.state.primitive_filter_state(), FilterState::ByPrimitive(b));
}

#[test]
fn deselecting_programmatically_removes_all_decorations() {
    let mut inspector = Inspector::new();
    inspector.send(AppIntent::PrimitiveBoundingSphereChanged { enabled: true });
    inspector.send(AppIntent::PrimitiveReferenceFrameChanged { enabled: true });
    inspector.send(AppIntent::FilterPrimitiveChanged { enabled: true });
    let pos = inspector.model_a_pos;
    inspector.pick_primitive_at(pos);
    let frame = inspector.state.selection.reference_frame().expect("Achsenkreuz");

    inspector.send(AppIntent::PrimitiveSelectionRequested { primitive: None });

    let scene = &inspector.state.scene;
    assert_eq!(scene.primitive_debug_bounding_volume(inspector.model_a), Some(false));
    assert!(!scene.contains_primitive(frame));
    assert_eq!(scene.debug_command_filter(), CommandFilter::Unfiltered);
    assert_eq!(inspector.state.primitive_filter_state(), FilterState::None);
    assert!(!inspector.state.selection.has_picked_primitive());
}

#[test]
fn toggles_without_selection_only_record_flags() {
    let mut inspector = Inspector::new();

    inspector.send(AppIntent::PrimitiveBoundingSphereChanged { enabled: true });
    inspector.send(AppIntent::PrimitiveReferenceFrameChanged { enabled: true });
    inspector.send(AppIntent::FilterPrimitiveChanged { enabled: true });

    assert!(inspector.state.flags.primitive_bounding_sphere);
    assert_eq!(inspector.state.selection.reference_frame(), None);
    assert_eq!(
        inspector.state.scene.debug_command_filter(),
        CommandFilter::Unfiltered
    );
}

#[test]
fn reference_frame_toggle_off_removes_gizmo() {
    let mut inspector = Inspector::new();
    let pos = inspector.model_a_pos;
    inspector.pick_primitive_at(pos);

    inspector.send(AppIntent::PrimitiveReferenceFrameChanged { enabled: true });
    let frame = inspector.state.selection.reference_frame().expect("Achsenkreuz");
    assert!(inspector.state.scene.contains_primitive(frame));

    inspector.send(AppIntent::PrimitiveReferenceFrameChanged { enabled: false });

    assert_eq!(inspector.state.selection.reference_frame(), None);
    assert!(!inspector.state.scene.contains_primitive(frame));
}

#[test]
fn selection_changes_are_published_in_order() {
    let mut inspector = Inspector::new();
    let pos = inspector.model_a_pos;
    inspector.pick_primitive_at(pos);
    let pos = inspector.tile_three_pos;
    inspector.pick_tile_at(pos);
    inspector.send(AppIntent::PrimitiveSelectionRequested { primitive: None });

    let changes = inspector.state.selection.drain_changes();

    assert_eq!(changes.len(), 3);
    assert_eq!(changes[0], SelectionChange::Primitive(Some(inspector.model_a)));
    assert!(matches!(changes[1], SelectionChange::Tile(Some(_))));
    assert_eq!(changes[2], SelectionChange::Primitive(None));
}

#[test]
fn tile_selection_shows_address_and_corners() {
    let mut inspector = Inspector::new();
    inspector.send(AppIntent::TileBoundingSphereChanged { enabled: true });

    let pos = inspector.tile_three_pos;
    inspector.pick_tile_at(pos);

    assert_eq!(
        inspector.state.selection.tile_text(),
        "L: 6 X: 6 Y: 4\nSW corner: 1, 0\nNE corner: 1.5, 0.5"
    );
    assert_eq!(
        inspector.state.scene.surface_debug().bounding_sphere_tile,
        inspector.state.selection.tile()
    );
}

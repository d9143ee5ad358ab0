use crate::common::Inspector;
use globe_inspector::{AppIntent, FilterState, Scene, TileId, TileUpdateMode};

#[test]
fn filter_without_selected_tile_renders_nothing() {
    let mut inspector = Inspector::new();

    inspector.send(AppIntent::FilterTileChanged { enabled: true });

    let state = &inspector.state;
    assert!(state.scene.readiness_table().is_empty());
    assert!(state.scene.surface_debug().suspend_lod_update);
    assert!(state.flags.suspend_updates());
    assert!(state.flags.filter_tile());
    assert_eq!(state.tile_filter_state(), FilterState::None);
}

#[test]
fn filter_isolates_selected_tile_in_its_bucket() {
    let mut inspector = Inspector::new();
    let pos = inspector.overlap_pos;
    inspector.pick_tile_at(pos);
    inspector.send(AppIntent::TileSelectionRequested {
        tile: Some(TileId(1)),
    });

    inspector.send(AppIntent::FilterTileChanged { enabled: true });

    let table = inspector.state.scene.readiness_table();
    assert_eq!(table.tile_count(), 1);
    assert_eq!(table.bucket(2), &[TileId(1)]);
    assert!(table.bucket(0).is_empty());
    assert_eq!(table.slot_count(), 3);
    assert_eq!(
        inspector.state.tile_filter_state(),
        FilterState::ByTile {
            tile: TileId(1),
            bucket: 2
        }
    );
}

#[test]
fn disabling_filter_resumes_updates_and_restores_table() {
    let mut inspector = Inspector::new();
    let pos = inspector.tile_three_pos;
    inspector.pick_tile_at(pos);
    inspector.send(AppIntent::FilterTileChanged { enabled: true });
    assert_eq!(inspector.state.scene.readiness_table().tile_count(), 1);

    inspector.send(AppIntent::FilterTileChanged { enabled: false });

    assert_eq!(inspector.state.flags.tile_update_mode, TileUpdateMode::Live);
    assert!(!inspector.state.scene.surface_debug().suspend_lod_update);
    assert_eq!(inspector.state.scene.readiness_table().tile_count(), 3);
}

#[test]
fn resuming_updates_also_ends_tile_filter() {
    let mut inspector = Inspector::new();
    let pos = inspector.tile_three_pos;
    inspector.pick_tile_at(pos);
    inspector.send(AppIntent::FilterTileChanged { enabled: true });

    inspector.send(AppIntent::SuspendUpdatesChanged { enabled: false });

    assert!(!inspector.state.flags.filter_tile());
    assert!(!inspector.state.flags.suspend_updates());
    assert_eq!(inspector.state.scene.readiness_table().tile_count(), 3);
}

#[test]
fn suspending_keeps_active_isolation() {
    let mut inspector = Inspector::new();
    let pos = inspector.tile_three_pos;
    inspector.pick_tile_at(pos);
    inspector.send(AppIntent::FilterTileChanged { enabled: true });

    inspector.send(AppIntent::SuspendUpdatesChanged { enabled: true });

    assert_eq!(
        inspector.state.flags.tile_update_mode,
        TileUpdateMode::Isolated
    );
    assert_eq!(
        inspector.state.scene.readiness_table().bucket(1),
        &[TileId(3)]
    );
}

#[test]
fn reselecting_tile_moves_isolation_to_new_tile() {
    let mut inspector = Inspector::new();
    let pos = inspector.tile_three_pos;
    inspector.pick_tile_at(pos);
    inspector.send(AppIntent::FilterTileChanged { enabled: true });

    inspector.send(AppIntent::TileSelectionRequested {
        tile: Some(TileId(2)),
    });

    let table = inspector.state.scene.readiness_table();
    assert_eq!(table.tile_count(), 1);
    assert_eq!(table.bucket(0), &[TileId(2)]);
    assert!(table.bucket(1).is_empty());
}

#[test]
fn picking_while_isolated_scans_isolated_table_only() {
    let mut inspector = Inspector::new();
    inspector.send(AppIntent::TileSelectionRequested {
        tile: Some(TileId(1)),
    });
    inspector.send(AppIntent::FilterTileChanged { enabled: true });

    // Tile 2 überlappt, steht aber nicht mehr in der Tabelle
    let pos = inspector.overlap_pos;
    inspector.pick_tile_at(pos);

    assert_eq!(inspector.state.selection.tile(), Some(TileId(1)));
}

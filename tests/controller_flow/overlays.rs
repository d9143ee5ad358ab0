use crate::common::Inspector;
use globe_inspector::{AppIntent, PanelSection, Scene};

#[test]
fn frustum_poller_refreshes_text_until_disabled() {
    let mut inspector = Inspector::new();

    inspector.send(AppIntent::ShowFrustumsChanged { enabled: true });
    assert!(inspector.state.scene.debug_show_frustums());
    assert!(inspector.state.overlays.frustum_stat_text.is_empty());

    inspector.tick_at(100);
    assert_eq!(
        inspector.state.overlays.frustum_stat_text,
        "Total commands: 2\nCommands in frustums:\n  0: 2"
    );

    inspector.send(AppIntent::ShowFrustumsChanged { enabled: false });

    assert!(!inspector.state.scene.debug_show_frustums());
    assert!(inspector.state.overlays.frustum_poller.is_none());
    assert!(inspector.state.timers.is_empty());
    assert!(inspector.state.overlays.frustum_stat_text.is_empty());

    inspector.tick_at(500);
    assert!(inspector.state.overlays.frustum_stat_text.is_empty());
}

#[test]
fn reenabling_frustums_never_leaves_two_pollers() {
    let mut inspector = Inspector::new();

    inspector.send(AppIntent::ShowFrustumsChanged { enabled: true });
    let first = inspector.state.overlays.frustum_poller.expect("Poller aktiv");
    inspector.send(AppIntent::ShowFrustumsChanged { enabled: true });
    let second = inspector.state.overlays.frustum_poller.expect("Poller aktiv");

    assert_ne!(first, second);
    assert!(!inspector.state.timers.is_scheduled(first));
    assert_eq!(inspector.state.timers.len(), 1);
}

#[test]
fn performance_display_is_added_once_and_removed() {
    let mut inspector = Inspector::new();

    inspector.send(AppIntent::ShowPerformanceChanged { enabled: true });
    let display = inspector
        .state
        .overlays
        .performance_display
        .expect("Performance-Anzeige eingefügt");
    inspector.send(AppIntent::ShowPerformanceChanged { enabled: true });

    assert_eq!(inspector.state.overlays.performance_display, Some(display));
    assert!(inspector.state.scene.contains_primitive(display));

    inspector.send(AppIntent::ShowPerformanceChanged { enabled: false });

    assert_eq!(inspector.state.overlays.performance_display, None);
    assert!(!inspector.state.scene.contains_primitive(display));
}

#[test]
fn disabling_performance_display_removed_elsewhere_clears_handle() {
    let mut inspector = Inspector::new();
    inspector.send(AppIntent::ShowPerformanceChanged { enabled: true });
    let display = inspector
        .state
        .overlays
        .performance_display
        .expect("Performance-Anzeige eingefügt");
    assert!(inspector.state.scene.remove_primitive(display));

    inspector.send(AppIntent::ShowPerformanceChanged { enabled: false });
    assert_eq!(inspector.state.overlays.performance_display, None);

    inspector.send(AppIntent::ShowPerformanceChanged { enabled: true });
    let replacement = inspector
        .state
        .overlays
        .performance_display
        .expect("neue Performance-Anzeige");
    assert_ne!(replacement, display);
    assert!(inspector.state.scene.contains_primitive(replacement));
}

#[test]
fn tile_coordinates_layer_follows_checkbox() {
    let mut inspector = Inspector::new();

    inspector.send(AppIntent::TileCoordinatesChanged { enabled: true });
    let layer = inspector
        .state
        .overlays
        .tile_coordinates_layer
        .expect("Layer eingefügt");

    inspector.send(AppIntent::TileCoordinatesChanged { enabled: false });

    assert_eq!(inspector.state.overlays.tile_coordinates_layer, None);
    assert!(!inspector.state.scene.remove_imagery_layer(layer));
}

#[test]
fn wireframe_checkbox_writes_surface_switch() {
    let mut inspector = Inspector::new();

    inspector.send(AppIntent::WireframeChanged { enabled: true });
    assert!(inspector.state.scene.surface_debug().wireframe);

    inspector.send(AppIntent::WireframeChanged { enabled: false });
    assert!(!inspector.state.scene.surface_debug().wireframe);
}

#[test]
fn panel_sections_toggle_switch_texts() {
    let mut inspector = Inspector::new();

    inspector.send(AppIntent::SectionToggled {
        section: PanelSection::Terrain,
    });
    inspector.send(AppIntent::SectionToggled {
        section: PanelSection::General,
    });
    inspector.send(AppIntent::DropDownToggled);

    let panel = &inspector.state.panel;
    assert_eq!(panel.switch_text(PanelSection::Terrain), "-");
    assert_eq!(panel.switch_text(PanelSection::General), "+");
    assert_eq!(panel.switch_text(PanelSection::Primitives), "+");
    assert!(!panel.drop_down_visible);
    assert_eq!(inspector.state.command_log.len(), 3);
}

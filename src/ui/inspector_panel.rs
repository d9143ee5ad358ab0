//! Inspector-Fenster: Drop-Down mit den Abschnitten General, Primitives und Terrain.

use crate::app::{AppIntent, AppState, PanelSection};

/// Rendert das Inspector-Fenster und gibt erzeugte Events zurück.
pub fn render_inspector_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::Window::new("Globe Inspector")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            let drop_down_label = if state.panel.drop_down_visible {
                "Inspector ▲"
            } else {
                "Inspector ▼"
            };
            if ui.button(drop_down_label).clicked() {
                events.push(AppIntent::DropDownToggled);
            }
            if !state.panel.drop_down_visible {
                return;
            }

            render_section(ui, state, PanelSection::General, "General", &mut events, |ui, events| {
                render_general(ui, state, events)
            });
            render_section(
                ui,
                state,
                PanelSection::Primitives,
                "Primitives",
                &mut events,
                |ui, events| render_primitives(ui, state, events),
            );
            render_section(ui, state, PanelSection::Terrain, "Terrain", &mut events, |ui, events| {
                render_terrain(ui, state, events)
            });
        });

    events
}

/// Abschnitt mit "+"/"-"-Schalter; der Inhalt wird nur ausgeklappt gerendert.
fn render_section(
    ui: &mut egui::Ui,
    state: &AppState,
    section: PanelSection,
    title: &str,
    events: &mut Vec<AppIntent>,
    content: impl FnOnce(&mut egui::Ui, &mut Vec<AppIntent>),
) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.small_button(state.panel.switch_text(section)).clicked() {
            events.push(AppIntent::SectionToggled { section });
        }
        ui.strong(title);
    });
    if state.panel.is_visible(section) {
        ui.indent(title, |ui| content(ui, events));
    }
}

/// Checkbox, die bei Änderung einen Intent mit dem neuen Wert erzeugt.
fn checkbox(
    ui: &mut egui::Ui,
    current: bool,
    label: &str,
    events: &mut Vec<AppIntent>,
    intent: impl FnOnce(bool) -> AppIntent,
) {
    let mut value = current;
    if ui.checkbox(&mut value, label).changed() {
        events.push(intent(value));
    }
}

fn render_general(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    checkbox(ui, state.flags.frustums, "Show Frustums", events, |enabled| {
        AppIntent::ShowFrustumsChanged { enabled }
    });
    if state.flags.frustums && !state.overlays.frustum_stat_text.is_empty() {
        ui.monospace(&state.overlays.frustum_stat_text);
    }
    checkbox(
        ui,
        state.flags.performance,
        "Performance Display",
        events,
        |enabled| AppIntent::ShowPerformanceChanged { enabled },
    );
}

fn render_primitives(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    if ui
        .selectable_label(state.picking.pick_primitive_active(), "Pick a primitive")
        .clicked()
    {
        events.push(AppIntent::PickPrimitiveRequested);
    }

    ui.add_enabled_ui(state.selection.has_picked_primitive(), |ui| {
        checkbox(
            ui,
            state.flags.primitive_bounding_sphere,
            "Show bounding sphere",
            events,
            |enabled| AppIntent::PrimitiveBoundingSphereChanged { enabled },
        );
        checkbox(
            ui,
            state.flags.primitive_reference_frame,
            "Show reference frame",
            events,
            |enabled| AppIntent::PrimitiveReferenceFrameChanged { enabled },
        );
        checkbox(
            ui,
            state.flags.filter_primitive,
            "Show only selected",
            events,
            |enabled| AppIntent::FilterPrimitiveChanged { enabled },
        );
    });
}

fn render_terrain(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    checkbox(ui, state.flags.wireframe, "Wireframe", events, |enabled| {
        AppIntent::WireframeChanged { enabled }
    });
    checkbox(
        ui,
        state.flags.suspend_updates(),
        "Suspend LOD update",
        events,
        |enabled| AppIntent::SuspendUpdatesChanged { enabled },
    );
    checkbox(
        ui,
        state.flags.tile_coordinates,
        "Show tile coordinates",
        events,
        |enabled| AppIntent::TileCoordinatesChanged { enabled },
    );

    if ui
        .selectable_label(state.picking.pick_tile_active(), "Pick a tile")
        .clicked()
    {
        events.push(AppIntent::PickTileRequested);
    }

    if state.selection.has_picked_tile() {
        ui.monospace(state.selection.tile_text());
    }

    ui.add_enabled_ui(state.selection.has_picked_tile(), |ui| {
        checkbox(
            ui,
            state.flags.tile_bounding_sphere,
            "Show bounding volume",
            events,
            |enabled| AppIntent::TileBoundingSphereChanged { enabled },
        );
        checkbox(
            ui,
            state.flags.filter_tile(),
            "Show only selected",
            events,
            |enabled| AppIntent::FilterTileChanged { enabled },
        );
    });
}

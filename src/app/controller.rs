//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use std::time::Instant;

/// Orchestriert UI-Events, Timer und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Schiebt die Timer-Uhr vor und führt alle fälligen Commands aus
    /// (Blink-Ende, Frustum-Polling).
    pub fn tick(&mut self, state: &mut AppState, now: Instant) -> anyhow::Result<()> {
        for command in state.timers.advance(now) {
            self.handle_command(state, command)?;
        }
        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Panel ===
            AppCommand::ToggleDropDown => handlers::panel::toggle_drop_down(state),
            AppCommand::ToggleSection { section } => {
                handlers::panel::toggle_section(state, section)
            }

            // === Allgemein ===
            AppCommand::SetShowFrustums { enabled } => {
                handlers::overlay::set_show_frustums(state, enabled)
            }
            AppCommand::SetShowPerformance { enabled } => {
                handlers::overlay::set_show_performance(state, enabled)
            }
            AppCommand::RefreshFrustumStatistics => {
                handlers::overlay::refresh_frustum_statistics(state)
            }

            // === Primitives ===
            AppCommand::SetPrimitiveBoundingSphere { enabled } => {
                handlers::selection::set_primitive_bounding_sphere(state, enabled)
            }
            AppCommand::SetPrimitiveReferenceFrame { enabled } => {
                handlers::selection::set_primitive_reference_frame(state, enabled)
            }
            AppCommand::SetFilterPrimitive { enabled } => {
                handlers::filter::set_filter_primitive(state, enabled)
            }
            AppCommand::SelectPrimitive { primitive } => {
                handlers::selection::select_primitive(state, primitive)
            }
            AppCommand::RevealPrimitive { primitive } => {
                handlers::selection::reveal_primitive(state, primitive)
            }

            // === Terrain ===
            AppCommand::SetWireframe { enabled } => handlers::overlay::set_wireframe(state, enabled),
            AppCommand::SetSuspendUpdates { enabled } => {
                handlers::filter::set_suspend_updates(state, enabled)
            }
            AppCommand::SetTileCoordinates { enabled } => {
                handlers::overlay::set_tile_coordinates(state, enabled)
            }
            AppCommand::SetTileBoundingSphere { enabled } => {
                handlers::selection::set_tile_bounding_sphere(state, enabled)
            }
            AppCommand::SetFilterTile { enabled } => handlers::filter::set_filter_tile(state, enabled),
            AppCommand::SelectTile { tile } => handlers::selection::select_tile(state, tile),

            // === Picking ===
            AppCommand::ArmPick { mode } => handlers::picking::arm(state, mode),
            AppCommand::DisarmPick { mode } => handlers::picking::disarm(state, mode),
            AppCommand::ResolvePrimitivePick { screen_pos } => {
                handlers::picking::resolve_primitive_pick(state, screen_pos)
            }
            AppCommand::ResolveTilePick { screen_pos } => {
                handlers::picking::resolve_tile_pick(state, screen_pos)
            }
        }

        Ok(())
    }
}

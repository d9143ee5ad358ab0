//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::PickMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::DropDownToggled => vec![AppCommand::ToggleDropDown],
        AppIntent::SectionToggled { section } => vec![AppCommand::ToggleSection { section }],
        AppIntent::ShowFrustumsChanged { enabled } => {
            vec![AppCommand::SetShowFrustums { enabled }]
        }
        AppIntent::ShowPerformanceChanged { enabled } => {
            vec![AppCommand::SetShowPerformance { enabled }]
        }

        // Pick-Buttons sind Toggles
        AppIntent::PickPrimitiveRequested => vec![toggle_pick(state, PickMode::PickingPrimitive)],
        AppIntent::PickTileRequested => vec![toggle_pick(state, PickMode::PickingTile)],
        AppIntent::PointerPressed { screen_pos } => match state.picking.armed_mode() {
            PickMode::Idle => vec![],
            PickMode::PickingPrimitive => vec![AppCommand::ResolvePrimitivePick { screen_pos }],
            PickMode::PickingTile => vec![AppCommand::ResolveTilePick { screen_pos }],
        },

        AppIntent::PrimitiveBoundingSphereChanged { enabled } => {
            vec![AppCommand::SetPrimitiveBoundingSphere { enabled }]
        }
        AppIntent::PrimitiveReferenceFrameChanged { enabled } => {
            vec![AppCommand::SetPrimitiveReferenceFrame { enabled }]
        }
        AppIntent::FilterPrimitiveChanged { enabled } => {
            vec![AppCommand::SetFilterPrimitive { enabled }]
        }
        AppIntent::PrimitiveSelectionRequested { primitive } => {
            vec![AppCommand::SelectPrimitive { primitive }]
        }

        AppIntent::WireframeChanged { enabled } => vec![AppCommand::SetWireframe { enabled }],
        AppIntent::SuspendUpdatesChanged { enabled } => {
            vec![AppCommand::SetSuspendUpdates { enabled }]
        }
        AppIntent::TileCoordinatesChanged { enabled } => {
            vec![AppCommand::SetTileCoordinates { enabled }]
        }
        AppIntent::TileBoundingSphereChanged { enabled } => {
            vec![AppCommand::SetTileBoundingSphere { enabled }]
        }
        AppIntent::FilterTileChanged { enabled } => vec![AppCommand::SetFilterTile { enabled }],
        AppIntent::TileSelectionRequested { tile } => vec![AppCommand::SelectTile { tile }],
    }
}

fn toggle_pick(state: &AppState, mode: PickMode) -> AppCommand {
    if state.picking.is_armed(mode) {
        AppCommand::DisarmPick { mode }
    } else {
        AppCommand::ArmPick { mode }
    }
}

//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::AppMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],

        AppIntent::MapSelected { map } => {
            if map == state.session.active_map {
                // Kein Wechsel — Reset wäre für den Nutzer überraschend
                vec![]
            } else {
                vec![AppCommand::SwitchMap { map }]
            }
        }
        AppIntent::ModeSelected { mode } => {
            if mode == state.session.mode {
                vec![]
            } else {
                vec![AppCommand::SetMode { mode }]
            }
        }
        AppIntent::FilterToggled { category } => vec![AppCommand::ToggleFilter { category }],
        AppIntent::CategoryButtonPressed { category } => {
            // Toolbar-Verhalten: Button setzt die aktive Kategorie;
            // ein erneuter Druck auf die bereits aktive kippt deren Filter.
            if state.session.active_category == category {
                vec![AppCommand::ToggleFilter { category }]
            } else {
                vec![AppCommand::SetActiveCategory { category }]
            }
        }

        AppIntent::MarkerPlacementRequested { world_pos } => {
            if state.session.mode == AppMode::Editor {
                vec![AppCommand::PlaceMarker { world_pos }]
            } else {
                // Viewer: Hintergrund-Klick hebt nur die Selektion auf
                vec![AppCommand::ClearMarkerSelection]
            }
        }
        AppIntent::MarkerDragStarted { id } => vec![AppCommand::BeginMarkerDrag { id }],
        AppIntent::MarkerDragMoved { id, world_pos } => {
            vec![AppCommand::DragMarkerTo { id, world_pos }]
        }
        AppIntent::MarkerDragEnded => vec![AppCommand::EndMarkerDrag],
        AppIntent::MarkerRemovalRequested { id } => {
            if state.session.mode == AppMode::Editor {
                vec![AppCommand::RemoveMarker { id }]
            } else {
                vec![]
            }
        }
        AppIntent::MarkerPicked { id } => vec![AppCommand::SelectMarker { id }],
        AppIntent::SelectionCleared => vec![AppCommand::ClearMarkerSelection],

        AppIntent::ClearMapRequested => vec![AppCommand::RequestClearMapDialog],
        AppIntent::ClearMapConfirmed => {
            vec![AppCommand::ClearMap, AppCommand::DismissClearMapDialog]
        }
        AppIntent::ClearMapCancelled => vec![AppCommand::DismissClearMapDialog],

        AppIntent::ExportRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::ExportMarkers { path }],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MapId, MarkerCategory};

    #[test]
    fn test_selecting_active_map_is_a_noop() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::MapSelected {
                map: state.session.active_map,
            },
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn test_selecting_other_map_switches() {
        let state = AppState::new();
        let commands =
            map_intent_to_commands(&state, AppIntent::MapSelected { map: MapId::Taego });
        assert!(matches!(
            commands.as_slice(),
            [AppCommand::SwitchMap { map: MapId::Taego }]
        ));
    }

    #[test]
    fn test_category_button_sets_then_toggles() {
        let mut state = AppState::new();
        state.session.active_category = MarkerCategory::Garage;

        let set = map_intent_to_commands(
            &state,
            AppIntent::CategoryButtonPressed {
                category: MarkerCategory::Boat,
            },
        );
        assert!(matches!(
            set.as_slice(),
            [AppCommand::SetActiveCategory {
                category: MarkerCategory::Boat
            }]
        ));

        let toggle = map_intent_to_commands(
            &state,
            AppIntent::CategoryButtonPressed {
                category: MarkerCategory::Garage,
            },
        );
        assert!(matches!(
            toggle.as_slice(),
            [AppCommand::ToggleFilter {
                category: MarkerCategory::Garage
            }]
        ));
    }

    #[test]
    fn test_placement_in_viewer_only_clears_selection() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::MarkerPlacementRequested {
                world_pos: glam::Vec2::new(10.0, 10.0),
            },
        );
        assert!(matches!(
            commands.as_slice(),
            [AppCommand::ClearMarkerSelection]
        ));
    }

    #[test]
    fn test_removal_in_viewer_is_dropped() {
        let state = AppState::new();
        let commands =
            map_intent_to_commands(&state, AppIntent::MarkerRemovalRequested { id: 1 });
        assert!(commands.is_empty());
    }

    #[test]
    fn test_clear_confirmed_clears_and_dismisses() {
        let state = AppState::new();
        let commands = map_intent_to_commands(&state, AppIntent::ClearMapConfirmed);
        assert!(matches!(
            commands.as_slice(),
            [AppCommand::ClearMap, AppCommand::DismissClearMapDialog]
        ));
    }
}

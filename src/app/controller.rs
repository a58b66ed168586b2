//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
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
            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),

            // === Session ===
            AppCommand::SwitchMap { map } => handlers::session::switch_map(state, map),
            AppCommand::SetMode { mode } => handlers::session::set_mode(state, mode),
            AppCommand::ToggleFilter { category } => {
                handlers::session::toggle_filter(state, category)
            }
            AppCommand::SetActiveCategory { category } => {
                handlers::session::set_active_category(state, category)
            }
            AppCommand::SelectMarker { id } => handlers::session::select_marker(state, id),
            AppCommand::ClearMarkerSelection => handlers::session::clear_selection(state),

            // === Editing ===
            AppCommand::PlaceMarker { world_pos } => handlers::editing::place_marker(state, world_pos),
            AppCommand::BeginMarkerDrag { id } => handlers::editing::begin_marker_drag(state, id),
            AppCommand::DragMarkerTo { id, world_pos } => {
                handlers::editing::drag_marker_to(state, id, world_pos)
            }
            AppCommand::EndMarkerDrag => handlers::editing::end_marker_drag(state),
            AppCommand::RemoveMarker { id } => handlers::editing::remove_marker(state, id),
            AppCommand::ClearMap => handlers::editing::clear_map(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::RequestClearMapDialog => handlers::dialog::request_clear_map_dialog(state),
            AppCommand::DismissClearMapDialog => handlers::dialog::dismiss_clear_map_dialog(state),
            AppCommand::RequestExportDialog => handlers::dialog::request_export_dialog(state),
            AppCommand::ExportMarkers { path } => handlers::dialog::export_markers(state, &path),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}

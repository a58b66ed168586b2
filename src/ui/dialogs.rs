//! Datei-Dialoge und modale Fenster.

use crate::app::state::ClearMapDialogState;
use crate::app::{AppIntent, AppState, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Export-Datei-Dialog
    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Marker JSON", &["json"])
            .set_file_name("spawn_markers.json")
            .save_file()
        {
            events.push(AppIntent::ExportPathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}

/// Zeigt den Bestätigungsdialog fürs Leeren der aktiven Map.
///
/// Destruktive Bulk-Operation: läuft IMMER über diese explizite
/// Bestätigung, es gibt kein Undo.
pub fn show_clear_map_dialog(
    ctx: &egui::Context,
    dialog: &ClearMapDialogState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !dialog.visible {
        return events;
    }

    egui::Window::new("Alle Marker löschen?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(format!(
                    "{} Marker auf dieser Map werden gelöscht.",
                    dialog.marker_count
                ));
                ui.label("Dieser Schritt kann nicht rückgängig gemacht werden.");
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Löschen").clicked() {
                        events.push(AppIntent::ClearMapConfirmed);
                    }

                    if ui.button("Abbrechen").clicked() {
                        events.push(AppIntent::ClearMapCancelled);
                    }
                });
            });
        });

    events
}

/// Zeigt den Options-Dialog als modales Fenster.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    let mut options = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(6.0);

            changed |= ui
                .add(egui::Slider::new(&mut options.marker_scale, 0.5..=2.0).text("Pin-Größe"))
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut options.background_opacity, 0.1..=1.0)
                        .text("Hintergrund-Opacity"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut options.camera_zoom_step, 1.05..=2.0)
                        .text("Zoom-Schritt (Menü)"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut options.camera_scroll_zoom_step, 1.02..=1.5)
                        .text("Zoom-Schritt (Scroll)"),
                )
                .changed();
            changed |= ui
                .checkbox(&mut options.show_grid, "Kilometer-Raster einblenden")
                .changed();

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Zurücksetzen").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    if changed {
        events.push(AppIntent::OptionsChanged { options });
    }

    events
}

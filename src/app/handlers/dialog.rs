//! Handler für Dialoge, Optionen, Export und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Signalisiert dem Host das kontrollierte Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Bestätigungsdialog fürs Leeren der aktiven Map.
pub fn request_clear_map_dialog(state: &mut AppState) {
    use_cases::editing::request_clear_dialog(state);
}

/// Schließt den Bestätigungsdialog ohne zu löschen.
pub fn dismiss_clear_map_dialog(state: &mut AppState) {
    state.ui.clear_dialog.visible = false;
    state.ui.clear_dialog.marker_count = 0;
}

/// Öffnet den Export-Dateidialog.
pub fn request_export_dialog(state: &mut AppState) {
    use_cases::export::request_export(state);
}

/// Exportiert den Marker-Bestand als JSON.
pub fn export_markers(state: &mut AppState, path: &str) {
    use_cases::export::export_markers(state, path);
}

/// Öffnet den Options-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Options-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Wendet geänderte Optionen an und speichert sie.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options;
    state.options.save_to_file(&EditorOptions::config_path())
}

/// Setzt die Optionen auf Standardwerte zurück und speichert.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    state.options.save_to_file(&EditorOptions::config_path())
}

//! Keyboard-Shortcuts im Viewport.

use crate::app::state::{AppMode, SessionState};
use crate::app::AppIntent;
use crate::core::MarkerCategory;

/// Ziffern-Shortcuts 1–7 für die Kategorie-Buttons der Toolbar.
const CATEGORY_KEYS: [egui::Key; MarkerCategory::COUNT] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
    egui::Key::Num7,
];

/// Sammelt Keyboard-Intents für den Viewport.
pub fn collect_keyboard_intents(ui: &egui::Ui, session: &SessionState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.input(|i| {
        if i.key_pressed(egui::Key::Escape) {
            events.push(AppIntent::SelectionCleared);
        }

        if i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals) {
            events.push(AppIntent::ZoomInRequested);
        }
        if i.key_pressed(egui::Key::Minus) {
            events.push(AppIntent::ZoomOutRequested);
        }
        if i.key_pressed(egui::Key::Num0) {
            events.push(AppIntent::ResetCameraRequested);
        }

        if session.mode == AppMode::Editor {
            // Kategorie-Shortcuts verhalten sich wie die Toolbar-Buttons
            for (key, category) in CATEGORY_KEYS.iter().zip(MarkerCategory::ALL) {
                if i.key_pressed(*key) {
                    events.push(AppIntent::CategoryButtonPressed { category });
                }
            }

            // Entf löscht den selektierten Marker
            if i.key_pressed(egui::Key::Delete) {
                if let Some(id) = session.selected_marker_id {
                    events.push(AppIntent::MarkerRemovalRequested { id });
                }
            }
        }
    });

    events
}

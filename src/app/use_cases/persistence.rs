//! Use-Case-Funktionen für den durablen Marker-Slot des Editors.

use crate::app::state::AppMode;
use crate::app::AppState;

/// Liest den initialen Editor-Bestand aus dem Slot.
///
/// Fehlende Datei = frischer, leerer Bestand. Eine korrupte Datei wird
/// dem Nutzer gemeldet und `markers_loaded` bleibt `false`, damit kein
/// Write die möglicherweise rettbare Datei überschreibt — In-Memory-
/// Bearbeitung funktioniert trotzdem.
pub fn load_editor_markers(state: &mut AppState) {
    state.session.markers_loaded = false;

    match state.slot.read() {
        Ok(Some(markers)) => {
            log::info!("Editor-Bestand geladen: {} Marker", markers.len());
            state.session.markers.replace_all(markers);
            state.session.markers_loaded = true;
        }
        Ok(None) => {
            log::info!("Kein Marker-Slot vorhanden, starte mit leerem Bestand");
            state.session.markers.replace_all(Vec::new());
            state.session.markers_loaded = true;
        }
        Err(e) => {
            log::error!("Marker-Slot nicht lesbar: {:#}", e);
            state.session.markers.replace_all(Vec::new());
            state.ui.status_message = Some(format!(
                "Marker-Slot nicht lesbar — Speichern deaktiviert ({})",
                state.slot.path().display()
            ));
        }
    }
}

/// Schreibt den aktuellen Bestand in den Slot (nach jeder Mutation).
///
/// Der Write ist durch `markers_loaded` abgesichert: vor dem Abschluss
/// des initialen Reads wird nie geschrieben. Fehlschläge werden dem
/// Nutzer gemeldet, nicht stillschweigend verworfen.
pub fn persist_markers(state: &mut AppState) {
    if state.session.mode != AppMode::Editor {
        return;
    }
    if !state.session.markers_loaded {
        log::warn!("Slot-Write unterdrückt: initialer Read noch nicht angewendet");
        return;
    }

    if let Err(e) = state.slot.write(&state.session.markers.to_vec()) {
        log::error!("Marker-Slot nicht schreibbar: {:#}", e);
        state.ui.status_message = Some(format!("Speichern fehlgeschlagen: {:#}", e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MapId, MarkerCategory, MarkerSlot};
    use glam::Vec2;

    fn temp_slot(name: &str) -> MarkerSlot {
        let path = std::env::temp_dir().join(format!(
            "br_spawn_map_persistence_test_{}_{}.json",
            std::process::id(),
            name
        ));
        let _ = std::fs::remove_file(&path);
        MarkerSlot::with_path(path)
    }

    fn editor_state(slot: MarkerSlot) -> AppState {
        let mut state = AppState::new();
        state.session.mode = AppMode::Editor;
        state.slot = slot;
        state
    }

    #[test]
    fn test_write_before_initial_read_is_suppressed() {
        let slot = temp_slot("guard");
        let mut state = editor_state(slot.clone());

        // Read wurde noch nicht angewendet → Write darf nicht passieren
        state
            .session
            .markers
            .place(MapId::Erangel, MarkerCategory::Garage, Vec2::ZERO);
        persist_markers(&mut state);

        assert!(slot.read().expect("Lesen erwartet").is_none());
    }

    #[test]
    fn test_mutation_after_load_round_trips() {
        let slot = temp_slot("round_trip");
        let mut state = editor_state(slot.clone());

        load_editor_markers(&mut state);
        assert!(state.session.markers_loaded);

        state
            .session
            .markers
            .place(MapId::Erangel, MarkerCategory::Boat, Vec2::new(500.0, 500.0));
        persist_markers(&mut state);

        let stored = slot
            .read()
            .expect("Lesen erwartet")
            .expect("Inhalt erwartet");
        assert_eq!(stored, state.session.markers.to_vec());
        let _ = std::fs::remove_file(slot.path());
    }

    #[test]
    fn test_corrupt_slot_disables_persistence_and_surfaces_error() {
        let slot = temp_slot("corrupt");
        std::fs::write(slot.path(), "kein json").expect("Fixture erwartet");
        let mut state = editor_state(slot.clone());

        load_editor_markers(&mut state);

        assert!(!state.session.markers_loaded);
        assert!(state.ui.status_message.is_some());

        // Folge-Writes bleiben unterdrückt, die Datei unangetastet
        persist_markers(&mut state);
        let raw = std::fs::read_to_string(slot.path()).expect("Datei erwartet");
        assert_eq!(raw, "kein json");
        let _ = std::fs::remove_file(slot.path());
    }

    #[test]
    fn test_viewer_mode_never_writes() {
        let slot = temp_slot("viewer");
        let mut state = AppState::new();
        state.slot = slot.clone();
        state.session.markers_loaded = true;

        persist_markers(&mut state);

        assert!(slot.read().expect("Lesen erwartet").is_none());
    }
}

//! Handler für Marker-Mutationen (Platzieren, Drag, Löschen, Leeren).

use crate::app::use_cases;
use crate::app::AppState;

/// Platziert einen neuen Marker an der Weltposition.
pub fn place_marker(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::editing::place_marker(state, world_pos);
}

/// Beginnt einen Pin-Drag.
pub fn begin_marker_drag(state: &mut AppState, id: u64) {
    use_cases::editing::begin_marker_drag(state, id);
}

/// Verschiebt einen Marker während eines Drags.
pub fn drag_marker_to(state: &mut AppState, id: u64, world_pos: glam::Vec2) {
    use_cases::editing::drag_marker_to(state, id, world_pos);
}

/// Schließt einen Pin-Drag ab und persistiert.
pub fn end_marker_drag(state: &mut AppState) {
    use_cases::editing::end_marker_drag(state);
}

/// Entfernt einen Marker (idempotent).
pub fn remove_marker(state: &mut AppState, id: u64) {
    use_cases::editing::remove_marker(state, id);
}

/// Löscht alle Marker der aktiven Map.
pub fn clear_map(state: &mut AppState) {
    use_cases::editing::clear_map(state);
}

//! Handler für Session-Kontext: Modus, Map, Filter, Selektion.

use crate::app::state::AppMode;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{MapId, MarkerCategory};

/// Wechselt den Betriebsmodus (Viewer ⇔ Editor).
pub fn set_mode(state: &mut AppState, mode: AppMode) {
    use_cases::session::set_mode(state, mode);
}

/// Wechselt die aktive Map (voller Viewport-Reset).
pub fn switch_map(state: &mut AppState, map: MapId) {
    use_cases::session::switch_map(state, map);
}

/// Kippt genau ein Kategorie-Filter-Flag.
pub fn toggle_filter(state: &mut AppState, category: MarkerCategory) {
    use_cases::session::toggle_filter(state, category);
}

/// Setzt die aktive Platzierungs-Kategorie.
pub fn set_active_category(state: &mut AppState, category: MarkerCategory) {
    use_cases::session::set_active_category(state, category);
}

/// Selektiert einen Marker.
pub fn select_marker(state: &mut AppState, id: u64) {
    use_cases::session::select_marker(state, id);
}

/// Hebt die Marker-Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    use_cases::session::clear_selection(state);
}

//! Use-Case-Funktionen für Marker-Mutationen im Editor.

use crate::app::state::AppMode;
use crate::app::AppState;

/// Platziert einen neuen Marker an der Weltposition.
///
/// Synchroner Übergang Idle → Placing → Idle: frische ID, aktive
/// Kategorie, kategorie-abgeleitetes Label, danach Persistenz.
pub fn place_marker(state: &mut AppState, world_pos: glam::Vec2) {
    if state.session.mode != AppMode::Editor {
        log::warn!("Platzieren ignoriert: nicht im Editor-Modus");
        return;
    }

    let map = state.session.active_map;
    let category = state.session.active_category;
    let id = state.session.markers.place(map, category, world_pos);

    log::info!(
        "Marker {} ({}) an ({:.0}, {:.0}) auf {} platziert",
        id,
        category.label(),
        world_pos.x,
        world_pos.y,
        map.label()
    );
    super::persistence::persist_markers(state);
}

/// Beginnt einen Pin-Drag: Marker wird selektiert.
pub fn begin_marker_drag(state: &mut AppState, id: u64) {
    if state.session.mode != AppMode::Editor {
        return;
    }
    if state.session.markers.get(id).is_none() {
        log::debug!("Drag-Start ignoriert: Marker {} unbekannt", id);
        return;
    }
    state.session.selected_marker_id = Some(id);
}

/// Aktualisiert die Marker-Position während eines Drags.
///
/// Unbekannte IDs sind ein No-op (Doppel-Klick-Rennen sind auch in einer
/// Ein-Nutzer-Session plausibel).
pub fn drag_marker_to(state: &mut AppState, id: u64, world_pos: glam::Vec2) {
    if state.session.mode != AppMode::Editor {
        return;
    }
    if !state.session.markers.move_marker(id, world_pos) {
        log::debug!("Move ignoriert: Marker {} unbekannt", id);
    }
}

/// Schließt einen Pin-Drag ab: die committete Position wird persistiert.
pub fn end_marker_drag(state: &mut AppState) {
    if state.session.mode != AppMode::Editor {
        return;
    }
    super::persistence::persist_markers(state);
}

/// Entfernt einen Marker. Idempotent — der zweite Aufruf ist ein No-op.
pub fn remove_marker(state: &mut AppState, id: u64) {
    if state.session.mode != AppMode::Editor {
        log::warn!("Löschen ignoriert: nicht im Editor-Modus");
        return;
    }

    if state.session.markers.remove(id) {
        if state.session.selected_marker_id == Some(id) {
            state.session.selected_marker_id = None;
        }
        log::info!("Marker {} entfernt", id);
        super::persistence::persist_markers(state);
    } else {
        log::debug!("Löschen ignoriert: Marker {} bereits entfernt", id);
    }
}

/// Öffnet den Bestätigungsdialog fürs Leeren der aktiven Map.
pub fn request_clear_dialog(state: &mut AppState) {
    if state.session.mode != AppMode::Editor {
        return;
    }
    state.ui.clear_dialog.visible = true;
    state.ui.clear_dialog.marker_count = state.marker_count_on_active_map();
}

/// Löscht alle Marker der aktiven Map (nur nach expliziter Bestätigung).
///
/// Destruktiv und nicht rückgängig machbar; wirkt ausschließlich auf die
/// aktive Map (Per-Map-Scoping).
pub fn clear_map(state: &mut AppState) {
    if state.session.mode != AppMode::Editor {
        log::warn!("Leeren ignoriert: nicht im Editor-Modus");
        return;
    }

    let map = state.session.active_map;
    let removed = state.session.markers.clear_map(map);
    state.session.selected_marker_id = None;

    let msg = format!("{} Marker auf {} gelöscht", removed, map.label());
    log::info!("{}", msg);
    state.ui.status_message = Some(msg);
    super::persistence::persist_markers(state);
}

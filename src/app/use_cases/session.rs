//! Use-Case-Funktionen für den Session-Kontext: Modus, Map, Filter, Selektion.

use crate::app::state::AppMode;
use crate::app::AppState;
use crate::core::{MapId, MapImage, Marker, MarkerCategory};
use std::sync::Arc;

/// Gebündelter Viewer-Datensatz (zur Build-Zeit eingebettet).
const BUNDLED_DATASET: &str = include_str!("../../../assets/spawn_markers.json");

/// Parst den gebündelten Viewer-Datensatz.
pub fn bundled_markers() -> anyhow::Result<Vec<Marker>> {
    use anyhow::Context;
    serde_json::from_str(BUNDLED_DATASET).context("Gebündelter Marker-Datensatz nicht parsbar")
}

/// Wechselt den Betriebsmodus und lädt den passenden Marker-Bestand.
pub fn set_mode(state: &mut AppState, mode: AppMode) {
    state.session.mode = mode;
    state.session.selected_marker_id = None;
    populate_markers(state);
    log::info!("Modus gewechselt: {}", mode.label());
}

/// Befüllt den Marker-Store passend zum aktiven Modus.
///
/// Viewer: unveränderlicher gebündelter Datensatz.
/// Editor: durabler Slot (siehe `persistence`).
pub fn populate_markers(state: &mut AppState) {
    state.session.markers_loaded = false;

    match state.session.mode {
        AppMode::Viewer => match bundled_markers() {
            Ok(markers) => {
                log::info!("Viewer-Datensatz geladen: {} Marker", markers.len());
                state.session.markers.replace_all(markers);
                state.session.markers_loaded = true;
            }
            Err(e) => {
                log::error!("Viewer-Datensatz fehlerhaft: {:#}", e);
                state.session.markers.replace_all(Vec::new());
                state.session.markers_loaded = true;
                state.ui.status_message = Some("Marker-Datensatz fehlerhaft".to_string());
            }
        },
        AppMode::Editor => super::persistence::load_editor_markers(state),
    }
}

/// Wechselt die aktive Map: voller Viewport-Reset, Bild neu laden.
///
/// Maps sind unabhängige Koordinatenräume — ein inkrementelles Update
/// der Kamera ist hier nicht zulässig.
pub fn switch_map(state: &mut AppState, map: MapId) {
    state.session.active_map = map;
    state.session.selected_marker_id = None;
    super::camera::reset_camera(state);
    load_map_image(state);
    log::info!("Aktive Map: {}", map.label());
}

/// Lädt das Hintergrundbild der aktiven Map.
///
/// Ein Ladefehler ist nicht fatal: der Viewport bleibt über einem
/// Platzhalter interaktiv, der Fehler landet in der Statuszeile.
pub fn load_map_image(state: &mut AppState) {
    let descriptor = state.session.active_map.descriptor();

    match MapImage::load_from_file(descriptor.image_path) {
        Ok(image) => {
            state.view.map_image = Some(Arc::new(image));
        }
        Err(e) => {
            log::warn!("Hintergrundbild nicht ladbar: {:#}", e);
            state.view.map_image = None;
            state.ui.status_message = Some(format!(
                "Map-Bild für {} nicht ladbar — Platzhalter aktiv",
                descriptor.label
            ));
        }
    }
    state.view.background_dirty = true;
}

/// Kippt genau ein Kategorie-Filter-Flag.
pub fn toggle_filter(state: &mut AppState, category: MarkerCategory) {
    state.session.filters.toggle(category);
    log::debug!(
        "Filter {}: {}",
        category.label(),
        state.session.filters.is_enabled(category)
    );
}

/// Setzt die aktive Platzierungs-Kategorie des Editors.
pub fn set_active_category(state: &mut AppState, category: MarkerCategory) {
    state.session.active_category = category;
    log::debug!("Aktive Kategorie: {}", category.label());
}

/// Selektiert einen Marker (transientes Label-Overlay, kein Store-Effekt).
pub fn select_marker(state: &mut AppState, id: u64) {
    if state.session.markers.get(id).is_none() {
        log::debug!("Selektion ignoriert: Marker {} unbekannt", id);
        return;
    }
    state.session.selected_marker_id = Some(id);
}

/// Hebt die Marker-Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.session.selected_marker_id = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAP_EXTENT;
    use glam::Vec2;

    #[test]
    fn test_bundled_dataset_parses_and_is_in_bounds() {
        let markers = bundled_markers().expect("Datensatz erwartet");
        assert!(!markers.is_empty());

        for marker in &markers {
            assert!(marker.position.x >= 0.0 && marker.position.x <= MAP_EXTENT);
            assert!(marker.position.y >= 0.0 && marker.position.y <= MAP_EXTENT);
        }

        // IDs eindeutig
        let mut ids: Vec<u64> = markers.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), markers.len());
    }

    #[test]
    fn test_viewer_mode_populates_from_dataset() {
        let mut state = AppState::new();
        set_mode(&mut state, AppMode::Viewer);

        assert!(state.session.markers_loaded);
        assert!(!state.session.markers.is_empty());
    }

    #[test]
    fn test_switch_map_resets_camera_and_clears_selection() {
        let mut state = AppState::new();
        state.view.viewport_size = [800.0, 600.0];
        super::super::camera::reset_camera(&mut state);

        state.view.camera.pan(Vec2::new(1000.0, 1000.0));
        state.view.camera.zoom = 2.0;
        state.session.selected_marker_id = Some(42);

        switch_map(&mut state, MapId::Miramar);

        assert_eq!(state.session.active_map, MapId::Miramar);
        assert_eq!(state.session.selected_marker_id, None);
        let extent = MapId::Miramar.descriptor().extent;
        assert_eq!(state.view.camera.position, Vec2::splat(extent / 2.0));
        assert!(
            (state.view.camera.zoom - super::super::camera::min_zoom(&state)).abs() < 1e-6
        );
    }

    #[test]
    fn test_select_unknown_marker_is_noop() {
        let mut state = AppState::new();
        select_marker(&mut state, 999);
        assert_eq!(state.session.selected_marker_id, None);
    }
}

//! Baut die Render-Szene (Screen-Space) aus dem AppState.

use super::state::{AppMode, AppState};
use crate::shared::options::{PIN_HEIGHT_PX, PIN_WIDTH_PX};
use crate::shared::{PinInstance, RenderScene, SelectionOverlay};
use glam::Vec2;

/// Projiziert sichtbare Marker und Hintergrund in Screen-Koordinaten.
///
/// Pins außerhalb des Viewports (plus Pin-Ausdehnung als Rand) werden
/// verworfen; die Reihenfolge der übrigen folgt der Store-Reihenfolge.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let viewport = Vec2::new(viewport_size[0], viewport_size[1]);
    let camera = &state.view.camera;
    let extent = state.session.active_map.descriptor().extent;
    let pin_scale = state.options.marker_scale;

    let margin = PIN_WIDTH_PX.max(PIN_HEIGHT_PX) * pin_scale;
    let selected = state.session.selected_marker_id;

    let mut pins = Vec::new();
    for marker in state
        .session
        .markers
        .visible_markers(state.session.active_map, &state.session.filters)
    {
        let screen_pos = camera.world_to_screen(marker.position, viewport);
        let on_screen = screen_pos.x >= -margin
            && screen_pos.x <= viewport.x + margin
            && screen_pos.y >= -margin
            && screen_pos.y <= viewport.y + margin;
        if !on_screen {
            continue;
        }

        pins.push(PinInstance {
            id: marker.id,
            category: marker.category,
            screen_pos,
            selected: selected == Some(marker.id),
        });
    }

    let overlay = selected
        .and_then(|id| state.session.markers.get(id))
        .filter(|m| {
            state
                .session
                .filters
                .is_visible(m, state.session.active_map)
        })
        .map(|m| SelectionOverlay {
            screen_pos: camera.world_to_screen(m.position, viewport),
            label: m.label.clone(),
            marker_id: (state.session.mode == AppMode::Editor).then_some(m.id),
        });

    RenderScene {
        viewport_size,
        map_rect_min: camera.world_to_screen(Vec2::ZERO, viewport),
        map_rect_size: extent * camera.zoom,
        image_available: state.view.map_image.is_some(),
        background_opacity: state.options.background_opacity,
        show_grid: state.options.show_grid,
        pins,
        overlay,
        pin_scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases;
    use crate::core::{MapId, MarkerCategory};

    fn prepared_state() -> AppState {
        let mut state = AppState::new();
        state.view.viewport_size = [800.0, 600.0];
        use_cases::camera::reset_camera(&mut state);
        state.session.markers_loaded = true;
        state
    }

    #[test]
    fn test_scene_contains_only_visible_markers() {
        let mut state = prepared_state();
        let visible =
            state
                .session
                .markers
                .place(MapId::Erangel, MarkerCategory::Garage, Vec2::splat(4096.0));
        state
            .session
            .markers
            .place(MapId::Erangel, MarkerCategory::Boat, Vec2::splat(4096.0));
        state
            .session
            .markers
            .place(MapId::Miramar, MarkerCategory::Garage, Vec2::splat(4096.0));

        let scene = build(&state, state.view.viewport_size);

        // Nur die Garage auf Erangel (Default-Preset, aktive Map)
        assert_eq!(scene.pins.len(), 1);
        assert_eq!(scene.pins[0].id, visible);
    }

    #[test]
    fn test_offscreen_pins_are_culled() {
        let mut state = prepared_state();
        state
            .session
            .markers
            .place(MapId::Erangel, MarkerCategory::Garage, Vec2::new(100.0, 100.0));

        // Nah heranzoomen auf die gegenüberliegende Ecke
        state.view.camera.zoom = 4.0;
        state.view.camera.position = Vec2::splat(8000.0);

        let scene = build(&state, state.view.viewport_size);
        assert!(scene.pins.is_empty());
    }

    #[test]
    fn test_pin_anchor_is_exact_projection() {
        let mut state = prepared_state();
        let world = Vec2::new(4096.0, 4096.0);
        state
            .session
            .markers
            .place(MapId::Erangel, MarkerCategory::Garage, world);

        let scene = build(&state, state.view.viewport_size);
        let expected = state
            .view
            .camera
            .world_to_screen(world, state.view.viewport_vec());

        // Pin-Spitze ankert exakt auf der projizierten Marker-Koordinate
        assert_eq!(scene.pins[0].screen_pos, expected);
    }

    #[test]
    fn test_overlay_shows_id_only_in_editor_mode() {
        let mut state = prepared_state();
        let id = state
            .session
            .markers
            .place(MapId::Erangel, MarkerCategory::Garage, Vec2::splat(4096.0));
        state.session.selected_marker_id = Some(id);

        let viewer_scene = build(&state, state.view.viewport_size);
        assert_eq!(
            viewer_scene.overlay.as_ref().expect("Overlay erwartet").marker_id,
            None
        );

        state.session.mode = AppMode::Editor;
        let editor_scene = build(&state, state.view.viewport_size);
        assert_eq!(
            editor_scene.overlay.as_ref().expect("Overlay erwartet").marker_id,
            Some(id)
        );
    }

    #[test]
    fn test_overlay_dropped_when_marker_filtered_out() {
        let mut state = prepared_state();
        let id = state
            .session
            .markers
            .place(MapId::Erangel, MarkerCategory::Boat, Vec2::splat(4096.0));
        state.session.selected_marker_id = Some(id);

        // Boot ist im Default-Preset ausgeblendet
        let scene = build(&state, state.view.viewport_size);
        assert!(scene.overlay.is_none());
    }
}

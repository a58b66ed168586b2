//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::Camera2D;

/// Minimaler Zoom der aktuellen Session: das gesamte Map-Bild passt
/// in den Viewport. Nie größer als der konfigurierte Maximal-Zoom.
pub fn min_zoom(state: &AppState) -> f32 {
    Camera2D::fit_zoom(
        state.session.active_map.descriptor().extent,
        state.view.viewport_vec(),
    )
    .min(state.options.camera_zoom_max)
}

/// Setzt die Kamera auf Default zurück (Bildmitte, Fit-Zoom).
pub fn reset_camera(state: &mut AppState) {
    let extent = state.session.active_map.descriptor().extent;
    let viewport = state.view.viewport_vec();
    state.view.camera.reset(extent, viewport);
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    let min = min_zoom(state);
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step,
        min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    let min = min_zoom(state);
    state.view.camera.zoom_by_clamped(
        1.0 / state.options.camera_zoom_step,
        min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Kamera basierend auf einem Welt-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<glam::Vec2>) {
    let min = min_zoom(state);
    let max = state.options.camera_zoom_max;

    if let Some(focus) = focus_world {
        let old_zoom = state.view.camera.zoom;
        state.view.camera.zoom_by_clamped(factor, min, max);
        let new_zoom = state.view.camera.zoom;
        // Kamera-Position korrigieren, damit focus_world an gleicher Stelle bleibt
        let scale = old_zoom / new_zoom;
        state.view.camera.position = focus + (state.view.camera.position - focus) * scale;
    } else {
        state.view.camera.zoom_by_clamped(factor, min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn state_with_viewport() -> AppState {
        let mut state = AppState::new();
        state.view.viewport_size = [800.0, 600.0];
        reset_camera(&mut state);
        state
    }

    #[test]
    fn test_reset_camera_sets_center_and_fit_zoom() {
        let mut state = state_with_viewport();
        state.view.camera.pan(Vec2::new(999.0, -999.0));
        state.view.camera.zoom = 2.0;

        reset_camera(&mut state);

        let extent = state.session.active_map.descriptor().extent;
        assert_eq!(state.view.camera.position, Vec2::splat(extent / 2.0));
        assert!((state.view.camera.zoom - min_zoom(&state)).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_in_increases_zoom() {
        let mut state = state_with_viewport();
        let before = state.view.camera.zoom;

        zoom_in(&mut state);

        assert!(state.view.camera.zoom > before);
    }

    #[test]
    fn test_zoom_out_clamps_at_fit_zoom() {
        let mut state = state_with_viewport();

        // Bereits auf Fit-Zoom: weiter herauszoomen geht nicht
        zoom_out(&mut state);

        assert!((state.view.camera.zoom - min_zoom(&state)).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_in_then_out_returns_to_original() {
        let mut state = state_with_viewport();
        zoom_in(&mut state);
        zoom_in(&mut state);
        let after_in = state.view.camera.zoom;

        zoom_out(&mut state);
        let expected = after_in / state.options.camera_zoom_step;

        assert!((state.view.camera.zoom - expected).abs() < 1e-5);
    }

    #[test]
    fn test_pan_moves_camera_position() {
        let mut state = state_with_viewport();
        let before = state.view.camera.position;

        pan(&mut state, Vec2::new(10.0, -5.0));

        assert_eq!(state.view.camera.position, before + Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_zoom_towards_point_keeps_focus_stable() {
        let mut state = state_with_viewport();
        let viewport = state.view.viewport_vec();
        let focus = Vec2::new(1000.0, 3000.0);
        let screen_before = state.view.camera.world_to_screen(focus, viewport);

        zoom_towards(&mut state, 2.0, Some(focus));

        let screen_after = state.view.camera.world_to_screen(focus, viewport);
        assert!((screen_before - screen_after).length() < 1e-2);
    }
}

//! Use-Case-Funktionen für Viewport-Verwaltung.

use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im State.
///
/// Beim ersten echten Layout (Größe > 0) wird die Kamera initial auf
/// Bildmitte + Fit-Zoom gesetzt; danach wird der Zoom nur noch auf den
/// neuen Minimal-Zoom geklemmt.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    let changed = state.view.viewport_size != size;
    state.view.viewport_size = size;

    if size[0] <= 0.0 || size[1] <= 0.0 {
        return;
    }

    if !state.view.camera_initialized {
        super::camera::reset_camera(state);
        state.view.camera_initialized = true;
        return;
    }

    if changed {
        let min = super::camera::min_zoom(state);
        let max = state.options.camera_zoom_max;
        state.view.camera.zoom = state.view.camera.zoom.clamp(min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::camera;

    #[test]
    fn test_first_resize_initializes_camera() {
        let mut state = AppState::new();
        assert!(!state.view.camera_initialized);

        resize(&mut state, [800.0, 600.0]);

        assert!(state.view.camera_initialized);
        assert!((state.view.camera.zoom - camera::min_zoom(&state)).abs() < 1e-6);
    }

    #[test]
    fn test_zero_size_does_not_initialize() {
        let mut state = AppState::new();
        resize(&mut state, [0.0, 0.0]);
        assert!(!state.view.camera_initialized);
    }

    #[test]
    fn test_growing_viewport_raises_zoom_to_new_fit() {
        let mut state = AppState::new();
        resize(&mut state, [400.0, 300.0]);
        state.view.camera.zoom = camera::min_zoom(&state);

        // Größerer Viewport → größerer Fit-Zoom → Klemmen hebt den Zoom an
        resize(&mut state, [1600.0, 1200.0]);

        let min = camera::min_zoom(&state);
        assert!(state.view.camera.zoom >= min - 1e-6);
    }
}

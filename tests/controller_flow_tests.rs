use br_spawn_map::{
    AppCommand, AppController, AppIntent, AppMode, AppState, FilterState, MapId, MarkerCategory,
};
use glam::Vec2;

fn controller_and_state() -> (AppController, AppState) {
    let mut state = AppState::new();
    state.session.markers_loaded = true;
    let mut controller = AppController::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [800.0, 600.0],
            },
        )
        .expect("ViewportResized sollte ohne Fehler durchlaufen");

    (controller, state)
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let (mut controller, mut state) = controller_and_state();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_viewport_resize_initializes_fit_zoom() {
    let (_controller, state) = controller_and_state();

    // Fit-Zoom: 600 / 8192
    assert!((state.view.camera.zoom - 600.0 / 8192.0).abs() < 1e-6);
    assert_eq!(state.view.camera.position, Vec2::splat(4096.0));
}

#[test]
fn test_zoom_and_reset_round_trip() {
    let (mut controller, mut state) = controller_and_state();
    let initial_zoom = state.view.camera.zoom;

    controller
        .handle_intent(&mut state, AppIntent::ZoomInRequested)
        .expect("ZoomIn sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraPan {
                delta: Vec2::new(500.0, 250.0),
            },
        )
        .expect("Pan sollte ohne Fehler durchlaufen");

    assert!(state.view.camera.zoom > initial_zoom);
    assert_ne!(state.view.camera.position, Vec2::splat(4096.0));

    controller
        .handle_intent(&mut state, AppIntent::ResetCameraRequested)
        .expect("Reset sollte ohne Fehler durchlaufen");

    assert!((state.view.camera.zoom - initial_zoom).abs() < 1e-6);
    assert_eq!(state.view.camera.position, Vec2::splat(4096.0));
}

#[test]
fn test_filter_toggle_affects_only_one_category() {
    let (mut controller, mut state) = controller_and_state();

    // Zwei Garagen und ein Boot auf Erangel
    state
        .session
        .markers
        .place(MapId::Erangel, MarkerCategory::Garage, Vec2::new(100.0, 100.0));
    state
        .session
        .markers
        .place(MapId::Erangel, MarkerCategory::Boat, Vec2::new(200.0, 200.0));

    assert_eq!(state.visible_marker_count(), 1);

    controller
        .handle_intent(
            &mut state,
            AppIntent::FilterToggled {
                category: MarkerCategory::Boat,
            },
        )
        .expect("FilterToggled sollte ohne Fehler durchlaufen");

    // Boot jetzt sichtbar, Garage unverändert sichtbar
    assert_eq!(state.visible_marker_count(), 2);
    assert!(state.session.filters.is_enabled(MarkerCategory::Garage));

    controller
        .handle_intent(
            &mut state,
            AppIntent::FilterToggled {
                category: MarkerCategory::Boat,
            },
        )
        .expect("FilterToggled sollte ohne Fehler durchlaufen");

    assert_eq!(state.visible_marker_count(), 1);
}

#[test]
fn test_visible_markers_two_map_scenario() {
    // Zwei Garagen auf verschiedenen Maps, Filter nur Garage,
    // aktive Map Erangel: genau der Erangel-Marker ist sichtbar.
    let (_controller, mut state) = controller_and_state();

    let id_a = state
        .session
        .markers
        .place(MapId::Erangel, MarkerCategory::Garage, Vec2::new(100.0, 100.0));
    let _id_b = state
        .session
        .markers
        .place(MapId::Miramar, MarkerCategory::Garage, Vec2::new(200.0, 200.0));

    let filters = FilterState::new();
    let visible: Vec<u64> = state
        .session
        .markers
        .visible_markers(MapId::Erangel, &filters)
        .map(|m| m.id)
        .collect();

    assert_eq!(visible, vec![id_a]);
}

#[test]
fn test_map_switch_resets_camera_and_hides_foreign_markers() {
    let (mut controller, mut state) = controller_and_state();

    state
        .session
        .markers
        .place(MapId::Erangel, MarkerCategory::Garage, Vec2::new(100.0, 100.0));

    // Kamera verstellen
    controller
        .handle_intent(&mut state, AppIntent::ZoomInRequested)
        .expect("ZoomIn sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraPan {
                delta: Vec2::new(1000.0, 1000.0),
            },
        )
        .expect("Pan sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::MapSelected { map: MapId::Taego })
        .expect("MapSelected sollte ohne Fehler durchlaufen");

    // Voller Reset: Mitte + Fit-Zoom
    assert_eq!(state.session.active_map, MapId::Taego);
    assert_eq!(state.view.camera.position, Vec2::splat(4096.0));
    assert!((state.view.camera.zoom - 600.0 / 8192.0).abs() < 1e-6);

    // Erangel-Marker trotz aktivem Garage-Filter unsichtbar
    assert_eq!(state.visible_marker_count(), 0);
}

#[test]
fn test_selecting_already_active_map_keeps_camera() {
    let (mut controller, mut state) = controller_and_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraPan {
                delta: Vec2::new(777.0, 0.0),
            },
        )
        .expect("Pan sollte ohne Fehler durchlaufen");
    let position = state.view.camera.position;

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapSelected {
                map: MapId::Erangel,
            },
        )
        .expect("MapSelected sollte ohne Fehler durchlaufen");

    assert_eq!(state.view.camera.position, position);
}

#[test]
fn test_marker_pick_and_clear_selection() {
    let (mut controller, mut state) = controller_and_state();
    let id = state
        .session
        .markers
        .place(MapId::Erangel, MarkerCategory::Garage, Vec2::new(100.0, 100.0));

    controller
        .handle_intent(&mut state, AppIntent::MarkerPicked { id })
        .expect("MarkerPicked sollte ohne Fehler durchlaufen");
    assert_eq!(state.session.selected_marker_id, Some(id));

    controller
        .handle_intent(&mut state, AppIntent::SelectionCleared)
        .expect("SelectionCleared sollte ohne Fehler durchlaufen");
    assert_eq!(state.session.selected_marker_id, None);
}

#[test]
fn test_pick_unknown_marker_keeps_selection_empty() {
    let (mut controller, mut state) = controller_and_state();

    controller
        .handle_intent(&mut state, AppIntent::MarkerPicked { id: 4711 })
        .expect("MarkerPicked sollte bei unbekannter ID robust sein");

    assert_eq!(state.session.selected_marker_id, None);
}

#[test]
fn test_category_button_press_switches_then_toggles() {
    let (mut controller, mut state) = controller_and_state();
    assert_eq!(state.session.active_category, MarkerCategory::Garage);

    // Erster Druck auf Boot: aktive Kategorie wechselt, Filter unverändert
    controller
        .handle_intent(
            &mut state,
            AppIntent::CategoryButtonPressed {
                category: MarkerCategory::Boat,
            },
        )
        .expect("CategoryButtonPressed sollte ohne Fehler durchlaufen");

    assert_eq!(state.session.active_category, MarkerCategory::Boat);
    assert!(!state.session.filters.is_enabled(MarkerCategory::Boat));

    // Zweiter Druck auf Boot: Filter der aktiven Kategorie kippt
    controller
        .handle_intent(
            &mut state,
            AppIntent::CategoryButtonPressed {
                category: MarkerCategory::Boat,
            },
        )
        .expect("CategoryButtonPressed sollte ohne Fehler durchlaufen");

    assert_eq!(state.session.active_category, MarkerCategory::Boat);
    assert!(state.session.filters.is_enabled(MarkerCategory::Boat));
}

#[test]
fn test_mode_switch_to_viewer_loads_bundled_dataset() {
    let (mut controller, mut state) = controller_and_state();
    state.session.mode = AppMode::Editor;

    controller
        .handle_intent(
            &mut state,
            AppIntent::ModeSelected {
                mode: AppMode::Viewer,
            },
        )
        .expect("ModeSelected sollte ohne Fehler durchlaufen");

    assert_eq!(state.session.mode, AppMode::Viewer);
    assert!(state.session.markers_loaded);
    assert!(!state.session.markers.is_empty());
}

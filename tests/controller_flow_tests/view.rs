use itinerary_planner::{AppController, AppIntent, AppState, Itinerary, MapCamera};

use super::common::two_day_state;

#[test]
fn test_zoom_intents_are_clamped_to_range() {
    let mut controller = AppController::new();
    let mut state = two_day_state();

    for _ in 0..20 {
        controller
            .handle_intent(&mut state, AppIntent::ZoomInRequested)
            .unwrap();
    }
    assert_eq!(state.view.camera.zoom, MapCamera::ZOOM_MAX);

    for _ in 0..20 {
        controller
            .handle_intent(&mut state, AppIntent::ZoomOutRequested)
            .unwrap();
    }
    assert_eq!(state.view.camera.zoom, MapCamera::ZOOM_MIN);
}

#[test]
fn test_center_map_uses_bounding_box_centroid() {
    let mut controller = AppController::new();
    let mut state = two_day_state();

    controller
        .handle_intent(&mut state, AppIntent::CenterMapRequested)
        .expect("CenterMap sollte mit Aktivitäten funktionieren");

    // Bounding-Box der Fixture: lat [28.52, 28.65], lng [77.18, 77.27]
    let center = state.view.camera.center;
    assert!((center.lat - 28.585).abs() < 1e-9);
    assert!((center.lng - 77.225).abs() < 1e-9);
}

#[test]
fn test_center_map_on_empty_itinerary_is_an_error() {
    let mut controller = AppController::new();
    let mut state = AppState::with_itinerary(Itinerary::from_days(Vec::new()));
    let before = state.view.camera.clone();

    let result = controller.handle_intent(&mut state, AppIntent::CenterMapRequested);

    assert!(result.is_err(), "Leere Punktmenge ist ein Contract-Fehler");
    // Kamera bleibt unverändert, kein irreführendes Standard-Zentrum
    assert_eq!(state.view.camera, before);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = two_day_state();

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
    assert!(
        last.contains("RequestExit"),
        "Unerwarteter letzter Command: {last}"
    );
}

#[test]
fn test_search_changed_updates_ui_state() {
    let mut controller = AppController::new();
    let mut state = two_day_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SearchChanged {
                query: "fort".to_string(),
            },
        )
        .unwrap();

    assert_eq!(state.ui.search_query, "fort");
}

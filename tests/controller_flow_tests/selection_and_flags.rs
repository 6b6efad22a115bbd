use itinerary_planner::{AppController, AppIntent};

use super::common::two_day_state;

#[test]
fn test_card_click_and_marker_click_select_the_same_activity() {
    let mut controller = AppController::new();
    let mut state = two_day_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ActivityClicked {
                activity_id: "B".to_string(),
            },
        )
        .unwrap();
    assert!(state.selection.is_selected("B"));

    // Marker-Klick ersetzt die Selektion — Liste und Karte teilen den Wert
    controller
        .handle_intent(
            &mut state,
            AppIntent::MarkerClicked {
                activity_id: "D".to_string(),
            },
        )
        .unwrap();
    assert!(state.selection.is_selected("D"));
    assert!(!state.selection.is_selected("B"));
}

#[test]
fn test_clear_selection() {
    let mut controller = AppController::new();
    let mut state = two_day_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ActivityClicked {
                activity_id: "A".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ClearSelectionRequested)
        .unwrap();

    assert_eq!(state.selection.selected_activity_id, None);
}

#[test]
fn test_stale_selection_is_read_as_none() {
    let mut controller = AppController::new();
    let mut state = two_day_state();

    // Der Store validiert nicht gegen den Reiseplan
    controller
        .handle_intent(
            &mut state,
            AppIntent::MarkerClicked {
                activity_id: "no-longer-there".to_string(),
            },
        )
        .expect("Selektion unbekannter IDs ist kein Fehler");

    assert!(state
        .selection
        .selected_activity(&state.itinerary)
        .is_none());
}

#[test]
fn test_toggle_like_twice_restores_snapshot() {
    let mut controller = AppController::new();
    let mut state = two_day_state();
    let before = (*state.itinerary).clone();

    for _ in 0..2 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::ToggleLikeRequested {
                    activity_id: "A".to_string(),
                    day_id: "day-1".to_string(),
                },
            )
            .unwrap();
    }

    assert_eq!(*state.itinerary, before);
}

#[test]
fn test_toggle_bookmark_only_touches_target_activity() {
    let mut controller = AppController::new();
    let mut state = two_day_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ToggleBookmarkRequested {
                activity_id: "B".to_string(),
                day_id: "day-1".to_string(),
            },
        )
        .unwrap();

    assert!(state.itinerary.find_activity("B").unwrap().is_bookmarked);
    for untouched in ["A", "C", "D"] {
        let a = state.itinerary.find_activity(untouched).unwrap();
        assert!(!a.is_bookmarked);
        assert!(!a.is_liked);
    }
    assert_eq!(state.liked_count(), 0);
}

#[test]
fn test_toggle_with_stale_ids_is_noop_and_logged() {
    let mut controller = AppController::new();
    let mut state = two_day_state();
    let before = state.itinerary.clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ToggleLikeRequested {
                activity_id: "A".to_string(),
                day_id: "day-2".to_string(), // falscher Tag
            },
        )
        .expect("Veraltete IDs sind ein No-op, kein Fehler");

    assert_eq!(*state.itinerary, *before);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(
        last.contains("ToggleLiked"),
        "Unerwarteter letzter Command: {last}"
    );
}

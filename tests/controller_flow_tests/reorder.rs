use itinerary_planner::{AppController, AppIntent};

use super::common::{day_order, two_day_state};

#[test]
fn test_drag_a_over_c_reorders_day_and_logs_commands() {
    let mut controller = AppController::new();
    let mut state = two_day_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::DragStarted {
                activity_id: "A".to_string(),
                day_id: "day-1".to_string(),
            },
        )
        .expect("DragStarted sollte ohne Fehler durchlaufen");

    assert!(state.reorder.is_dragging("day-1"));
    assert!(!state.reorder.is_dragging("day-2"));

    controller
        .handle_intent(
            &mut state,
            AppIntent::DragEnded {
                dropped_over: Some("C".to_string()),
            },
        )
        .expect("DragEnded sollte ohne Fehler durchlaufen");

    assert_eq!(day_order(&state, "day-1"), vec!["B", "C", "A"]);
    assert!(state.reorder.is_idle());

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(last.contains("EndDrag"), "Unerwarteter letzter Command: {last}");
}

#[test]
fn test_drop_on_self_leaves_order_unchanged() {
    let mut controller = AppController::new();
    let mut state = two_day_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::DragStarted {
                activity_id: "B".to_string(),
                day_id: "day-1".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DragEnded {
                dropped_over: Some("B".to_string()),
            },
        )
        .unwrap();

    assert_eq!(day_order(&state, "day-1"), vec!["A", "B", "C"]);
    assert!(state.reorder.is_idle());
}

#[test]
fn test_drag_cancelled_always_returns_to_idle() {
    let mut controller = AppController::new();
    let mut state = two_day_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::DragStarted {
                activity_id: "A".to_string(),
                day_id: "day-1".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::DragCancelled)
        .expect("Abbruch muss dieselbe Idle-Garantie haben wie ein Drop");

    assert!(state.reorder.is_idle());
    assert_eq!(day_order(&state, "day-1"), vec!["A", "B", "C"]);
}

#[test]
fn test_cross_day_drop_is_rejected_without_mutation() {
    let mut controller = AppController::new();
    let mut state = two_day_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::DragStarted {
                activity_id: "A".to_string(),
                day_id: "day-1".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DragEnded {
                dropped_over: Some("D".to_string()),
            },
        )
        .expect("Cross-Day-Drop ist ein No-op, kein Fehler");

    assert_eq!(day_order(&state, "day-1"), vec!["A", "B", "C"]);
    assert_eq!(day_order(&state, "day-2"), vec!["D"]);
    assert!(state.reorder.is_idle());
}

#[test]
fn test_second_drag_start_is_rejected_while_first_is_active() {
    let mut controller = AppController::new();
    let mut state = two_day_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::DragStarted {
                activity_id: "A".to_string(),
                day_id: "day-1".to_string(),
            },
        )
        .unwrap();
    // Zweiter Pointer-Down bevor der erste Drag endet (racy Input)
    controller
        .handle_intent(
            &mut state,
            AppIntent::DragStarted {
                activity_id: "D".to_string(),
                day_id: "day-2".to_string(),
            },
        )
        .expect("Doppelter DragStart ist ein No-op, kein Fehler");

    assert_eq!(state.reorder.active_activity(), Some("A"));

    // Der ursprüngliche Drag bleibt voll funktionsfähig
    controller
        .handle_intent(
            &mut state,
            AppIntent::DragEnded {
                dropped_over: Some("B".to_string()),
            },
        )
        .unwrap();
    assert_eq!(day_order(&state, "day-1"), vec!["B", "A", "C"]);
}

#[test]
fn test_reorder_keeps_snapshot_immutability() {
    let mut controller = AppController::new();
    let mut state = two_day_state();
    let before = state.itinerary.clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::DragStarted {
                activity_id: "C".to_string(),
                day_id: "day-1".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DragEnded {
                dropped_over: Some("A".to_string()),
            },
        )
        .unwrap();

    // Der alte Snapshot bleibt unverändert bestehen
    assert_eq!(
        before
            .day("day-1")
            .unwrap()
            .activities
            .iter()
            .map(|a| a.id.as_str())
            .collect::<Vec<_>>(),
        vec!["A", "B", "C"]
    );
    assert_eq!(day_order(&state, "day-1"), vec!["C", "A", "B"]);
}

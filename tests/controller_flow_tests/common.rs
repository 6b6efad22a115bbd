//! Gemeinsame Test-Fixtures für die Controller-Flow-Tests.

use itinerary_planner::{Activity, AppState, Category, Day, GeoPoint, Itinerary};

pub fn activity(id: &str, lat: f64, lng: f64) -> Activity {
    Activity {
        id: id.to_string(),
        title: format!("Activity {id}"),
        description: "Testbeschreibung".to_string(),
        rating: 4.0,
        review_count: "1,000".to_string(),
        location: "Delhi".to_string(),
        image: String::new(),
        category: Category::Monument,
        is_liked: false,
        is_bookmarked: false,
        coordinates: GeoPoint::new(lat, lng),
    }
}

/// Zwei Tage: day-1 = [A, B, C], day-2 = [D]
pub fn two_day_state() -> AppState {
    AppState::with_itinerary(Itinerary::from_days(vec![
        Day {
            id: "day-1".to_string(),
            title: "Day 1".to_string(),
            date: "June 15, 2024".to_string(),
            activities: vec![
                activity("A", 28.61, 77.23),
                activity("B", 28.65, 77.24),
                activity("C", 28.52, 77.18),
            ],
        },
        Day {
            id: "day-2".to_string(),
            title: "Day 2".to_string(),
            date: "June 16, 2024".to_string(),
            activities: vec![activity("D", 28.55, 77.27)],
        },
    ]))
}

pub fn day_order(state: &AppState, day_id: &str) -> Vec<String> {
    state
        .itinerary
        .day(day_id)
        .expect("Tag muss existieren")
        .activities
        .iter()
        .map(|a| a.id.clone())
        .collect()
}

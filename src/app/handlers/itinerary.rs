//! Handler für Flag-Toggles auf dem Reiseplan-Snapshot.

use crate::app::AppState;
use std::sync::Arc;

/// Invertiert das Like-Flag einer Aktivität (neuer Snapshot).
/// Veraltete IDs aus einer re-renderten View sind ein No-op.
pub fn toggle_liked(state: &mut AppState, activity_id: &str, day_id: &str) {
    match state.itinerary.with_liked_toggled(activity_id, day_id) {
        Some(next) => state.itinerary = Arc::new(next),
        None => log::debug!("toggle_liked ignoriert: {activity_id}/{day_id} nicht gefunden"),
    }
}

/// Invertiert das Bookmark-Flag einer Aktivität (neuer Snapshot).
pub fn toggle_bookmarked(state: &mut AppState, activity_id: &str, day_id: &str) {
    match state.itinerary.with_bookmark_toggled(activity_id, day_id) {
        Some(next) => state.itinerary = Arc::new(next),
        None => log::debug!("toggle_bookmarked ignoriert: {activity_id}/{day_id} nicht gefunden"),
    }
}

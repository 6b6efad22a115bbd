//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::DragStarted {
            activity_id,
            day_id,
        } => vec![AppCommand::BeginDrag {
            activity_id,
            day_id,
        }],
        AppIntent::DragEnded { dropped_over } => vec![AppCommand::EndDrag { dropped_over }],
        // Abbruch = Drop ohne gültiges Ziel, gleiche Idle-Garantie
        AppIntent::DragCancelled => vec![AppCommand::EndDrag { dropped_over: None }],
        AppIntent::ActivityClicked { activity_id } | AppIntent::MarkerClicked { activity_id } => {
            vec![AppCommand::SelectActivity { activity_id }]
        }
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::ToggleLikeRequested {
            activity_id,
            day_id,
        } => vec![AppCommand::ToggleLiked {
            activity_id,
            day_id,
        }],
        AppIntent::ToggleBookmarkRequested {
            activity_id,
            day_id,
        } => vec![AppCommand::ToggleBookmarked {
            activity_id,
            day_id,
        }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::CenterMapRequested => vec![AppCommand::CenterOnItinerary],
        AppIntent::SearchChanged { query } => vec![AppCommand::SetSearchQuery { query }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Drag & Reorder ===
            AppCommand::BeginDrag {
                activity_id,
                day_id,
            } => handlers::reorder::begin_drag(state, &activity_id, &day_id),
            AppCommand::EndDrag { dropped_over } => {
                handlers::reorder::end_drag(state, dropped_over.as_deref())?
            }

            // === Selektion ===
            AppCommand::SelectActivity { activity_id } => {
                handlers::selection::select(state, &activity_id)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Flags ===
            AppCommand::ToggleLiked {
                activity_id,
                day_id,
            } => handlers::itinerary::toggle_liked(state, &activity_id, &day_id),
            AppCommand::ToggleBookmarked {
                activity_id,
                day_id,
            } => handlers::itinerary::toggle_bookmarked(state, &activity_id, &day_id),

            // === Karte & Anwendungssteuerung ===
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::CenterOnItinerary => handlers::view::center_on_itinerary(state)?,
            AppCommand::SetSearchQuery { query } => handlers::view::set_search_query(state, query),
            AppCommand::RequestExit => handlers::view::request_exit(state),
        }

        Ok(())
    }
}

use crate::app::CommandLog;
use crate::core::{Itinerary, ReorderEngine};
use std::sync::Arc;

use super::{SelectionState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktueller Reiseplan-Snapshot (wird bei Mutation wholesale ersetzt)
    pub itinerary: Arc<Itinerary>,
    /// View-State (Kartenkamera)
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Drag-Lebenszyklus und Umsortierung
    pub reorder: ReorderEngine,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit leerem Reiseplan.
    pub fn new() -> Self {
        Self::with_itinerary(Itinerary::from_days(Vec::new()))
    }

    /// Erstellt einen App-State mit dem übergebenen Reiseplan.
    pub fn with_itinerary(itinerary: Itinerary) -> Self {
        Self {
            itinerary: Arc::new(itinerary),
            view: ViewState::new(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            reorder: ReorderEngine::new(),
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Aktivitäten zurück (für UI-Anzeige)
    pub fn activity_count(&self) -> usize {
        self.itinerary.total_activity_count()
    }

    /// Gibt die Anzahl der Reisetage zurück (für UI-Anzeige)
    pub fn day_count(&self) -> usize {
        self.itinerary.day_count()
    }

    /// Gibt die Anzahl der gelikten Aktivitäten zurück (für UI-Anzeige)
    pub fn liked_count(&self) -> usize {
        self.itinerary.liked_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

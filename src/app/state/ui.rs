/// UI-State für Anzeige-Elemente ohne Domänenlogik
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Inhalt des Suchfelds im Header (rein kosmetisch, keine Filterung)
    pub search_query: String,
}

impl UiState {
    /// Erstellt den leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}

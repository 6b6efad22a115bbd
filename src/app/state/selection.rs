use crate::core::{Activity, Itinerary};

/// Auswahlbezogener Anwendungszustand.
///
/// Höchstens eine Aktivität ist global selektiert; Liste und Karte lesen
/// denselben Wert. Der Store validiert IDs nicht — Konsumenten behandeln
/// veraltete Selektionen beim Lesen als "keine".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// ID der selektierten Aktivität (None = keine Selektion)
    pub selected_activity_id: Option<String>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ersetzt die Selektion durch die genannte Aktivität.
    pub fn select(&mut self, activity_id: &str) {
        self.selected_activity_id = Some(activity_id.to_string());
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.selected_activity_id = None;
    }

    /// Defensiver Lesezugriff: liefert die selektierte Aktivität nur, wenn
    /// sie im aktuellen Snapshot noch existiert (veraltete ID → None).
    pub fn selected_activity<'a>(&self, itinerary: &'a Itinerary) -> Option<&'a Activity> {
        let id = self.selected_activity_id.as_deref()?;
        itinerary.find_activity(id)
    }

    /// True wenn genau diese Aktivität selektiert ist
    pub fn is_selected(&self, activity_id: &str) -> bool {
        self.selected_activity_id.as_deref() == Some(activity_id)
    }
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Drag-Geste auf einer Aktivitätskarte gestartet
    DragStarted {
        activity_id: String,
        day_id: String,
    },
    /// Drag-Geste beendet; `dropped_over` ist die Karte unter dem Pointer
    /// (None = außerhalb jedes gültigen Ziels losgelassen)
    DragEnded { dropped_over: Option<String> },
    /// Drag von der Eingabeschicht abgebrochen (z.B. Pointer-Capture verloren)
    DragCancelled,
    /// Aktivitätskarte angeklickt (Selektion)
    ActivityClicked { activity_id: String },
    /// Karten-Marker angeklickt (Selektion)
    MarkerClicked { activity_id: String },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Like-Flag einer Aktivität umschalten
    ToggleLikeRequested {
        activity_id: String,
        day_id: String,
    },
    /// Bookmark-Flag einer Aktivität umschalten
    ToggleBookmarkRequested {
        activity_id: String,
        day_id: String,
    },
    /// Stufenweise in die Karte hineinzoomen
    ZoomInRequested,
    /// Stufenweise aus der Karte herauszoomen
    ZoomOutRequested,
    /// Karte auf alle Aktivitäten zentrieren
    CenterMapRequested,
    /// Suchfeld-Eingabe geändert (nur Anzeige, keine Filterlogik)
    SearchChanged { query: String },
    /// Anwendung beenden
    ExitRequested,
}

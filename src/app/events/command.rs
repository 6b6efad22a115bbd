/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Drag-Sitzung für eine Aktivität starten
    BeginDrag {
        activity_id: String,
        day_id: String,
    },
    /// Drag-Sitzung beenden und ggf. Umsortierung anwenden
    EndDrag { dropped_over: Option<String> },
    /// Aktivität als selektiert setzen
    SelectActivity { activity_id: String },
    /// Selektion aufheben
    ClearSelection,
    /// Like-Flag umschalten (Snapshot-Ableitung)
    ToggleLiked {
        activity_id: String,
        day_id: String,
    },
    /// Bookmark-Flag umschalten (Snapshot-Ableitung)
    ToggleBookmarked {
        activity_id: String,
        day_id: String,
    },
    /// Karten-Zoom-Level erhöhen
    ZoomIn,
    /// Karten-Zoom-Level verringern
    ZoomOut,
    /// Kartenzentrum auf die Bounding-Box aller Aktivitäten setzen
    CenterOnItinerary,
    /// Suchtext im UI-State aktualisieren
    SetSearchQuery { query: String },
    /// Anwendung kontrolliert beenden
    RequestExit,
}

//! Handler für Kartenkamera und Anwendungssteuerung.

use anyhow::bail;

use crate::app::AppState;
use crate::core::{GeoPoint, MapCamera};

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_in();
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_out();
}

/// Zentriert die Karte auf die Bounding-Box aller Aktivitäten.
///
/// Ein leerer Reiseplan ist ein Contract-Fehler des Aufrufers — statt eines
/// irreführenden Standard-Zentrums wird ein expliziter Fehler gemeldet.
pub fn center_on_itinerary(state: &mut AppState) -> anyhow::Result<()> {
    let points: Vec<GeoPoint> = state
        .itinerary
        .all_activities()
        .map(|a| a.coordinates)
        .collect();

    let Some(center) = MapCamera::fit_bounds(&points) else {
        bail!("fit_bounds ohne Aktivitäten aufgerufen");
    };

    state.view.camera.look_at(center);
    log::info!("Karte zentriert auf ({:.4}, {:.4})", center.lat, center.lng);
    Ok(())
}

/// Aktualisiert den Suchtext im UI-State.
pub fn set_search_query(state: &mut AppState, query: String) {
    state.ui.search_query = query;
}

/// Signalisiert dem Host das kontrollierte Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

//! Handler für den Drag-Lebenszyklus und die Tages-Umsortierung.

use crate::app::AppState;
use std::sync::Arc;

/// Startet eine Drag-Sitzung. Ungültige Vorbedingungen (Sitzung aktiv,
/// Aktivität nicht im Tag) sind ein No-op.
pub fn begin_drag(state: &mut AppState, activity_id: &str, day_id: &str) {
    if state.reorder.begin_drag(&state.itinerary, activity_id, day_id) {
        log::info!("Drag gestartet: {activity_id} in {day_id}");
    }
}

/// Beendet die Drag-Sitzung und wendet eine gültige Umsortierung als
/// atomaren Listen-Austausch auf den Snapshot an.
///
/// Die Engine liefert garantiert eine Permutation; schlägt der Austausch
/// trotzdem fehl, ist das ein Contract-Fehler und wird propagiert.
pub fn end_drag(state: &mut AppState, dropped_over: Option<&str>) -> anyhow::Result<()> {
    let Some((day_id, new_order)) = state.reorder.end_drag(&state.itinerary, dropped_over) else {
        log::debug!("Drag beendet ohne Umsortierung");
        return Ok(());
    };

    let next = state.itinerary.with_day_reordered(&day_id, new_order)?;
    state.itinerary = Arc::new(next);
    log::info!("Tag {day_id} umsortiert");
    Ok(())
}

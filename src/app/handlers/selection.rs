//! Handler für Selektions-Operationen.

use crate::app::AppState;

/// Setzt die globale Selektion auf die genannte Aktivität.
/// Es findet keine Existenzprüfung statt (defensives Lesen beim Rendern).
pub fn select(state: &mut AppState, activity_id: &str) {
    state.selection.select(activity_id);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    state.selection.clear();
}

//! Drag-Lebenszyklus und stabiles Umsortieren innerhalb eines Tages.

use super::{Activity, Itinerary};

/// Aktive Drag-Sitzung (existiert nur während einer Geste).
///
/// Es gibt höchstens eine Sitzung gleichzeitig (Single-Pointer-Annahme);
/// der Zustandsautomat kennt nur `idle -> dragging -> idle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// ID der gezogenen Aktivität
    pub activity_id: String,
    /// Tag, zu dem die Aktivität gehört
    pub day_id: String,
}

/// Engine für den Drag-Lebenszyklus und die daraus folgende Umsortierung.
///
/// Die Engine mutiert den Reiseplan nie selbst: `end_drag` berechnet die
/// neue Tagesliste, der Itinerary-Store wendet sie als einen atomaren
/// Listen-Austausch an.
#[derive(Debug, Default)]
pub struct ReorderEngine {
    session: Option<DragSession>,
}

impl ReorderEngine {
    /// Erstellt eine Engine im Idle-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet eine Drag-Sitzung für `(activity_id, day_id)`.
    ///
    /// Gibt `false` zurück (Zustand unverändert), wenn bereits eine Sitzung
    /// aktiv ist oder die Aktivität nicht im genannten Tag liegt. Racy
    /// Pointer-Eingaben sind kein Fehler, sondern ein No-op.
    pub fn begin_drag(&mut self, itinerary: &Itinerary, activity_id: &str, day_id: &str) -> bool {
        if self.session.is_some() {
            log::debug!("begin_drag ignoriert: Sitzung bereits aktiv");
            return false;
        }
        let Some(day) = itinerary.day(day_id) else {
            log::debug!("begin_drag ignoriert: unbekannter Tag {day_id}");
            return false;
        };
        if !day.contains_activity(activity_id) {
            log::debug!("begin_drag ignoriert: {activity_id} liegt nicht in {day_id}");
            return false;
        }

        self.session = Some(DragSession {
            activity_id: activity_id.to_string(),
            day_id: day_id.to_string(),
        });
        true
    }

    /// Beendet die aktive Drag-Sitzung.
    ///
    /// Kehrt in jedem Fall nach `idle` zurück — auch bei Abbruch durch die
    /// Eingabeschicht (`dropped_over = None`). Liefert nur dann die neue
    /// Tagesliste, wenn ein gültiges Ziel im selben Tag getroffen wurde;
    /// Drop auf sich selbst oder in einen anderen Tag ist ein No-op
    /// (Cross-Day-Moves sind bewusst ausgeschlossen).
    pub fn end_drag(
        &mut self,
        itinerary: &Itinerary,
        dropped_over: Option<&str>,
    ) -> Option<(String, Vec<Activity>)> {
        let session = self.session.take()?;
        let over_id = dropped_over?;
        if over_id == session.activity_id {
            return None;
        }

        let day = itinerary.day(&session.day_id)?;
        let old_index = day.position_of(&session.activity_id)?;
        // Ziel muss im selben Tag liegen, sonst No-op
        let new_index = day.position_of(over_id)?;

        Some((
            session.day_id,
            array_move(&day.activities, old_index, new_index),
        ))
    }

    /// True solange eine Sitzung für genau diesen Tag aktiv ist
    /// (steuert den "aktiver Tag"-Rahmen in der View).
    pub fn is_dragging(&self, day_id: &str) -> bool {
        self.session.as_ref().is_some_and(|s| s.day_id == day_id)
    }

    /// ID der aktuell gezogenen Aktivität, falls vorhanden
    pub fn active_activity(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.activity_id.as_str())
    }

    /// True wenn keine Sitzung aktiv ist
    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }
}

/// Stabiler Einzelelement-Move: entfernt das Element bei `from` und fügt es
/// bei `to` wieder ein. Alle übrigen Elemente behalten ihre relative
/// Reihenfolge; `from == to` ist die Identität.
pub fn array_move<T: Clone>(list: &[T], from: usize, to: usize) -> Vec<T> {
    debug_assert!(from < list.len() && to < list.len());

    let mut result = list.to_vec();
    let element = result.remove(from);
    result.insert(to, element);
    result
}

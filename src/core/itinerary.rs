//! Die zentrale Itinerary-Datenstruktur mit Tagen und Aktivitäten.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Geografische Position (Breitengrad, Längengrad)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Punkt
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Kategorie einer Aktivität (geschlossene Menge aus den Reisedaten).
///
/// Unbekannte Kategorien aus der Datenquelle landen definiert in `Other`
/// statt in einem stillen Lookup-Fehler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Monument,
    Historical,
    UnescoSite,
    Religious,
    Tomb,
    Temple,
    Other,
}

impl Category {
    /// Anzeigename der Kategorie
    pub fn label(&self) -> &'static str {
        match self {
            Category::Monument => "Monument",
            Category::Historical => "Historical",
            Category::UnescoSite => "UNESCO Site",
            Category::Religious => "Religious",
            Category::Tomb => "Tomb",
            Category::Temple => "Temple",
            Category::Other => "Other",
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Monument" => Category::Monument,
            "Historical" => Category::Historical,
            "UNESCO Site" => Category::UnescoSite,
            "Religious" => Category::Religious,
            "Tomb" => Category::Tomb,
            "Temple" => Category::Temple,
            _ => Category::Other,
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.label().to_string()
    }
}

/// Eine einzelne Aktivität im Reiseplan.
///
/// Unveränderlich bis auf die beiden Flags, die ausschließlich über
/// Snapshot-Ableitung auf [`Itinerary`] invertiert werden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Bewertung 0–5
    pub rating: f32,
    /// Anzeige-String, z.B. "201,124"
    pub review_count: String,
    pub location: String,
    /// Bild-Referenz (wird nicht geladen, nur als Datum mitgeführt)
    pub image: String,
    pub category: Category,
    pub is_liked: bool,
    pub is_bookmarked: bool,
    pub coordinates: GeoPoint,
}

/// Ein Reisetag mit geordneter Aktivitätenliste.
/// Die Reihenfolge ist die Reihenfolge des Tagesplans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub id: String,
    pub title: String,
    pub date: String,
    pub activities: Vec<Activity>,
}

impl Day {
    /// Index einer Aktivität innerhalb des Tages
    pub fn position_of(&self, activity_id: &str) -> Option<usize> {
        self.activities.iter().position(|a| a.id == activity_id)
    }

    /// Prüft ob die Aktivität zu diesem Tag gehört
    pub fn contains_activity(&self, activity_id: &str) -> bool {
        self.position_of(activity_id).is_some()
    }
}

/// Vollständiger Reiseplan als Copy-on-Write-Snapshot.
///
/// Mutationen erzeugen immer einen neuen abgeleiteten Snapshot; der
/// bestehende Wert wird nie in-place verändert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub days: Vec<Day>,
}

impl Itinerary {
    /// Erstellt einen Reiseplan aus einer Tagesliste
    pub fn from_days(days: Vec<Day>) -> Self {
        Self { days }
    }

    /// Findet einen Tag nach seiner ID
    pub fn day(&self, day_id: &str) -> Option<&Day> {
        self.days.iter().find(|d| d.id == day_id)
    }

    /// Findet eine Aktivität itinerary-weit (IDs sind global eindeutig)
    pub fn find_activity(&self, activity_id: &str) -> Option<&Activity> {
        self.days
            .iter()
            .flat_map(|d| d.activities.iter())
            .find(|a| a.id == activity_id)
    }

    /// Iterator über alle Aktivitäten in Itinerary-Reihenfolge
    pub fn all_activities(&self) -> impl Iterator<Item = &Activity> {
        self.days.iter().flat_map(|d| d.activities.iter())
    }

    /// Gesamtzahl der Aktivitäten (für UI-Anzeige, nicht gecacht)
    pub fn total_activity_count(&self) -> usize {
        self.days.iter().map(|d| d.activities.len()).sum()
    }

    /// Anzahl der Reisetage
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Anzahl der mit "Like" markierten Aktivitäten
    pub fn liked_count(&self) -> usize {
        self.all_activities().filter(|a| a.is_liked).count()
    }

    /// Neuer Snapshot mit invertiertem `is_liked` der genannten Aktivität.
    ///
    /// `None` wenn das Aktivität/Tag-Paar nicht existiert (veraltete IDs
    /// aus der UI sind kein Fehler, der Aufrufer behandelt sie als No-op).
    pub fn with_liked_toggled(&self, activity_id: &str, day_id: &str) -> Option<Itinerary> {
        self.with_flag_toggled(activity_id, day_id, |a| a.is_liked = !a.is_liked)
    }

    /// Neuer Snapshot mit invertiertem `is_bookmarked` der genannten Aktivität.
    pub fn with_bookmark_toggled(&self, activity_id: &str, day_id: &str) -> Option<Itinerary> {
        self.with_flag_toggled(activity_id, day_id, |a| {
            a.is_bookmarked = !a.is_bookmarked;
        })
    }

    fn with_flag_toggled(
        &self,
        activity_id: &str,
        day_id: &str,
        toggle: impl FnOnce(&mut Activity),
    ) -> Option<Itinerary> {
        let day_index = self.days.iter().position(|d| d.id == day_id)?;
        let activity_index = self.days[day_index].position_of(activity_id)?;

        let mut next = self.clone();
        toggle(&mut next.days[day_index].activities[activity_index]);
        Some(next)
    }

    /// Ersetzt die Aktivitätenliste eines Tages wholesale durch `new_order`.
    ///
    /// `new_order` muss eine Permutation der bestehenden Liste sein (gleiche
    /// ID-Menge, gleiche Länge). Eine Verletzung ist ein Contract-Fehler des
    /// Aufrufers — die Reorder-Engine liefert immer gültige Permutationen.
    pub fn with_day_reordered(&self, day_id: &str, new_order: Vec<Activity>) -> Result<Itinerary> {
        let Some(day_index) = self.days.iter().position(|d| d.id == day_id) else {
            bail!("Unbekannter Tag: {day_id}");
        };

        let current = &self.days[day_index].activities;
        if current.len() != new_order.len() {
            bail!(
                "Reorder für Tag {day_id} ist keine Permutation: {} vs. {} Aktivitäten",
                current.len(),
                new_order.len()
            );
        }
        let current_ids: HashSet<&str> = current.iter().map(|a| a.id.as_str()).collect();
        let new_ids: HashSet<&str> = new_order.iter().map(|a| a.id.as_str()).collect();
        if current_ids != new_ids {
            bail!("Reorder für Tag {day_id} verändert die ID-Menge");
        }

        let mut next = self.clone();
        next.days[day_index].activities = new_order;
        Ok(next)
    }
}

//! Eingebettete Beispiel-Reisedaten (New Delhi, 2 Tage).

use anyhow::Context;

use crate::core::Itinerary;

const DELHI_SAMPLE: &str = include_str!("delhi.json");

/// Lädt den eingebetteten Beispiel-Reiseplan.
pub fn sample_itinerary() -> anyhow::Result<Itinerary> {
    let itinerary: Itinerary =
        serde_json::from_str(DELHI_SAMPLE).context("Beispieldaten konnten nicht geparst werden")?;

    log::info!(
        "Reiseplan geladen: {} Tage, {} Aktivitäten",
        itinerary.day_count(),
        itinerary.total_activity_count()
    );
    Ok(itinerary)
}

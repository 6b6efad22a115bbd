//! Kopfzeile mit App-Titel, Reise-Eckdaten und Suchfeld.

use crate::app::{AppIntent, AppState};
use crate::ui::theme;

/// Rendert die Kopfzeile und gibt erzeugte Events zurück.
pub fn render_header(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(
                egui::RichText::new("Y2Z TRAVEL")
                    .color(theme::ACCENT)
                    .strong(),
            );

            ui.separator();

            if let (Some(first), Some(last)) =
                (state.itinerary.days.first(), state.itinerary.days.last())
            {
                ui.label(format!("🗓 {} – {}", first.date, last.date));
                ui.separator();
            }
            ui.label(format!("📍 {} activities", state.activity_count()));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut query = state.ui.search_query.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut query)
                        .hint_text("Search activities...")
                        .desired_width(220.0),
                );
                if response.changed() {
                    events.push(AppIntent::SearchChanged { query });
                }
            });
        });
    });

    events
}

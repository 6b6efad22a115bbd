//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Days: {} | Activities: {} | Liked: {}",
                state.day_count(),
                state.activity_count(),
                state.liked_count()
            ));

            ui.separator();

            ui.label(format!("Zoom: {}", state.view.camera.zoom));

            ui.separator();

            // Defensives Lesen: veraltete Selektion erscheint als "None"
            match state.selection.selected_activity(&state.itinerary) {
                Some(activity) => ui.label(format!("Selected: {}", activity.title)),
                None => ui.label("Selected: None"),
            };

            if !state.reorder.is_idle() {
                ui.separator();
                ui.label(egui::RichText::new("Reordering …").italics());
            }
        });
    });
}

//! Rechte Seitenleiste: Trip-Zusammenfassung und schematische Karte.

use glam::Vec2;

use crate::app::{AppIntent, AppState};
use crate::core::Activity;
use crate::ui::theme;

/// Klick-Radius um einen Marker in Oberflächen-Pixeln
const MARKER_PICK_RADIUS: f32 = 14.0;
/// Markerradius (unselektiert)
const MARKER_RADIUS: f32 = 8.0;
/// Markerradius (selektiert)
const MARKER_RADIUS_SELECTED: f32 = 12.0;
/// Rasterweite des Hintergrundgitters
const GRID_STEP: f32 = 40.0;

/// Rendert die Seitenleiste mit Karte und gibt erzeugte Events zurück.
pub fn render_map_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("trip_sidebar")
        .default_width(340.0)
        .show(ctx, |ui| {
            render_trip_summary(ui, state);
            ui.separator();

            ui.label(egui::RichText::new("Map View").strong().size(16.0));
            ui.add_space(4.0);
            render_map(ui, state, &mut events);

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("➕ Zoom").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                }
                if ui.button("➖ Zoom").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                }
                if ui.button("⌖ Fit").clicked() {
                    events.push(AppIntent::CenterMapRequested);
                }
                ui.label(egui::RichText::new(format!("Zoom: {}", state.view.camera.zoom)).weak());
            });

            if let Some(activity) = state.selection.selected_activity(&state.itinerary) {
                ui.add_space(8.0);
                render_selected_info(ui, activity, &mut events);
            }
        });

    events
}

fn render_trip_summary(ui: &mut egui::Ui, state: &AppState) {
    ui.label(egui::RichText::new("Trip Summary").strong().size(16.0));
    ui.add_space(4.0);

    // Abgeleitete Kennzahlen, pro Frame frisch aus dem Snapshot berechnet
    ui.horizontal(|ui| {
        ui.label("Total Activities");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(state.activity_count().to_string()).strong());
        });
    });
    ui.horizontal(|ui| {
        ui.label("Duration");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(format!("{} Days", state.day_count())).strong());
        });
    });
    ui.horizontal(|ui| {
        ui.label("Liked Activities");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(state.liked_count().to_string()).strong());
        });
    });
}

fn render_map(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let desired = egui::Vec2::new(ui.available_width(), 260.0);
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::click());
    let rect = response.rect;
    let surface = Vec2::new(rect.width(), rect.height());
    let camera = &state.view.camera;

    painter.rect_filled(rect, egui::CornerRadius::same(8), theme::MAP_BACKGROUND);

    // Hintergrundgitter
    let grid_stroke = egui::Stroke::new(0.5, theme::MAP_GRID);
    let mut x = rect.left() + GRID_STEP;
    while x < rect.right() {
        painter.line_segment(
            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
            grid_stroke,
        );
        x += GRID_STEP;
    }
    let mut y = rect.top() + GRID_STEP;
    while y < rect.bottom() {
        painter.line_segment(
            [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
            grid_stroke,
        );
        y += GRID_STEP;
    }

    // Marker-Positionen in Itinerary-Reihenfolge projizieren
    let positions: Vec<(egui::Pos2, &Activity)> = state
        .itinerary
        .all_activities()
        .map(|activity| {
            let p = camera.project(activity.coordinates, surface);
            (egui::pos2(rect.left() + p.x, rect.top() + p.y), activity)
        })
        .collect();

    // Gestrichelte Routenlinie zwischen aufeinanderfolgenden Aktivitäten
    for pair in positions.windows(2) {
        let shapes = egui::Shape::dashed_line(
            &[pair[0].0, pair[1].0],
            egui::Stroke::new(2.0, theme::ACCENT.gamma_multiply(0.6)),
            5.0,
            5.0,
        );
        painter.extend(shapes);
    }

    // Marker in Itinerary-Reihenfolge zeichnen, nummeriert ab 1
    for (index, (pos, activity)) in positions.iter().enumerate() {
        let selected = state.selection.is_selected(&activity.id);
        let radius = if selected {
            MARKER_RADIUS_SELECTED
        } else {
            MARKER_RADIUS
        };
        let fill = if selected { theme::ACCENT } else { theme::MARKER };

        painter.circle_filled(*pos + egui::vec2(1.0, 1.0), radius, egui::Color32::from_black_alpha(50));
        painter.circle_filled(*pos, radius, fill);
        painter.circle_stroke(*pos, radius, egui::Stroke::new(2.0, egui::Color32::WHITE));
        painter.text(
            *pos,
            egui::Align2::CENTER_CENTER,
            (index + 1).to_string(),
            egui::FontId::proportional(10.0),
            egui::Color32::WHITE,
        );

        if selected {
            let label_rect = egui::Rect::from_center_size(
                *pos - egui::vec2(0.0, radius + 14.0),
                egui::vec2(90.0, 18.0),
            );
            painter.rect_filled(label_rect, egui::CornerRadius::same(9), egui::Color32::WHITE);
            painter.rect_stroke(
                label_rect,
                egui::CornerRadius::same(9),
                egui::Stroke::new(1.0, theme::ACCENT),
                egui::StrokeKind::Inside,
            );
            let mut title = activity.title.clone();
            if title.chars().count() > 12 {
                title = title.chars().take(12).collect::<String>() + "…";
            }
            painter.text(
                label_rect.center(),
                egui::Align2::CENTER_CENTER,
                title,
                egui::FontId::proportional(10.0),
                egui::Color32::DARK_GRAY,
            );
        }
    }

    // Marker-Pick: nächster Marker innerhalb des Klick-Radius
    if response.clicked() {
        if let Some(click) = response.interact_pointer_pos() {
            let hit = positions
                .iter()
                .map(|(pos, activity)| (pos.distance(click), activity))
                .filter(|(distance, _)| *distance <= MARKER_PICK_RADIUS)
                .min_by(|a, b| a.0.total_cmp(&b.0));

            if let Some((_, activity)) = hit {
                events.push(AppIntent::MarkerClicked {
                    activity_id: activity.id.clone(),
                });
            }
        }
    }
}

fn render_selected_info(ui: &mut egui::Ui, activity: &Activity, events: &mut Vec<AppIntent>) {
    egui::Frame::new()
        .fill(theme::ACCENT.gamma_multiply(0.08))
        .stroke(egui::Stroke::new(1.0, theme::ACCENT))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&activity.title).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        events.push(AppIntent::ClearSelectionRequested);
                    }
                });
            });
            ui.label(egui::RichText::new(format!("📍 {}", activity.location)).small());
            ui.label(egui::RichText::new(&activity.description).small().weak());
        });
}

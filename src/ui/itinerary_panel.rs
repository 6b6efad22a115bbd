//! Tagesliste mit sortierbaren Aktivitätskarten (Drag & Drop).

use crate::app::{AppIntent, AppState};
use crate::core::{Activity, Day};
use crate::ui::theme;

/// Drag-Payload einer Aktivitätskarte.
///
/// Die Tages-ID reist mit, damit die Engine Cross-Day-Drops als No-op
/// zurückweisen kann, ohne dass die View selbst Listenlogik trägt.
#[derive(Clone)]
struct DraggedCard {
    activity_id: String,
    day_id: String,
}

/// Rendert die Tagesliste und gibt erzeugte Events zurück.
///
/// Die View mutiert nichts: Drag-Gesten werden als Intents gemeldet,
/// Listen-Mutation passiert ausschließlich in Engine und Store.
pub fn render_itinerary_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    // Karte, über der der Pointer in diesem Frame losgelassen wurde
    let mut release_target: Option<String> = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Your Itinerary");
        ui.label(
            egui::RichText::new("Click and drag anywhere on a card to reorder your activities")
                .weak(),
        );
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .auto_shrink(false)
            .show(ui, |ui| {
                for day in &state.itinerary.days {
                    render_day(ui, state, day, &mut events, &mut release_target);
                    ui.add_space(12.0);
                }
            });
    });

    // Escape bricht eine laufende Drag-Sitzung ab (Pointer-Capture-Verlust)
    if !state.reorder.is_idle() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        events.push(AppIntent::DragCancelled);
    }

    // Drag-Abschluss: genau ein EndDrag pro Loslassen, auch ohne Ziel.
    // Eine im selben Frame gestartete Sitzung zählt mit, sonst bliebe die
    // Engine bei einem Sofort-Release im Dragging-Zustand hängen.
    let session_active = !state.reorder.is_idle()
        || events
            .iter()
            .any(|e| matches!(e, AppIntent::DragStarted { .. }));
    if session_active && ctx.input(|i| i.pointer.any_released()) {
        events.push(AppIntent::DragEnded {
            dropped_over: release_target,
        });
    }

    events
}

fn render_day(
    ui: &mut egui::Ui,
    state: &AppState,
    day: &Day,
    events: &mut Vec<AppIntent>,
    release_target: &mut Option<String>,
) {
    // "Aktiver Tag"-Rahmen solange eine Drag-Sitzung auf diesem Tag läuft
    let day_stroke = if state.reorder.is_dragging(&day.id) {
        egui::Stroke::new(2.0, theme::ACCENT)
    } else {
        egui::Stroke::new(1.0, theme::CARD_STROKE)
    };

    egui::Frame::new()
        .fill(ui.visuals().panel_fill)
        .stroke(day_stroke)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&day.title)
                        .strong()
                        .size(16.0)
                        .color(theme::ACCENT),
                );
                ui.label(egui::RichText::new(&day.date).weak());
            });
            ui.add_space(6.0);

            for activity in &day.activities {
                render_sortable_card(ui, state, day, activity, events, release_target);
                ui.add_space(6.0);
            }
        });
}

fn render_sortable_card(
    ui: &mut egui::Ui,
    state: &AppState,
    day: &Day,
    activity: &Activity,
    events: &mut Vec<AppIntent>,
    release_target: &mut Option<String>,
) {
    let source_id = egui::Id::new(("activity-card", &activity.id));
    let payload = DraggedCard {
        activity_id: activity.id.clone(),
        day_id: day.id.clone(),
    };

    let response = ui
        .dnd_drag_source(source_id, payload, |ui| {
            draw_card(ui, state, day, activity, events);
        })
        .response;

    if response.drag_started() {
        events.push(AppIntent::DragStarted {
            activity_id: activity.id.clone(),
            day_id: day.id.clone(),
        });
    }

    // Einfüge-Hinweis, solange eine fremde Karte über dieser schwebt
    if let Some(hovered) = response.dnd_hover_payload::<DraggedCard>() {
        if hovered.activity_id != activity.id {
            ui.painter().rect_stroke(
                response.rect,
                egui::CornerRadius::same(8),
                egui::Stroke::new(2.0, theme::ACCENT),
                egui::StrokeKind::Outside,
            );
        }
    }

    if response.dnd_release_payload::<DraggedCard>().is_some() {
        *release_target = Some(activity.id.clone());
    }
}

fn draw_card(
    ui: &mut egui::Ui,
    state: &AppState,
    day: &Day,
    activity: &Activity,
    events: &mut Vec<AppIntent>,
) {
    let selected = state.selection.is_selected(&activity.id);
    let stroke = if selected {
        egui::Stroke::new(2.0, theme::ACCENT)
    } else {
        egui::Stroke::new(1.0, theme::CARD_STROKE)
    };

    egui::Frame::new()
        .fill(theme::CARD_FILL)
        .stroke(stroke)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                // Kategorie-Block statt Bild (Bilder werden nicht geladen)
                let (rect, _) =
                    ui.allocate_exact_size(egui::Vec2::splat(48.0), egui::Sense::hover());
                ui.painter().rect_filled(
                    rect,
                    egui::CornerRadius::same(6),
                    theme::category_color(activity.category),
                );
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "📍",
                    egui::FontId::proportional(20.0),
                    egui::Color32::WHITE,
                );

                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        let title = ui.add(
                            egui::Label::new(egui::RichText::new(&activity.title).strong())
                                .sense(egui::Sense::click()),
                        );
                        if title.clicked() {
                            events.push(AppIntent::ActivityClicked {
                                activity_id: activity.id.clone(),
                            });
                        }

                        ui.label(
                            egui::RichText::new(activity.category.label())
                                .small()
                                .color(theme::category_color(activity.category)),
                        );
                    });

                    ui.label(
                        egui::RichText::new(format!(
                            "★ {:.1} ({})",
                            activity.rating, activity.review_count
                        ))
                        .small(),
                    );
                    ui.label(egui::RichText::new(&activity.description).small().weak());

                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("📍 {}", activity.location)).small(),
                        );

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                let bookmark_color = if activity.is_bookmarked {
                                    theme::BOOKMARK
                                } else {
                                    ui.visuals().weak_text_color()
                                };
                                if ui
                                    .button(egui::RichText::new("🔖").color(bookmark_color))
                                    .clicked()
                                {
                                    events.push(AppIntent::ToggleBookmarkRequested {
                                        activity_id: activity.id.clone(),
                                        day_id: day.id.clone(),
                                    });
                                }

                                let like_color = if activity.is_liked {
                                    theme::LIKE
                                } else {
                                    ui.visuals().weak_text_color()
                                };
                                if ui
                                    .button(egui::RichText::new("♥").color(like_color))
                                    .clicked()
                                {
                                    events.push(AppIntent::ToggleLikeRequested {
                                        activity_id: activity.id.clone(),
                                        day_id: day.id.clone(),
                                    });
                                }
                            },
                        );
                    });
                });
            });
        });
}

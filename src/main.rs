//! Itinerary Planner.
//!
//! Rust-basierter Reiseplaner: Tagesplanung per Drag&Drop, Like/Bookmark-Flags
//! und eine schematische Karte mit synchroner Selektion.

use eframe::egui;
use itinerary_planner::{ui, AppCommand, AppController, AppIntent, AppState};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Itinerary Planner v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Y2Z Travel – Itinerary Planner"),
            ..Default::default()
        };

        eframe::run_native(
            "Itinerary Planner",
            options,
            Box::new(|_cc| Ok(Box::new(PlannerApp::new()?))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct PlannerApp {
    state: AppState,
    controller: AppController,
}

impl PlannerApp {
    fn new() -> anyhow::Result<Self> {
        let itinerary = itinerary_planner::sample_itinerary()?;
        let mut state = AppState::with_itinerary(itinerary);
        let mut controller = AppController::new();

        // Karte initial auf alle Aktivitäten zentrieren
        controller.handle_command(&mut state, AppCommand::CenterOnItinerary)?;

        Ok(Self { state, controller })
    }
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_meaningful_events = !events.is_empty();

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl PlannerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_header(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_map_panel(ctx, &self.state));
        events.extend(ui::render_itinerary_panel(ctx, &self.state));

        if ctx.input(|i| i.viewport().close_requested()) {
            events.push(AppIntent::ExitRequested);
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || !self.state.reorder.is_idle()
        {
            ctx.request_repaint();
        }
    }
}

//! Road Sketch.
//!
//! Interaktiver Straßen-Skizzierer: eine kubische Bézier-Straße folgt dem
//! Zeiger und rastet an vordefinierten Kreuzungen mit festem Anfahrtswinkel ein.

use eframe::egui;
use road_sketch::{ui, AppController, AppIntent, AppState, SketchOptions};

/// Höhe der Status-Bar, wird zur Canvas-Höhe addiert.
const STATUS_BAR_HEIGHT: f32 = 24.0;

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

        log::info!("Road Sketch v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SketchOptions::config_path();
        let sketch_options = SketchOptions::load_from_file(&config_path);
        let [width, height] = sketch_options.canvas_size;

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([width, height + STATUS_BAR_HEIGHT])
                .with_title("Road Sketch"),
            ..Default::default()
        };

        eframe::run_native(
            "Road Sketch",
            options,
            Box::new(move |_cc| {
                let state = AppState::new(sketch_options)?;
                Ok(Box::new(SketchApp::new(state)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SketchApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl SketchApp {
    fn new(state: AppState) -> Self {
        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

                // Eingaben anwenden, dann Frame-Schritt, dann zeichnen
                let events = self.input.collect_canvas_events(ui, &response, rect);
                self.process_events(events);
                self.controller.advance_frame(&mut self.state);

                let scene = self.controller.build_render_scene(&self.state);
                let mut canvas = ui::EguiCanvas::new(ui.painter(), rect);
                ui::paint_scene(&mut canvas, &scene);
            });

        // Dauerhafte Frame-Schleife wie ein klassischer Sketch-Loop
        ctx.request_repaint();
    }
}

impl SketchApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

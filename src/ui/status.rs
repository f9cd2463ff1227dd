//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, SessionMode};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let session = &state.session;
            let mode = match session.mode() {
                SessionMode::Idle => "Idle",
                SessionMode::Dragging => "Dragging",
            };
            ui.label(format!("Mode: {}", mode));

            ui.separator();

            let road = session.live_road();
            ui.label(format!(
                "End: ({:.1}, {:.1}) | Angle: {:.0}° | Samples: {}",
                road.end().x,
                road.end().y,
                road.angle_end(),
                road.centerline().len()
            ));

            ui.separator();

            if let Some(snap) = session.active_snap_point() {
                ui.label(format!(
                    "Snap: ({:.0}, {:.0}) @ {:.0}°",
                    snap.position().x,
                    snap.position().y,
                    snap.approach_angle_deg()
                ));
            } else {
                ui.label("Snap: -");
            }

            ui.separator();

            if let Some(curve) = road.curve() {
                ui.label(format!("Turn: {:.0}°", curve.turn_angle().to_degrees()));
            } else {
                ui.label(
                    egui::RichText::new("⚠ Straße ohne Länge").color(egui::Color32::YELLOW),
                );
            }

            if state.show_debug_overlay {
                ui.separator();
                ui.label("Debug: Normalen");
            }
        });
    });
}

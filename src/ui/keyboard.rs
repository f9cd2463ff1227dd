//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Pfeiltasten / WASD verschieben das Straßenende, `N` schaltet das
//! Debug-Overlay, Escape / `Q` beendet.

use crate::app::AppIntent;
use glam::Vec2;

/// Tasten und die zugehörige Verschiebe-Richtung (y nach unten).
const NUDGE_KEYS: [(egui::Key, Vec2); 8] = [
    (egui::Key::ArrowLeft, Vec2::NEG_X),
    (egui::Key::A, Vec2::NEG_X),
    (egui::Key::ArrowRight, Vec2::X),
    (egui::Key::D, Vec2::X),
    (egui::Key::ArrowUp, Vec2::NEG_Y),
    (egui::Key::W, Vec2::NEG_Y),
    (egui::Key::ArrowDown, Vec2::Y),
    (egui::Key::S, Vec2::Y),
];

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let delta = ui.input(|i| {
        NUDGE_KEYS
            .iter()
            .filter(|(key, _)| i.key_pressed(*key))
            .fold(Vec2::ZERO, |acc, (_, dir)| acc + *dir)
    });
    if delta != Vec2::ZERO {
        events.push(AppIntent::NudgeEndRequested { delta });
    }

    let (key_n_pressed, key_q_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::N),
            i.key_pressed(egui::Key::Q),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if key_n_pressed {
        events.push(AppIntent::ToggleDebugOverlayRequested);
    }

    if key_q_pressed || key_escape_pressed {
        events.push(AppIntent::ExitRequested);
    }

    events
}

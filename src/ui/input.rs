//! Zeichenflächen-Input: Zeiger und Primärtaste → AppIntent.

use super::keyboard;
use crate::app::AppIntent;
use glam::Vec2;

/// Merkt sich die zuletzt gemeldete Zeigerposition.
#[derive(Default)]
pub struct InputState {
    last_pointer: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { last_pointer: None }
    }

    /// Sammelt Zeiger-, Klick- und Tastatur-Events und gibt AppIntents zurück.
    ///
    /// Positionen werden relativ zur linken oberen Ecke von `rect` gemeldet.
    /// Die Primärtaste löst pro Drück-Flanke genau einen Toggle aus.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: egui::Rect,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let (hover_pos, primary_pressed) = ui.input(|i| {
            (
                i.pointer.hover_pos(),
                i.pointer.button_pressed(egui::PointerButton::Primary),
            )
        });

        if let Some(pos) = hover_pos {
            let pos = Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y);
            if self.last_pointer != Some(pos) {
                self.last_pointer = Some(pos);
                events.push(AppIntent::PointerMoved { pos });
            }
        }

        if primary_pressed && response.hovered() {
            events.push(AppIntent::ToggleDragRequested);
        }

        events.extend(keyboard::collect_keyboard_intents(ui));
        events
    }
}

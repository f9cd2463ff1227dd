//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und den Frame-Schritt auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        match command {
            AppCommand::ToggleDrag => state.session.request_toggle(),
            AppCommand::SetPointer { pos } => state.session.set_pointer(pos),
            AppCommand::NudgeEnd { delta } => {
                if !state.session.nudge_end(delta) {
                    log::debug!("Verschieben ignoriert: Straßenende folgt dem Zeiger");
                }
            }
            AppCommand::ToggleDebugOverlay => {
                state.show_debug_overlay = !state.show_debug_overlay;
                log::debug!("Debug-Overlay: {}", state.show_debug_overlay);
            }
            AppCommand::RequestExit => {
                log::info!("Beenden angefordert");
                state.should_exit = true;
            }
        }

        Ok(())
    }

    /// Ein Frame-Schritt: Toggle, Zeiger, Snap-Fang, Neuaufbau der Live-Straße.
    pub fn advance_frame(&mut self, state: &mut AppState) {
        state.session.advance_frame();
    }

    /// Baut die Render-Szene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}

//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ToggleDragRequested => vec![AppCommand::ToggleDrag],
        AppIntent::PointerMoved { pos } => vec![AppCommand::SetPointer { pos }],
        AppIntent::NudgeEndRequested { delta } => {
            // Richtung aus der Tastatur, Schrittweite aus den Optionen
            let delta = delta * state.options.nudge_step;
            vec![AppCommand::NudgeEnd { delta }]
        }
        AppIntent::ToggleDebugOverlayRequested => vec![AppCommand::ToggleDebugOverlay],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

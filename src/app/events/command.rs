/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Toggle für den nächsten Frame vormerken
    ToggleDrag,
    /// Zeigerposition übernehmen
    SetPointer { pos: glam::Vec2 },
    /// Straßenende verschieben (nur im Idle-Modus)
    NudgeEnd { delta: glam::Vec2 },
    /// Debug-Overlay umschalten
    ToggleDebugOverlay,
    /// Anwendung beenden
    RequestExit,
}

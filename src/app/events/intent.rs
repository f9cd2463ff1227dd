/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primärtaste gedrückt: Zieh-Modus umschalten
    ToggleDragRequested,
    /// Zeiger hat sich bewegt (Canvas-Koordinaten)
    PointerMoved { pos: glam::Vec2 },
    /// Straßenende per Tastatur verschieben
    NudgeEndRequested { delta: glam::Vec2 },
    /// Debug-Overlay (Normalen) ein-/ausblenden
    ToggleDebugOverlayRequested,
    /// Anwendung beenden
    ExitRequested,
}

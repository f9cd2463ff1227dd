//! Application State: zentrale Datenhaltung der Sitzung.

use super::session::Session;
use super::CommandLog;
use crate::shared::SketchOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Live-Straße, Snap-Registry und Zeiger-Modus
    pub session: Session,
    /// Laufzeit-Optionen (Geometrie, Farben, Snap-Punkte)
    pub options: SketchOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Normalen der Live-Straße einblenden
    pub show_debug_overlay: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den App-State aus den Optionen.
    ///
    /// Schlägt fehl, wenn Live-Straße oder ein Snap-Punkt ungültig konfiguriert ist.
    pub fn new(options: SketchOptions) -> anyhow::Result<Self> {
        let session = Session::from_options(&options)?;
        Ok(Self {
            session,
            options,
            command_log: CommandLog::new(),
            show_debug_overlay: false,
            should_exit: false,
        })
    }
}

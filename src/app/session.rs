//! Interaktive Sitzung: Live-Straße, Zeiger-Modus und Snap-Fang pro Frame.

use crate::core::{RoadSegment, SnapPoint, SnapRegistry};
use crate::shared::SketchOptions;
use glam::Vec2;

/// Zeiger-Modus der Sitzung.
///
/// Die Primärtaste schaltet um (Toggle), sie wird nicht gehalten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// Straßenende bleibt stehen
    #[default]
    Idle,
    /// Straßenende folgt dem Zeiger
    Dragging,
}

impl SessionMode {
    fn toggled(self) -> Self {
        match self {
            Self::Idle => Self::Dragging,
            Self::Dragging => Self::Idle,
        }
    }
}

/// Besitzt die Live-Straße und die Snap-Registry.
///
/// Ein Frame läuft immer in derselben Reihenfolge ab (`advance_frame`):
/// Toggle anwenden → Ende auf Zeiger setzen → Snap-Fang → `update()`.
/// Gezeichnet wird erst danach, daher sieht die Zeichen-Schicht nie einen
/// halb aktualisierten Zustand.
#[derive(Debug, Clone)]
pub struct Session {
    registry: SnapRegistry,
    live_road: RoadSegment,
    mode: SessionMode,
    pointer: Vec2,
    pending_toggle: bool,
    /// End-Winkel ohne Snap; wird in jedem Frame ohne Fang wiederhergestellt
    free_angle_end: f32,
    active_snap: Option<usize>,
    degenerate: bool,
}

impl Session {
    /// Erstellt die Sitzung aus Registry und Live-Straße.
    pub fn new(registry: SnapRegistry, live_road: RoadSegment) -> Self {
        let pointer = live_road.end();
        let free_angle_end = live_road.angle_end();
        Self {
            registry,
            live_road,
            mode: SessionMode::Idle,
            pointer,
            pending_toggle: false,
            free_angle_end,
            active_snap: None,
            degenerate: false,
        }
    }

    /// Baut Registry und Live-Straße aus den Optionen.
    pub fn from_options(options: &SketchOptions) -> anyhow::Result<Self> {
        let geometry = options.road_geometry();
        let registry = SnapRegistry::from_options(&options.snap_points, geometry)?;
        let live_road = RoadSegment::new(
            Vec2::from(options.live_road_start),
            Vec2::from(options.live_road_end),
            options.live_road_start_heading_deg,
            geometry,
        )?;
        Ok(Self::new(registry, live_road))
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        self.mode == SessionMode::Dragging
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn live_road(&self) -> &RoadSegment {
        &self.live_road
    }

    pub fn registry(&self) -> &SnapRegistry {
        &self.registry
    }

    /// Index des Snap-Punkts, der im letzten Frame das Ende festhielt.
    pub fn active_snap(&self) -> Option<usize> {
        self.active_snap
    }

    /// Snap-Punkt, der im letzten Frame das Ende festhielt.
    pub fn active_snap_point(&self) -> Option<&SnapPoint> {
        self.active_snap.and_then(|index| self.registry.get(index))
    }

    /// Merkt einen Toggle für den nächsten Frame vor.
    /// Zwei Toggles vor demselben Frame heben sich auf.
    pub fn request_toggle(&mut self) {
        self.pending_toggle = !self.pending_toggle;
    }

    /// Speichert die aktuelle Zeigerposition.
    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// Verschiebt das Straßenende per Tastatur. Nur im Idle-Modus wirksam.
    pub fn nudge_end(&mut self, delta: Vec2) -> bool {
        if self.mode != SessionMode::Idle {
            return false;
        }
        let end = self.live_road.end() + delta;
        self.live_road.set_end(end);
        true
    }

    /// Führt einen vollständigen Frame-Schritt aus.
    pub fn advance_frame(&mut self) {
        if self.pending_toggle {
            self.pending_toggle = false;
            self.mode = self.mode.toggled();
            log::debug!("Sitzungs-Modus: {:?}", self.mode);
        }

        if self.mode == SessionMode::Dragging {
            self.live_road.set_end(self.pointer);
        }

        self.apply_capture();

        match self.live_road.update() {
            Ok(()) => self.degenerate = false,
            Err(e) => {
                if !self.degenerate {
                    log::warn!("Live-Straße degeneriert: {:#}", e);
                }
                self.degenerate = true;
            }
        }
    }

    fn apply_capture(&mut self) {
        let captured = self
            .registry
            .capture(self.live_road.end())
            .map(|(index, snap)| (index, snap.position(), snap.approach_angle_deg()));

        match captured {
            Some((index, position, angle)) => {
                self.live_road.set_end(position);
                self.live_road.set_angle_end(angle);
                if self.active_snap != Some(index) {
                    log::debug!("Snap-Punkt #{} fängt Straßenende bei {:?}", index, position);
                }
                self.active_snap = Some(index);
            }
            None => {
                self.live_road.set_angle_end(self.free_angle_end);
                if let Some(index) = self.active_snap.take() {
                    log::debug!("Snap-Punkt #{} freigegeben", index);
                }
            }
        }
    }
}

//! Render-Szene als expliziter Übergabevertrag zwischen App und Zeichen-Schicht.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::SketchOptions;
use glam::Vec2;

/// Alle drei Polylinien einer Straße für einen Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadPolylines {
    /// Mittellinie (wird gestrichelt gezeichnet)
    pub centerline: Vec<Vec2>,
    /// Linke Randlinie
    pub left_edge: Vec<Vec2>,
    /// Rechte Randlinie
    pub right_edge: Vec<Vec2>,
}

impl RoadPolylines {
    /// `true` wenn die Straße in diesem Frame nichts zu zeichnen hat.
    pub fn is_empty(&self) -> bool {
        self.centerline.is_empty()
    }
}

/// Fangkreis eines Snap-Punkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapMarker {
    pub position: Vec2,
    pub capture_radius: f32,
    pub approach_angle_deg: f32,
    /// Hält der Snap-Punkt in diesem Frame das Straßenende fest?
    pub active: bool,
}

/// Debug-Normale an einem Mittellinien-Punkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalMarker {
    pub origin: Vec2,
    pub tip: Vec2,
}

/// Read-only Daten für einen Zeichen-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Vorgerenderte Beispiel-Straßen der Snap-Punkte (Registry-Reihenfolge)
    pub static_roads: Vec<RoadPolylines>,
    /// Live-Straße des aktuellen Frames
    pub live_road: RoadPolylines,
    /// Fangkreise aller Snap-Punkte
    pub snap_markers: Vec<SnapMarker>,
    /// Normalen der Live-Straße (nur bei aktivem Debug-Overlay gefüllt)
    pub debug_normals: Vec<NormalMarker>,
    /// Letzte Zeigerposition
    pub pointer: Vec2,
    /// Folgt das Straßenende dem Zeiger?
    pub dragging: bool,
    /// Laufzeit-Optionen für Farben und Strichmuster
    pub options: SketchOptions,
}

impl RenderScene {
    /// Gibt zurück, ob die Live-Straße gezeichnet werden kann.
    pub fn has_live_road(&self) -> bool {
        !self.live_road.is_empty()
    }
}

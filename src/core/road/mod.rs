//! Straßen-Segment: besitzt eine `RoadCurve` und leitet Mittellinie + Randlinien ab.
//!
//! Aufgeteilt in:
//! - `edges`: Randlinien-Ableitung über lokale Kurven-Normalen

mod edges;

pub use edges::derive_edges;


use crate::core::curve::{CurveSample, RoadCurve, SamplingMode};
use crate::shared::options::{ROAD_HALF_WIDTH, STEP_LENGTH};
use anyhow::bail;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Konstanten für die Ableitung der Polylinien einer Straße.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadGeometry {
    /// Soll-Abstand der Mittellinien-Punkte (Canvas-Pixel)
    pub step_length: f32,
    /// Halbe Straßenbreite = Abstand der Randlinien zur Mittellinie
    pub half_width: f32,
    /// Verteilung der Abtastpunkte
    #[serde(default)]
    pub sampling: SamplingMode,
}

/// Kleinster zulässiger Punktabstand der Mittellinie.
pub const MIN_STEP_LENGTH: f32 = 0.01;

impl RoadGeometry {
    /// Prüft die Konstanten, bevor daraus Straßen gebaut werden.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.step_length.is_finite() && self.step_length >= MIN_STEP_LENGTH) {
            bail!(
                "Punktabstand muss mindestens {} sein, ist {}",
                MIN_STEP_LENGTH,
                self.step_length
            );
        }
        if !(self.half_width.is_finite() && self.half_width > 0.0) {
            bail!("Halbe Straßenbreite muss positiv sein, ist {}", self.half_width);
        }
        Ok(())
    }
}

impl Default for RoadGeometry {
    fn default() -> Self {
        Self {
            step_length: STEP_LENGTH,
            half_width: ROAD_HALF_WIDTH,
            sampling: SamplingMode::default(),
        }
    }
}

/// Ein logisches Straßen-Segment mit abgeleiteter Geometrie.
///
/// Invariante: Nach `update()` passen Kurve, Mittellinie und beide Randlinien
/// zu Start/Ende/Winkeln. Setter markieren das Segment nur als veraltet.
#[derive(Debug, Clone)]
pub struct RoadSegment {
    start: Vec2,
    end: Vec2,
    /// Anfahrtswinkel am Start (Grad)
    angle_start: f32,
    /// Anfahrtswinkel am Ende (Grad)
    angle_end: f32,
    geometry: RoadGeometry,
    curve: Option<RoadCurve>,
    centerline: Vec<CurveSample>,
    left_edge: Vec<Vec2>,
    right_edge: Vec<Vec2>,
    stale: bool,
}

impl RoadSegment {
    /// Erstellt ein Segment und leitet sofort die Geometrie ab.
    ///
    /// Liegt das Ende links vom Start, wird der Start-Winkel um 180° korrigiert,
    /// damit der Kontrollpunkt-Griff auf der richtigen Seite bleibt.
    pub fn new(
        start: Vec2,
        end: Vec2,
        start_heading_deg: f32,
        geometry: RoadGeometry,
    ) -> anyhow::Result<Self> {
        geometry.validate()?;
        if start == end {
            bail!("Straße ohne Länge: Start und Ende bei {:?}", start);
        }

        let angle_start = if end.x < start.x {
            start_heading_deg + 180.0
        } else {
            start_heading_deg
        };

        let mut segment = Self {
            start,
            end,
            angle_start,
            angle_end: 0.0,
            geometry,
            curve: None,
            centerline: Vec::new(),
            left_edge: Vec::new(),
            right_edge: Vec::new(),
            stale: true,
        };
        segment.update()?;
        Ok(segment)
    }

    /// Baut Kurve und alle drei Polylinien neu auf.
    ///
    /// Bei ungültiger Geometrie (z.B. Start == Ende) bleibt ein leeres Segment
    /// ohne Kurve zurück; der Fehler geht an den Aufrufer.
    pub fn update(&mut self) -> anyhow::Result<()> {
        self.stale = false;
        let curve =
            match RoadCurve::from_angles(self.start, self.end, self.angle_start, self.angle_end) {
                Ok(curve) => curve,
                Err(e) => {
                    self.curve = None;
                    self.centerline.clear();
                    self.left_edge.clear();
                    self.right_edge.clear();
                    return Err(e);
                }
            };

        let RoadGeometry {
            step_length,
            half_width,
            sampling,
        } = self.geometry;

        let centerline = curve.sample_with(sampling, step_length);
        self.right_edge = derive_edges(&curve, &centerline, half_width);
        self.left_edge = derive_edges(&curve, &centerline, -half_width);
        self.centerline = centerline;
        self.curve = Some(curve);
        Ok(())
    }

    /// Startpunkt.
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Endpunkt.
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Anfahrtswinkel am Start (Grad, inkl. 180°-Korrektur).
    pub fn angle_start(&self) -> f32 {
        self.angle_start
    }

    /// Anfahrtswinkel am Ende (Grad).
    pub fn angle_end(&self) -> f32 {
        self.angle_end
    }

    pub fn geometry(&self) -> RoadGeometry {
        self.geometry
    }

    /// Aktuelle Kurve (`None` bei degenerierter Geometrie).
    pub fn curve(&self) -> Option<&RoadCurve> {
        self.curve.as_ref()
    }

    /// Mittellinie inkl. Kurvenparameter je Punkt.
    pub fn centerline(&self) -> &[CurveSample] {
        &self.centerline
    }

    /// Mittellinie als reine Positionsliste.
    pub fn centerline_points(&self) -> Vec<Vec2> {
        self.centerline.iter().map(|s| s.position).collect()
    }

    /// Linke Randlinie (negativer Versatz).
    pub fn left_edge(&self) -> &[Vec2] {
        &self.left_edge
    }

    /// Rechte Randlinie (positiver Versatz).
    pub fn right_edge(&self) -> &[Vec2] {
        &self.right_edge
    }

    /// `true` wenn seit der letzten Änderung kein `update()` lief.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn set_start(&mut self, start: Vec2) {
        self.start = start;
        self.stale = true;
    }

    pub fn set_end(&mut self, end: Vec2) {
        self.end = end;
        self.stale = true;
    }

    pub fn set_angle_start(&mut self, angle_deg: f32) {
        self.angle_start = angle_deg;
        self.stale = true;
    }

    pub fn set_angle_end(&mut self, angle_deg: f32) {
        self.angle_end = angle_deg;
        self.stale = true;
    }

    /// Übernimmt neue Konstanten; ungültige werden abgelehnt und ändern nichts.
    pub fn set_geometry(&mut self, geometry: RoadGeometry) -> anyhow::Result<()> {
        geometry.validate()?;
        self.geometry = geometry;
        self.stale = true;
        Ok(())
    }
}

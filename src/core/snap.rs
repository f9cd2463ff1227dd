//! Snap-Punkte (Kreuzungs-Anker) und Fang-Regel.
//!
//! Die Registry wird einmal beim Start gebaut und danach nicht mehr verändert.
//! Fang-Regel: der ERSTE Punkt in Registry-Reihenfolge, dessen Fangradius den
//! Prüfpunkt strikt enthält, gewinnt, nicht der nächstgelegene.

use super::geometry::distance;
use super::road::{RoadGeometry, RoadSegment};
use crate::shared::options::SnapPointOptions;
use anyhow::{bail, Context};
use glam::Vec2;

/// Unveränderlicher Anker mit vorgegebenem Anfahrtswinkel und statischer Beispiel-Straße.
#[derive(Debug, Clone)]
pub struct SnapPoint {
    position: Vec2,
    approach_angle_deg: f32,
    capture_radius: f32,
    road: RoadSegment,
}

impl SnapPoint {
    /// Erstellt einen Snap-Punkt samt vorgerenderter Straße `position → destination`.
    pub fn new(
        position: Vec2,
        approach_angle_deg: f32,
        destination: Vec2,
        capture_radius: f32,
        geometry: RoadGeometry,
    ) -> anyhow::Result<Self> {
        if !(capture_radius.is_finite() && capture_radius > 0.0) {
            bail!("Fangradius muss positiv sein, ist {}", capture_radius);
        }
        let road = RoadSegment::new(position, destination, approach_angle_deg, geometry)
            .with_context(|| format!("Snap-Punkt bei {:?}", position))?;

        Ok(Self {
            position,
            approach_angle_deg,
            capture_radius,
            road,
        })
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Geforderter Anfahrtswinkel (Grad) für Straßen, die hier einrasten.
    pub fn approach_angle_deg(&self) -> f32 {
        self.approach_angle_deg
    }

    pub fn capture_radius(&self) -> f32 {
        self.capture_radius
    }

    /// Statische Beispiel-Straße (nur zur Anzeige).
    pub fn road(&self) -> &RoadSegment {
        &self.road
    }

    /// `true` wenn `point` strikt innerhalb des Fangradius liegt.
    pub fn captures(&self, point: Vec2) -> bool {
        distance(self.position, point) < self.capture_radius
    }
}

/// Feste, geordnete Menge von Snap-Punkten.
#[derive(Debug, Clone, Default)]
pub struct SnapRegistry {
    points: Vec<SnapPoint>,
}

impl SnapRegistry {
    /// Erstellt eine Registry aus bereits gebauten Punkten (Reihenfolge bleibt erhalten).
    pub fn new(points: Vec<SnapPoint>) -> Self {
        Self { points }
    }

    /// Baut die Registry aus der Konfiguration.
    pub fn from_options(
        options: &[SnapPointOptions],
        geometry: RoadGeometry,
    ) -> anyhow::Result<Self> {
        geometry
            .validate()
            .context("Straßen-Geometrie der Snap-Punkte ungültig")?;
        let points = options
            .iter()
            .enumerate()
            .map(|(index, opt)| {
                SnapPoint::new(
                    Vec2::from(opt.position),
                    opt.approach_angle_deg,
                    Vec2::from(opt.destination),
                    opt.capture_radius,
                    geometry,
                )
                .with_context(|| format!("Snap-Punkt #{} ungültig", index))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        log::info!("{} Snap-Punkte registriert", points.len());
        Ok(Self { points })
    }

    /// Fang-Regel: erster Punkt in Registry-Reihenfolge, der `point` einfängt.
    pub fn capture(&self, point: Vec2) -> Option<(usize, &SnapPoint)> {
        self.points
            .iter()
            .enumerate()
            .find(|(_, snap)| snap.captures(point))
    }

    pub fn get(&self, index: usize) -> Option<&SnapPoint> {
        self.points.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SnapPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

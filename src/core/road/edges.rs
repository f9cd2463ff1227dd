//! Randlinien (Bankette) einer Straße aus Mittellinie + Kurven-Normalen.

use crate::core::curve::{CurveSample, RoadCurve};
use crate::core::geometry::{offset_x, rotate_point};
use glam::Vec2;

/// Leitet eine Randlinie im Abstand `lateral_offset` von der Mittellinie ab.
///
/// Pro Abtastpunkt: Kandidat = Mittelpunkt horizontal um `lateral_offset` versetzt,
/// dann um den Mittelpunkt auf den lokalen Normalenwinkel `atan(Steigung) + π/2` gedreht.
/// Positiver Versatz = rechter Rand, negativer = linker Rand.
/// Länge der Ausgabe == Länge der Mittellinie.
pub fn derive_edges(
    curve: &RoadCurve,
    centerline: &[CurveSample],
    lateral_offset: f32,
) -> Vec<Vec2> {
    centerline
        .iter()
        .map(|sample| {
            let angle = curve.normal_angle_at(sample.t);
            let candidate = offset_x(sample.position, lateral_offset);
            rotate_point(sample.position, candidate, angle)
        })
        .collect()
}

//! Rein-mathematische 2D-Hilfsfunktionen ohne Zustand.
//!
//! Koordinatensystem: Canvas-Pixel, Ursprung oben links, +Y zeigt nach unten.

use glam::Vec2;

/// Rotiert `point` um `center` um `angle` (Radiant).
///
/// Positive Winkel drehen im Canvas-System (Y nach unten) im Uhrzeigersinn.
pub fn rotate_point(center: Vec2, point: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let local = point - center;
    Vec2::new(
        local.x * cos - local.y * sin,
        local.x * sin + local.y * cos,
    ) + center
}

/// Euklidischer Abstand zweier Punkte.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Vorzeichenbehafteter Winkel (Radiant, `-π..=π`) von `v1` nach `v2`.
pub fn angle_between_vectors(v1: Vec2, v2: Vec2) -> f32 {
    v1.perp_dot(v2).atan2(v1.dot(v2))
}

/// Verschiebt einen Punkt horizontal um `delta`.
pub fn offset_x(point: Vec2, delta: f32) -> Vec2 {
    Vec2::new(point.x + delta, point.y)
}

/// Prüft, ob beide Koordinaten endlich sind.
pub fn is_finite_point(point: Vec2) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

//! Kubische Bézier-Kurve einer Straße.
//!
//! Konstruktion aus Endpunkten + Anfahrtswinkeln, Auswertung B(t) / B'(t),
//! Bogenlängen-Schätzung und Abtastung zu einer Polylinie.
//! Eine `RoadCurve` ist nach dem Bau unveränderlich; Änderungen erzeugen eine neue Kurve.

use super::geometry::{angle_between_vectors, is_finite_point, rotate_point};
use anyhow::bail;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// Stützstellen für die Bogenlängen-Schätzung (Polylinien-Summe).
const ARC_LENGTH_SAMPLES: usize = 1024;

/// Obergrenze der Abtastpunkte pro Kurve.
pub const MAX_SAMPLES: usize = 65_536;

/// Verteilung der Abtastpunkte entlang der Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    /// `t = i/N`; Punkte verdichten sich, wo |B'(t)| klein ist
    #[default]
    ParameterUniform,
    /// Gleiche Bogenlänge zwischen Punkten (LUT-Invertierung)
    ArcLengthUniform,
}

/// Abtastpunkt der Mittellinie; der Kurvenparameter `t` reist mit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// Kurvenparameter in `[0, 1)`
    pub t: f32,
    /// Position B(t)
    pub position: Vec2,
}

/// Kubische Bézier-Kurve P0..P3 mit vorab geschätzter Bogenlänge.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadCurve {
    control_points: [Vec2; 4],
    length: f32,
}

impl RoadCurve {
    /// Baut die Kurve aus Start, Ende und den Anfahrtswinkeln (Grad).
    ///
    /// P1 = Start um die halbe X-Spanne horizontal versetzt, dann um `start` gedreht.
    /// P2 = Ende um die halbe X-Spanne horizontal versetzt, dann um `end` gedreht.
    pub fn from_angles(
        start: Vec2,
        end: Vec2,
        angle_start_deg: f32,
        angle_end_deg: f32,
    ) -> anyhow::Result<Self> {
        let handle_x = start.x + (end.x - start.x) / 2.0;
        let cp1 = rotate_point(
            start,
            Vec2::new(handle_x, start.y),
            angle_start_deg.to_radians(),
        );
        let cp2 = rotate_point(end, Vec2::new(handle_x, end.y), angle_end_deg.to_radians());
        Self::from_control_points([start, cp1, cp2, end])
    }

    /// Baut die Kurve direkt aus vier Kontrollpunkten.
    pub fn from_control_points(control_points: [Vec2; 4]) -> anyhow::Result<Self> {
        if !control_points.iter().all(|p| is_finite_point(*p)) {
            bail!("Kontrollpunkte müssen endlich sein: {:?}", control_points);
        }
        if control_points[0] == control_points[3] {
            bail!(
                "Start und Ende fallen zusammen ({:?}), Kurvenrichtung undefiniert",
                control_points[0]
            );
        }

        let mut curve = Self {
            control_points,
            length: 0.0,
        };
        let length = approx_length(|t| curve.evaluate(t), ARC_LENGTH_SAMPLES);
        curve.length = length;
        Ok(curve)
    }

    /// Kontrollpunkte [P0, P1, P2, P3].
    pub fn control_points(&self) -> [Vec2; 4] {
        self.control_points
    }

    /// Startpunkt P0.
    pub fn start(&self) -> Vec2 {
        self.control_points[0]
    }

    /// Endpunkt P3.
    pub fn end(&self) -> Vec2 {
        self.control_points[3]
    }

    /// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
    ///
    /// Liefert an den Intervallgrenzen exakt P0 bzw. P3.
    pub fn evaluate(&self, t: f32) -> Vec2 {
        let [p0, p1, p2, p3] = self.control_points;
        if t <= 0.0 {
            return p0;
        }
        if t >= 1.0 {
            return p3;
        }
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
    }

    /// Hodograph B'(t) = 3(1-t)²·(P1-P0) + 6(1-t)t·(P2-P1) + 3t²·(P3-P2)
    pub fn derivative(&self, t: f32) -> Vec2 {
        let [p0, p1, p2, p3] = self.control_points;
        let inv = 1.0 - t;
        3.0 * inv * inv * (p1 - p0) + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
    }

    /// Steigung dy/dt ÷ dx/dt.
    ///
    /// Bei senkrechter Tangente ±∞, bei verschwindender Ableitung NaN.
    /// Aufrufer sollen über `normal_angle_at` gehen statt selbst zu dividieren.
    pub fn gradient_at(&self, t: f32) -> f32 {
        let d = self.derivative(t);
        d.y / d.x
    }

    /// Normalenwinkel `atan(Steigung) + π/2` (Radiant).
    ///
    /// Senkrechte Tangente: atan(±∞) = ±π/2. Spitze (B' = 0): reine Rechtwinkel-Drehung.
    pub fn normal_angle_at(&self, t: f32) -> f32 {
        let gradient = self.gradient_at(t);
        if gradient.is_nan() {
            return FRAC_PI_2;
        }
        gradient.atan() + FRAC_PI_2
    }

    /// Einheitsvektor in Richtung `normal_angle_at(t)`.
    pub fn unit_normal_at(&self, t: f32) -> Vec2 {
        Vec2::from_angle(self.normal_angle_at(t))
    }

    /// Gesamtdrehung der Tangente von P0 nach P3 (Radiant, `-π..=π`).
    ///
    /// Bei verschwindender Start- oder End-Ableitung wird die Sehne
    /// bzw. der Griff verwendet.
    pub fn turn_angle(&self) -> f32 {
        let [p0, p1, p2, p3] = self.control_points;
        let departure = if p1 != p0 { p1 - p0 } else { p2 - p0 };
        let arrival = if p3 != p2 { p3 - p2 } else { p3 - p1 };
        angle_between_vectors(departure, arrival)
    }

    /// Geschätzte Bogenlänge (einmalig beim Bau berechnet).
    pub fn arc_length(&self) -> f32 {
        self.length
    }

    /// Anzahl der Abtastpunkte `floor(Länge / step)`, höchstens `MAX_SAMPLES`.
    /// 0 bei ungültigem `step`.
    pub fn sample_count(&self, step_length: f32) -> usize {
        if !(step_length.is_finite() && step_length > 0.0) {
            return 0;
        }
        let count = (self.length / step_length).floor();
        if count >= MAX_SAMPLES as f32 {
            return MAX_SAMPLES;
        }
        count as usize
    }

    /// Parameter-gleichmäßige Abtastung: N Punkte bei `t = i/N`, `i = 0..N-1`.
    ///
    /// Endpunkt P3 ist nicht enthalten. Bogenlänge < `step` ergibt eine leere Liste.
    pub fn sample(&self, step_length: f32) -> Vec<CurveSample> {
        let count = self.sample_count(step_length);
        (0..count)
            .map(|i| {
                let t = i as f32 / count as f32;
                CurveSample {
                    t,
                    position: self.evaluate(t),
                }
            })
            .collect()
    }

    /// Bogenlängen-gleichmäßige Abtastung mit derselben Punktanzahl wie `sample`.
    ///
    /// Punkt `i` liegt bei Bogenlänge `i/N · L`; `t` wird per LUT invertiert.
    pub fn sample_arc_length_uniform(&self, step_length: f32) -> Vec<CurveSample> {
        let count = self.sample_count(step_length);
        if count == 0 {
            return Vec::new();
        }

        let mut arc_lengths = Vec::with_capacity(ARC_LENGTH_SAMPLES + 1);
        let mut prev = self.start();
        let mut cumulative = 0.0f32;
        arc_lengths.push(0.0f32);
        for i in 1..=ARC_LENGTH_SAMPLES {
            let p = self.evaluate(i as f32 / ARC_LENGTH_SAMPLES as f32);
            cumulative += prev.distance(p);
            arc_lengths.push(cumulative);
            prev = p;
        }

        (0..count)
            .map(|i| {
                let target_length = i as f32 / count as f32 * cumulative;
                let idx = arc_lengths
                    .partition_point(|&len| len < target_length)
                    .clamp(1, ARC_LENGTH_SAMPLES);

                let len_before = arc_lengths[idx - 1];
                let len_after = arc_lengths[idx];
                let frac = if (len_after - len_before).abs() > f32::EPSILON {
                    (target_length - len_before) / (len_after - len_before)
                } else {
                    0.0
                };

                let t = if i == 0 {
                    0.0
                } else {
                    ((idx - 1) as f32 + frac) / ARC_LENGTH_SAMPLES as f32
                };
                CurveSample {
                    t,
                    position: self.evaluate(t),
                }
            })
            .collect()
    }

    /// Abtastung im gewählten Modus.
    pub fn sample_with(&self, mode: SamplingMode, step_length: f32) -> Vec<CurveSample> {
        match mode {
            SamplingMode::ParameterUniform => self.sample(step_length),
            SamplingMode::ArcLengthUniform => self.sample_arc_length_uniform(step_length),
        }
    }
}

/// Approximierte Kurvenlänge über Polylinien-Segmente (f64-Akkumulation).
pub fn approx_length(positions_fn: impl Fn(f32) -> Vec2, samples: usize) -> f32 {
    let mut length = 0.0f64;
    let mut prev = positions_fn(0.0);
    for i in 1..=samples {
        let p = positions_fn(i as f32 / samples as f32);
        length += f64::from(prev.distance(p));
        prev = p;
    }
    length as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    fn straight() -> RoadCurve {
        RoadCurve::from_angles(Vec2::ZERO, Vec2::new(100.0, 0.0), 0.0, 0.0)
            .expect("gerade Kurve erwartet")
    }

    #[test]
    fn from_angles_places_handles_at_half_span() {
        let curve = RoadCurve::from_angles(Vec2::new(0.0, 50.0), Vec2::new(400.0, 300.0), 0.0, 0.0)
            .expect("Kurve erwartet");
        let [p0, p1, p2, p3] = curve.control_points();
        assert_eq!(p0, Vec2::new(0.0, 50.0));
        assert_eq!(p1, Vec2::new(200.0, 50.0));
        assert_eq!(p2, Vec2::new(200.0, 300.0));
        assert_eq!(p3, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn from_angles_rotates_handles_about_their_anchor() {
        let curve = RoadCurve::from_angles(Vec2::ZERO, Vec2::new(100.0, 0.0), 90.0, 180.0)
            .expect("Kurve erwartet");
        let [_, p1, p2, _] = curve.control_points();
        // P1 (50,0) um (0,0) um 90° → (0,50)
        assert_relative_eq!(p1.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(p1.y, 50.0, epsilon = 1e-4);
        // P2 (50,0) um (100,0) um 180° → (150,0)
        assert_relative_eq!(p2.x, 150.0, epsilon = 1e-4);
        assert_relative_eq!(p2.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn evaluate_hits_endpoints_exactly() {
        let curve = RoadCurve::from_control_points([
            Vec2::new(0.3, 0.7),
            Vec2::new(3.0, 10.0),
            Vec2::new(7.0, 10.0),
            Vec2::new(10.1, 0.9),
        ])
        .expect("Kurve erwartet");
        assert_eq!(curve.evaluate(0.0), Vec2::new(0.3, 0.7));
        assert_eq!(curve.evaluate(1.0), Vec2::new(10.1, 0.9));
    }

    #[test]
    fn evaluate_symmetric_s_curve_midpoint() {
        let curve = RoadCurve::from_control_points([
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ])
        .expect("Kurve erwartet");
        // B(0.5) = 0.125*P0 + 0.375*P1 + 0.375*P2 + 0.125*P3
        assert!((curve.evaluate(0.5) - Vec2::new(5.0, 5.0)).length() < 1e-4);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let curve =
            RoadCurve::from_angles(Vec2::new(0.0, 50.0), Vec2::new(400.0, 300.0), 30.0, -45.0)
                .expect("Kurve erwartet");
        let h = 1e-3;
        for &t in &[0.1f32, 0.35, 0.5, 0.8] {
            let numeric = (curve.evaluate(t + h) - curve.evaluate(t - h)) / (2.0 * h);
            let analytic = curve.derivative(t);
            assert!(
                (numeric - analytic).length() < 0.5,
                "t={t}: numerisch {numeric:?} vs analytisch {analytic:?}"
            );
        }
    }

    #[test]
    fn gradient_of_vertical_tangent_is_infinite() {
        // Start-Tangente zeigt senkrecht nach unten
        let curve = RoadCurve::from_control_points([
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 30.0),
            Vec2::new(60.0, 30.0),
            Vec2::new(60.0, 60.0),
        ])
        .expect("Kurve erwartet");
        assert!(curve.gradient_at(0.0).is_infinite());
        // atan(∞) + π/2 = π → reine horizontale Spiegelung, kein NaN
        assert_relative_eq!(curve.normal_angle_at(0.0), PI, epsilon = 1e-6);
    }

    #[test]
    fn normal_angle_of_cusp_falls_back_to_right_angle() {
        // P0 == P1 → B'(0) = 0
        let curve = RoadCurve::from_control_points([
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 5.0),
            Vec2::new(20.0, 0.0),
        ])
        .expect("Kurve erwartet");
        assert!(curve.gradient_at(0.0).is_nan());
        assert_relative_eq!(curve.normal_angle_at(0.0), std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn coincident_endpoints_are_rejected() {
        let result = RoadCurve::from_angles(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), 0.0, 0.0);
        assert!(result.is_err());
    }

    #[test]
    fn non_finite_input_is_rejected() {
        assert!(RoadCurve::from_angles(Vec2::ZERO, Vec2::new(f32::NAN, 1.0), 0.0, 0.0).is_err());
        assert!(
            RoadCurve::from_angles(Vec2::ZERO, Vec2::new(10.0, 1.0), f32::INFINITY, 0.0).is_err()
        );
    }

    #[test]
    fn arc_length_of_straight_curve() {
        assert_relative_eq!(straight().arc_length(), 100.0, epsilon = 1e-3);
    }

    #[test]
    fn arc_length_is_at_least_chord() {
        let curve = RoadCurve::from_angles(Vec2::new(0.0, 50.0), Vec2::new(400.0, 300.0), 0.0, 0.0)
            .expect("Kurve erwartet");
        let chord = Vec2::new(0.0, 50.0).distance(Vec2::new(400.0, 300.0));
        assert!(curve.arc_length() >= chord);
    }

    #[test]
    fn sample_uses_floor_of_length_over_step() {
        let curve = straight();
        let samples = curve.sample(10.0);
        assert!(samples.len() == 9 || samples.len() == 10);
        let n = samples.len() as f32;
        for (i, sample) in samples.iter().enumerate() {
            assert_eq!(sample.t, i as f32 / n);
            assert_eq!(sample.position, curve.evaluate(sample.t));
        }
    }

    #[test]
    fn sample_is_empty_when_step_exceeds_length() {
        assert!(straight().sample(250.0).is_empty());
    }

    #[test]
    fn sample_is_empty_for_invalid_step() {
        let curve = straight();
        assert!(curve.sample(0.0).is_empty());
        assert!(curve.sample(-1.0).is_empty());
        assert!(curve.sample(f32::NAN).is_empty());
    }

    #[test]
    fn arc_length_uniform_sampling_has_even_spacing() {
        let curve = RoadCurve::from_angles(Vec2::new(0.0, 50.0), Vec2::new(400.0, 300.0), 60.0, 0.0)
            .expect("Kurve erwartet");
        let samples = curve.sample_arc_length_uniform(5.0);
        assert_eq!(samples.len(), curve.sample(5.0).len());
        assert_eq!(samples[0].position, curve.start());

        let spacing = curve.arc_length() / samples.len() as f32;
        for pair in samples.windows(2) {
            let dist = pair[0].position.distance(pair[1].position);
            assert!(
                (dist - spacing).abs() < 0.1,
                "Abstand {dist:.3} weicht von {spacing:.3} ab"
            );
            assert!(pair[1].t > pair[0].t);
        }
    }

    #[test]
    fn sample_count_is_capped_for_tiny_steps() {
        let curve = straight();
        assert_eq!(curve.sample_count(1e-30), MAX_SAMPLES);
        assert_eq!(curve.sample(1e-30).len(), MAX_SAMPLES);
        assert_eq!(curve.sample_count(f32::MIN_POSITIVE), MAX_SAMPLES);
    }

    #[test]
    fn turn_angle_of_straight_and_quarter_turn() {
        assert_relative_eq!(straight().turn_angle(), 0.0, epsilon = 1e-6);

        // Abfahrt nach +X, Ankunft senkrecht nach unten (+Y)
        let curve = RoadCurve::from_angles(Vec2::ZERO, Vec2::new(200.0, 0.0), 0.0, 90.0)
            .expect("Kurve erwartet");
        assert_relative_eq!(curve.turn_angle(), FRAC_PI_2, epsilon = 1e-5);
    }

    #[test]
    fn sample_with_dispatches_on_mode() {
        let curve = straight();
        assert_eq!(
            curve.sample_with(SamplingMode::ParameterUniform, 7.0),
            curve.sample(7.0)
        );
        assert_eq!(
            curve.sample_with(SamplingMode::ArcLengthUniform, 7.0),
            curve.sample_arc_length_uniform(7.0)
        );
    }
}

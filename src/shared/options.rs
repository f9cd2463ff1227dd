//! Zentrale Konfiguration für den Road-Sketch.
//!
//! `SketchOptions` enthält alle beim Start einlesbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{RoadGeometry, SamplingMode};
use serde::{Deserialize, Serialize};

// ── Canvas ──────────────────────────────────────────────────────────

/// Canvas-Größe in Pixeln [Breite, Höhe].
pub const CANVAS_SIZE: [f32; 2] = [600.0, 600.0];

// ── Straßen-Geometrie ───────────────────────────────────────────────

/// Soll-Abstand der Mittellinien-Punkte in Pixeln.
pub const STEP_LENGTH: f32 = 1.0;
/// Halbe Straßenbreite (Abstand Randlinie ↔ Mittellinie) in Pixeln.
pub const ROAD_HALF_WIDTH: f32 = 20.0;

// ── Live-Straße ─────────────────────────────────────────────────────

/// Fester Startpunkt der Live-Straße.
pub const LIVE_ROAD_START: [f32; 2] = [0.0, 50.0];
/// Anfangs-Endpunkt der Live-Straße.
pub const LIVE_ROAD_END: [f32; 2] = [400.0, 300.0];
/// Schrittweite der Tastatur-Verschiebung des Endpunkts in Pixeln.
pub const NUDGE_STEP: f32 = 10.0;

// ── Snap ────────────────────────────────────────────────────────────

/// Fangradius der Snap-Punkte in Pixeln.
pub const SNAP_CAPTURE_RADIUS: f32 = 30.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Periode des Strichmusters der Mittellinie (in Segmenten).
pub const DASH_PERIOD: usize = 40;
/// Segment `i` wird gezeichnet, wenn `i % DASH_PERIOD <= DASH_ON`.
pub const DASH_ON: usize = 10;
/// Hintergrundfarbe (RGBA: Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Live-Straße (RGBA: Weiß).
pub const ROAD_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der statischen Snap-Straßen (RGBA: Hellgrau).
pub const SNAP_ROAD_COLOR: [f32; 4] = [0.7, 0.7, 0.7, 1.0];
/// Farbe der Fangkreise (RGBA: Blau).
pub const SNAP_MARKER_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Farbe des aktiven Fangkreises (RGBA: Orange).
pub const SNAP_ACTIVE_COLOR: [f32; 4] = [1.0, 0.6, 0.1, 1.0];
/// Farbe der Debug-Normalen (RGBA: Magenta).
pub const DEBUG_NORMAL_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Jeder wievielte Mittellinien-Punkt im Debug-Overlay eine Normale zeigt.
pub const DEBUG_NORMAL_STRIDE: usize = 25;

/// Darstellung der Randlinien.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStyle {
    /// Einzelne Punkte je Abtastwert
    #[default]
    Points,
    /// Offene Polylinie
    Lines,
}

/// Konfiguration eines Snap-Punkts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapPointOptions {
    /// Anker-Position
    pub position: [f32; 2],
    /// Geforderter Anfahrtswinkel in Grad
    pub approach_angle_deg: f32,
    /// Ziel der statischen Beispiel-Straße
    pub destination: [f32; 2],
    /// Fangradius in Pixeln
    #[serde(default = "default_capture_radius")]
    pub capture_radius: f32,
}

/// Die vier Kreuzungen der ursprünglichen Skizze, in Fang-Reihenfolge.
pub fn default_snap_points() -> Vec<SnapPointOptions> {
    [
        ([500.0, 500.0], 90.0, [1000.0, 600.0]),
        ([500.0, 300.0], 0.0, [600.0, 300.0]),
        ([500.0, 100.0], 320.0, [1000.0, 300.0]),
        ([300.0, 500.0], 180.0, [0.0, 1300.0]),
    ]
    .into_iter()
    .map(|(position, approach_angle_deg, destination)| SnapPointOptions {
        position,
        approach_angle_deg,
        destination,
        capture_radius: SNAP_CAPTURE_RADIUS,
    })
    .collect()
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start einlesbaren Optionen.
/// Wird als `road_sketch.toml` neben der Binary gesucht.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Canvas-Größe in Pixeln
    pub canvas_size: [f32; 2],

    // ── Geometrie ───────────────────────────────────────────────
    /// Soll-Abstand der Mittellinien-Punkte
    pub step_length: f32,
    /// Halbe Straßenbreite
    pub road_half_width: f32,
    /// Abtastverteilung der Mittellinie
    #[serde(default)]
    pub sampling: SamplingMode,

    // ── Live-Straße ─────────────────────────────────────────────
    /// Fester Startpunkt
    pub live_road_start: [f32; 2],
    /// Anfangs-Endpunkt
    pub live_road_end: [f32; 2],
    /// Abfahrtswinkel am Start in Grad
    #[serde(default)]
    pub live_road_start_heading_deg: f32,
    /// Schrittweite der Tastatur-Verschiebung
    #[serde(default = "default_nudge_step")]
    pub nudge_step: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Strichperiode der Mittellinie
    pub dash_period: usize,
    /// Gezeichnete Segmente pro Periode
    pub dash_on: usize,
    /// Randlinien als Punkte oder Linien
    #[serde(default)]
    pub edge_style: EdgeStyle,
    /// Hintergrundfarbe
    pub background_color: [f32; 4],
    /// Farbe der Live-Straße
    pub road_color: [f32; 4],
    /// Farbe der Snap-Straßen
    pub snap_road_color: [f32; 4],
    /// Farbe der Fangkreise
    pub snap_marker_color: [f32; 4],
    /// Farbe des aktiven Fangkreises
    pub snap_active_color: [f32; 4],
    /// Farbe der Debug-Normalen
    #[serde(default = "default_debug_normal_color")]
    pub debug_normal_color: [f32; 4],
    /// Abstand der Debug-Normalen in Mittellinien-Punkten
    #[serde(default = "default_debug_normal_stride")]
    pub debug_normal_stride: usize,

    // ── Snap ────────────────────────────────────────────────────
    /// Snap-Punkte in Fang-Reihenfolge
    #[serde(default = "default_snap_points")]
    pub snap_points: Vec<SnapPointOptions>,
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,

            step_length: STEP_LENGTH,
            road_half_width: ROAD_HALF_WIDTH,
            sampling: SamplingMode::default(),

            live_road_start: LIVE_ROAD_START,
            live_road_end: LIVE_ROAD_END,
            live_road_start_heading_deg: 0.0,
            nudge_step: NUDGE_STEP,

            dash_period: DASH_PERIOD,
            dash_on: DASH_ON,
            edge_style: EdgeStyle::default(),
            background_color: BACKGROUND_COLOR,
            road_color: ROAD_COLOR,
            snap_road_color: SNAP_ROAD_COLOR,
            snap_marker_color: SNAP_MARKER_COLOR,
            snap_active_color: SNAP_ACTIVE_COLOR,
            debug_normal_color: DEBUG_NORMAL_COLOR,
            debug_normal_stride: DEBUG_NORMAL_STRIDE,

            snap_points: default_snap_points(),
        }
    }
}

/// Serde-Default für `capture_radius` einzelner Snap-Punkte.
fn default_capture_radius() -> f32 {
    SNAP_CAPTURE_RADIUS
}

/// Serde-Default für `nudge_step`.
fn default_nudge_step() -> f32 {
    NUDGE_STEP
}

fn default_debug_normal_color() -> [f32; 4] {
    DEBUG_NORMAL_COLOR
}

fn default_debug_normal_stride() -> usize {
    DEBUG_NORMAL_STRIDE
}

impl SketchOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("road_sketch"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("road_sketch.toml")
    }

    /// Straßen-Geometrie aus den Optionen.
    pub fn road_geometry(&self) -> RoadGeometry {
        RoadGeometry {
            step_length: self.step_length,
            half_width: self.road_half_width,
            sampling: self.sampling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_keeps_snap_order() {
        let options = SketchOptions::default();
        let text = toml::to_string_pretty(&options).expect("Serialisierung erwartet");
        let parsed: SketchOptions = toml::from_str(&text).expect("Parsen erwartet");
        assert_eq!(parsed.snap_points, options.snap_points);
        assert_eq!(parsed.road_geometry(), options.road_geometry());
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let text = r#"
            canvas_size = [800.0, 600.0]
            step_length = 2.0
            road_half_width = 15.0
            live_road_start = [0.0, 50.0]
            live_road_end = [400.0, 300.0]
            dash_period = 40
            dash_on = 10
            background_color = [0.0, 0.0, 0.0, 1.0]
            road_color = [1.0, 1.0, 1.0, 1.0]
            snap_road_color = [0.7, 0.7, 0.7, 1.0]
            snap_marker_color = [0.0, 0.0, 1.0, 1.0]
            snap_active_color = [1.0, 0.6, 0.1, 1.0]
        "#;
        let parsed: SketchOptions = toml::from_str(text).expect("Parsen erwartet");
        assert_eq!(parsed.sampling, SamplingMode::ParameterUniform);
        assert_eq!(parsed.edge_style, EdgeStyle::Points);
        assert_eq!(parsed.nudge_step, NUDGE_STEP);
        assert_eq!(parsed.snap_points, default_snap_points());
        assert_eq!(parsed.road_geometry().half_width, 15.0);
    }

    #[test]
    fn snap_point_radius_defaults_when_omitted() {
        let text = r#"
            position = [10.0, 20.0]
            approach_angle_deg = 45.0
            destination = [200.0, 20.0]
        "#;
        let parsed: SnapPointOptions = toml::from_str(text).expect("Parsen erwartet");
        assert_eq!(parsed.capture_radius, SNAP_CAPTURE_RADIUS);
    }

    #[test]
    fn save_then_load_restores_options() {
        let path = std::env::temp_dir().join(format!(
            "road_sketch_options_{}.toml",
            std::process::id()
        ));
        let mut options = SketchOptions::default();
        options.step_length = 2.5;
        options.sampling = SamplingMode::ArcLengthUniform;
        options.edge_style = EdgeStyle::Lines;
        options.snap_points.truncate(2);

        options.save_to_file(&path).expect("Speichern erwartet");
        let loaded = SketchOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.road_geometry(), options.road_geometry());
        assert_eq!(loaded.edge_style, EdgeStyle::Lines);
        assert_eq!(loaded.snap_points, options.snap_points);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let options = SketchOptions::load_from_file(std::path::Path::new(
            "/nonexistent/road_sketch_missing.toml",
        ));
        assert_eq!(options.canvas_size, CANVAS_SIZE);
        assert_eq!(options.snap_points.len(), 4);
    }
}

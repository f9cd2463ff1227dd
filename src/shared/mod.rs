//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::{EdgeStyle, SketchOptions, SnapPointOptions};
pub use options::{NUDGE_STEP, ROAD_HALF_WIDTH, SNAP_CAPTURE_RADIUS, STEP_LENGTH};
pub use render_scene::{NormalMarker, RenderScene, RoadPolylines, SnapMarker};

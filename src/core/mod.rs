//! Core-Domänentypen: Kurve, Straßen-Segment, Snap-Punkte.

pub mod curve;
pub mod geometry;
/// Straßen-Segmente mit abgeleiteter Mittellinie und Randlinien
pub mod road;
pub mod snap;

pub use curve::{CurveSample, RoadCurve, SamplingMode};
pub use road::{derive_edges, RoadGeometry, RoadSegment};
pub use snap::{SnapPoint, SnapRegistry};

//! Road Sketch Library.
//! Kurven-, Straßen- und Snap-Logik als Library exportiert für Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, Session, SessionMode};
pub use core::{CurveSample, RoadCurve, RoadGeometry, RoadSegment, SamplingMode};
pub use core::{SnapPoint, SnapRegistry};
pub use shared::{EdgeStyle, RenderScene, SketchOptions};

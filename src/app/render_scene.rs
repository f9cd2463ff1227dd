//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::RoadSegment;
use crate::shared::{NormalMarker, RenderScene, RoadPolylines, SnapMarker};

/// Polylinien einer Straße für die Zeichen-Schicht.
fn polylines(road: &RoadSegment) -> RoadPolylines {
    RoadPolylines {
        centerline: road.centerline_points(),
        left_edge: road.left_edge().to_vec(),
        right_edge: road.right_edge().to_vec(),
    }
}

/// Normalen-Marker an jedem `stride`-ten Mittellinien-Punkt.
fn debug_normals(road: &RoadSegment, stride: usize) -> Vec<NormalMarker> {
    let Some(curve) = road.curve() else {
        return Vec::new();
    };
    let half_width = road.geometry().half_width;

    road.centerline()
        .iter()
        .step_by(stride.max(1))
        .map(|sample| NormalMarker {
            origin: sample.position,
            tip: sample.position + curve.unit_normal_at(sample.t) * half_width,
        })
        .collect()
}

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let session = &state.session;
    let active = session.active_snap();

    let static_roads = session.registry().iter().map(|snap| polylines(snap.road())).collect();

    let snap_markers = session
        .registry()
        .iter()
        .enumerate()
        .map(|(index, snap)| SnapMarker {
            position: snap.position(),
            capture_radius: snap.capture_radius(),
            approach_angle_deg: snap.approach_angle_deg(),
            active: active == Some(index),
        })
        .collect();

    let debug_normals = if state.show_debug_overlay {
        debug_normals(session.live_road(), state.options.debug_normal_stride)
    } else {
        Vec::new()
    };

    RenderScene {
        static_roads,
        live_road: polylines(session.live_road()),
        snap_markers,
        debug_normals,
        pointer: session.pointer(),
        dragging: session.is_dragging(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::shared::SketchOptions;
    use glam::Vec2;

    fn state() -> AppState {
        AppState::new(SketchOptions::default()).expect("AppState erwartet")
    }

    #[test]
    fn build_mirrors_live_road_and_snap_roads() {
        let state = state();
        let scene = build(&state);

        assert_eq!(scene.static_roads.len(), 4);
        assert_eq!(scene.snap_markers.len(), 4);
        assert!(scene.has_live_road());
        assert_eq!(
            scene.live_road.centerline.len(),
            state.session.live_road().centerline().len()
        );
        assert_eq!(scene.live_road.left_edge.len(), scene.live_road.centerline.len());
        assert!(scene.snap_markers.iter().all(|m| !m.active));
        assert!(scene.debug_normals.is_empty());
    }

    #[test]
    fn build_marks_active_snap_point() {
        let mut state = state();
        state.session.request_toggle();
        state.session.set_pointer(Vec2::new(500.0, 300.0));
        state.session.advance_frame();

        let scene = build(&state);
        let active: Vec<bool> = scene.snap_markers.iter().map(|m| m.active).collect();
        assert_eq!(active, vec![false, true, false, false]);
        assert!(scene.dragging);
    }

    #[test]
    fn debug_normals_have_half_width_length() {
        let mut state = state();
        state.show_debug_overlay = true;

        let scene = build(&state);
        assert!(!scene.debug_normals.is_empty());
        for marker in &scene.debug_normals {
            assert!((marker.tip.distance(marker.origin) - 20.0).abs() < 1e-3);
        }
    }
}

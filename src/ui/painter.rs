//! Zeichnet eine `RenderScene` auf eine `Canvas`.
//!
//! Reihenfolge: Hintergrund, statische Snap-Straßen, Fangkreise, Live-Straße,
//! Debug-Normalen, Zeiger.

use super::canvas::Canvas;
use crate::shared::{EdgeStyle, RenderScene, RoadPolylines, SketchOptions};
use glam::Vec2;

const LINE_WIDTH: f32 = 1.0;
const EDGE_POINT_RADIUS: f32 = 1.0;
const POINTER_RADIUS: f32 = 3.0;

/// Zeichnet einen kompletten Frame.
pub fn paint_scene(canvas: &mut impl Canvas, scene: &RenderScene) {
    let options = &scene.options;
    canvas.clear(options.background_color);

    for road in &scene.static_roads {
        paint_road(canvas, road, options.snap_road_color, options);
    }

    for marker in &scene.snap_markers {
        let color = if marker.active {
            options.snap_active_color
        } else {
            options.snap_marker_color
        };
        canvas.draw_circle(marker.position, marker.capture_radius, color, LINE_WIDTH);

        // Anfahrtsrichtung als kurzer Strich
        let heading = Vec2::from_angle(marker.approach_angle_deg.to_radians());
        canvas.draw_line(
            marker.position,
            marker.position + heading * marker.capture_radius,
            color,
            LINE_WIDTH,
        );
    }

    if scene.has_live_road() {
        paint_road(canvas, &scene.live_road, options.road_color, options);
    }

    for normal in &scene.debug_normals {
        canvas.draw_line(normal.origin, normal.tip, options.debug_normal_color, LINE_WIDTH);
    }

    if scene.dragging {
        canvas.draw_point(scene.pointer, options.road_color, POINTER_RADIUS);
    }
}

/// Gestrichelte Mittellinie plus Randlinien im gewählten `EdgeStyle`.
fn paint_road(
    canvas: &mut impl Canvas,
    road: &RoadPolylines,
    color: [f32; 4],
    options: &SketchOptions,
) {
    for (i, pair) in road.centerline.windows(2).enumerate() {
        if is_dash_on(i, options.dash_period, options.dash_on) {
            canvas.draw_line(pair[0], pair[1], color, LINE_WIDTH);
        }
    }

    for edge in [&road.left_edge, &road.right_edge] {
        match options.edge_style {
            EdgeStyle::Points => {
                for &point in edge.iter() {
                    canvas.draw_point(point, color, EDGE_POINT_RADIUS);
                }
            }
            EdgeStyle::Lines => canvas.draw_polygon(edge, false, color, LINE_WIDTH),
        }
    }
}

/// Segment `i` der Mittellinie wird gezeichnet, wenn `i % period <= on`.
/// Periode 0 bedeutet durchgezogen.
pub fn is_dash_on(i: usize, period: usize, on: usize) -> bool {
    period == 0 || i % period <= on
}

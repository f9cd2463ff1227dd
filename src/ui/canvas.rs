//! Zeichenflächen-Abstraktion zwischen Szene und egui.
//!
//! Der Szenen-Zeichner kennt nur `Canvas`; `EguiCanvas` bildet die Primitive
//! auf einen `egui::Painter` ab, Tests verwenden eine aufzeichnende Variante.

use glam::Vec2;

/// Sofort-Modus-Primitive einer Zeichenfläche (Canvas-Koordinaten, y nach unten).
pub trait Canvas {
    /// Fläche vollständig mit `color` füllen.
    fn clear(&mut self, color: [f32; 4]);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: [f32; 4], width: f32);
    fn draw_point(&mut self, position: Vec2, color: [f32; 4], radius: f32);
    /// Polylinie durch `points`; `closed` verbindet den letzten mit dem ersten Punkt.
    fn draw_polygon(&mut self, points: &[Vec2], closed: bool, color: [f32; 4], width: f32);
    /// Kreisumriss.
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4], width: f32);
}

/// Wandelt eine RGBA-Farbe (0.0–1.0) in `egui::Color32`.
pub fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

/// `Canvas` über einem `egui::Painter`, Ursprung in der linken oberen Ecke von `rect`.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, point: Vec2) -> egui::Pos2 {
        egui::pos2(self.rect.min.x + point.x, self.rect.min.y + point.y)
    }
}

impl Canvas for EguiCanvas<'_> {
    fn clear(&mut self, color: [f32; 4]) {
        self.painter.rect_filled(self.rect, 0.0, to_color32(color));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: [f32; 4], width: f32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(width, to_color32(color)),
        );
    }

    fn draw_point(&mut self, position: Vec2, color: [f32; 4], radius: f32) {
        self.painter
            .circle_filled(self.to_screen(position), radius, to_color32(color));
    }

    fn draw_polygon(&mut self, points: &[Vec2], closed: bool, color: [f32; 4], width: f32) {
        if points.len() < 2 {
            return;
        }
        let screen: Vec<egui::Pos2> = points.iter().map(|&p| self.to_screen(p)).collect();
        let stroke = egui::Stroke::new(width, to_color32(color));
        let shape = if closed {
            egui::Shape::closed_line(screen, stroke)
        } else {
            egui::Shape::line(screen, stroke)
        };
        self.painter.add(shape);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4], width: f32) {
        self.painter.circle_stroke(
            self.to_screen(center),
            radius,
            egui::Stroke::new(width, to_color32(color)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::to_color32;

    #[test]
    fn color_conversion_clamps_and_rounds() {
        assert_eq!(to_color32([1.0, 0.0, 0.0, 1.0]), egui::Color32::RED);
        assert_eq!(
            to_color32([2.0, -1.0, 0.5, 1.0]),
            egui::Color32::from_rgb(255, 0, 128)
        );
    }
}

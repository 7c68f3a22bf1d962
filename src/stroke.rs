use egui::{Color32, Painter, Pos2, Shape};

/// A freehand marker stroke: an ordered list of points with a fixed
/// thickness and color.
///
/// Points are only ever appended, and only while the stroke is the
/// in-progress command; once the pointer lifts the stroke is never
/// mutated again.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

impl Stroke {
    /// Create a new stroke seeded with its start point.
    pub fn new(start: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            points: vec![start],
            color,
            thickness,
        }
    }

    /// Append a point to the stroke. Always legal, regardless of how many
    /// points have been recorded so far.
    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Draw the stroke as a poly-line with round caps.
    ///
    /// egui paths have butt caps, so the caps are synthesized with endpoint
    /// dots of radius thickness/2. That also makes a single-point stroke
    /// render as a dot instead of vanishing.
    pub fn draw(&self, painter: &Painter) {
        let (Some(&first), Some(&last)) = (self.points.first(), self.points.last()) else {
            return;
        };
        let cap_radius = self.thickness * 0.5;
        painter.circle_filled(first, cap_radius, self.color);
        if self.points.len() >= 2 {
            painter.add(Shape::line(
                self.points.clone(),
                egui::Stroke::new(self.thickness, self.color),
            ));
            painter.circle_filled(last, cap_radius, self.color);
        }
    }
}

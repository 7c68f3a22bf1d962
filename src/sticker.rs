use egui::{Align2, Color32, FontId, Painter, Pos2};

/// An emoji sticker: a single glyph drawn centered at a position.
///
/// The glyph and font size are fixed at creation; only the position varies.
/// Dragging overwrites the position rather than accumulating a path, so the
/// sticker always represents its current placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    position: Pos2,
    glyph: char,
    size: f32,
}

impl Sticker {
    pub fn new(position: Pos2, glyph: char, size: f32) -> Self {
        Self {
            position,
            glyph,
            size,
        }
    }

    /// Move the sticker to a new position, discarding the old one.
    pub fn move_to(&mut self, position: Pos2) {
        self.position = position;
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn draw(&self, painter: &Painter) {
        painter.text(
            self.position,
            Align2::CENTER_CENTER,
            self.glyph,
            FontId::proportional(self.size),
            Color32::BLACK,
        );
    }
}

use egui::{Painter, Pos2};

use crate::sticker::Sticker;
use crate::stroke::Stroke;

/// A committed (or in-progress) mark on the canvas.
///
/// Strokes and stickers share the same lifecycle -- created on pointer-down,
/// dragged while the pointer is held, frozen on pointer-up -- but respond to
/// a drag differently: a stroke appends to its path, a sticker is picked up
/// and repositioned. An enum keeps the match arms exhaustive when a new
/// command kind is added.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl DrawCommand {
    /// Apply a pointer-drag at `pos` to this command.
    pub fn drag(&mut self, pos: Pos2) {
        match self {
            DrawCommand::Stroke(stroke) => stroke.add_point(pos),
            DrawCommand::Sticker(sticker) => sticker.move_to(pos),
        }
    }

    /// Paint the command onto the surface.
    pub fn draw(&self, painter: &Painter) {
        match self {
            DrawCommand::Stroke(stroke) => stroke.draw(painter),
            DrawCommand::Sticker(sticker) => sticker.draw(painter),
        }
    }
}

use egui::{Align2, Color32, FontId, Painter, Pos2};

/// Opacity applied to preview ghosts so they read as "not committed yet".
const GHOST_OPACITY: f32 = 0.4;

/// The transient ghost that follows the cursor while no button is held.
///
/// A preview never enters the display list and never participates in
/// undo/redo. It is rebuilt from scratch whenever the active tool changes,
/// so the ghost reflects the new tool on the very next paint.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPreview {
    /// Translucent circle matching the marker's footprint.
    Marker {
        radius: f32,
        color: Color32,
        position: Option<Pos2>,
    },
    /// Translucent rendition of the selected emoji.
    Sticker {
        glyph: char,
        size: f32,
        position: Option<Pos2>,
    },
}

impl ToolPreview {
    pub fn marker(thickness: f32, color: Color32) -> Self {
        ToolPreview::Marker {
            // Hairline markers still get a visible ghost.
            radius: (thickness * 0.5).max(1.0),
            color,
            position: None,
        }
    }

    pub fn sticker(glyph: char, size: f32) -> Self {
        ToolPreview::Sticker {
            glyph,
            size,
            position: None,
        }
    }

    /// Record the latest idle cursor position.
    pub fn move_to(&mut self, pos: Pos2) {
        match self {
            ToolPreview::Marker { position, .. } | ToolPreview::Sticker { position, .. } => {
                *position = Some(pos);
            }
        }
    }

    pub fn position(&self) -> Option<Pos2> {
        match self {
            ToolPreview::Marker { position, .. } | ToolPreview::Sticker { position, .. } => {
                *position
            }
        }
    }

    /// Paint the ghost. Draws nothing until a cursor position has been
    /// recorded.
    pub fn draw(&self, painter: &Painter) {
        match *self {
            ToolPreview::Marker {
                radius,
                color,
                position: Some(pos),
            } => {
                painter.circle_filled(pos, radius, color.gamma_multiply(GHOST_OPACITY));
            }
            ToolPreview::Sticker {
                glyph,
                size,
                position: Some(pos),
            } => {
                painter.text(
                    pos,
                    Align2::CENTER_CENTER,
                    glyph,
                    FontId::proportional(size),
                    Color32::BLACK.gamma_multiply(GHOST_OPACITY),
                );
            }
            _ => {}
        }
    }
}

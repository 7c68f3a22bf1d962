use egui::{Color32, Painter, Rect};

use crate::state::SketchState;

/// Repaints the canvas from scratch on every frame: background, then every
/// committed command in display-list order, then the cursor ghost when idle.
///
/// Full clear + full repaint is deliberate; at sketchpad scale an O(n) walk
/// of the display list per frame is well within budget.
#[derive(Debug)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, painter: &Painter, rect: Rect, state: &SketchState) {
        painter.rect_filled(rect, 0.0, self.background);

        for command in state.document().commands() {
            command.draw(painter);
        }

        if let Some(preview) = state.visible_preview() {
            preview.draw(painter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{LayerId, Pos2, RawInput, Vec2};

    use crate::input::InputEvent;

    #[test]
    fn render_smoke() {
        let mut state = SketchState::new();
        state.handle_event(InputEvent::PointerDown {
            pos: Pos2::new(10.0, 10.0),
        });
        state.handle_event(InputEvent::PointerMove {
            pos: Pos2::new(20.0, 20.0),
        });
        state.handle_event(InputEvent::PointerUp {
            pos: Pos2::new(20.0, 20.0),
        });

        let renderer = Renderer::new();
        let ctx = egui::Context::default();
        // Fonts only exist inside a frame, and sticker/preview drawing needs
        // them.
        ctx.run(RawInput::default(), |ctx| {
            let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(100.0, 100.0));
            let painter = Painter::new(ctx.clone(), LayerId::background(), rect);
            renderer.render(&painter, rect, &state);
        });
    }
}

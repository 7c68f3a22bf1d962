use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events in canvas coordinates, as the sketch state machine sees
/// them. Raw egui input (hover positions, button edges, window focus) is
/// folded down to these four by [`InputHandler`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed inside the canvas.
    PointerDown { pos: Pos2 },
    /// Pointer moved while inside the canvas.
    PointerMove { pos: Pos2 },
    /// Primary button released.
    PointerUp { pos: Pos2 },
    /// Pointer left the canvas (or the window entirely).
    PointerLeave,
}

/// Converts raw egui input into [`InputEvent`]s relative to the canvas rect.
///
/// Tracks the previous hover position so that crossing the canvas boundary
/// is seen as a leave event, not just losing the window.
pub struct InputHandler {
    last_pos_in_canvas: Option<Pos2>,
    canvas_rect: Rect,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self {
            last_pos_in_canvas: None,
            canvas_rect: Rect::NOTHING,
        }
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pos_in_canvas: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. after a window resize).
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Process this frame's input and produce the ordered pointer events.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos().filter(|p| self.canvas_rect.contains(*p));

            match (self.last_pos_in_canvas, hover) {
                (_, Some(pos)) => {
                    // A press is ordered before the move it arrived with so
                    // the drag starts from the press position.
                    if input.pointer.button_pressed(PointerButton::Primary) {
                        events.push(InputEvent::PointerDown { pos });
                    }
                    if self.last_pos_in_canvas != Some(pos) {
                        events.push(InputEvent::PointerMove { pos });
                    }
                    if input.pointer.button_released(PointerButton::Primary) {
                        events.push(InputEvent::PointerUp { pos });
                    }
                }
                (Some(_), None) => {
                    events.push(InputEvent::PointerLeave);
                }
                (None, None) => {}
            }

            self.last_pos_in_canvas = hover;
        });

        events
    }
}

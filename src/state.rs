use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::input::InputEvent;
use crate::preview::ToolPreview;
use crate::tool::Tool;

/// Whether a pointer button is currently held on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    /// A command is in progress; it lives at the tail of the display list.
    Drawing,
}

/// The whole sketch session: document, active tool, cursor ghost, and the
/// pointer state machine. Panels and the renderer borrow this one object
/// instead of sharing loose globals.
///
/// Only the tool selection is persisted across runs; the document, preview,
/// and pointer state are session-local.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchState {
    #[serde(skip)]
    document: Document,
    tool: Tool,
    #[serde(skip)]
    preview: Option<ToolPreview>,
    #[serde(skip)]
    pointer: PointerState,
}

impl SketchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one pointer event through the state machine.
    ///
    /// Returns true when something repaint-worthy changed. Every operation
    /// here is total: events that do not apply in the current state are
    /// no-ops, never errors.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { pos } => {
                // Committing immediately makes the in-progress command the
                // display list's tail, so drags mutate it in place.
                self.document.commit(self.tool.start(pos));
                self.pointer = PointerState::Drawing;
                true
            }
            InputEvent::PointerMove { pos } => match self.pointer {
                PointerState::Drawing => {
                    if let Some(command) = self.document.last_mut() {
                        command.drag(pos);
                    }
                    true
                }
                PointerState::Idle => {
                    self.preview
                        .get_or_insert_with(|| self.tool.preview())
                        .move_to(pos);
                    true
                }
            },
            InputEvent::PointerUp { .. } => match self.pointer {
                PointerState::Drawing => {
                    // The command stays committed; it is simply no longer
                    // current.
                    self.pointer = PointerState::Idle;
                    true
                }
                PointerState::Idle => false,
            },
            InputEvent::PointerLeave => match self.pointer {
                PointerState::Drawing => {
                    self.pointer = PointerState::Idle;
                    true
                }
                // Drop the ghost so nothing stale lingers while the cursor
                // is off the canvas.
                PointerState::Idle => self.preview.take().is_some(),
            },
        }
    }

    /// Make `tool` the active tool and rebuild the cursor ghost from it.
    ///
    /// The previous ghost's position carries over, so the new shape shows up
    /// without waiting for the cursor to move. Legal in any state; while
    /// drawing, the rebuilt ghost stays hidden until the pointer lifts.
    pub fn select_tool(&mut self, tool: Tool) {
        let cursor = self.preview.as_ref().and_then(ToolPreview::position);
        self.tool = tool;
        let mut preview = tool.preview();
        if let Some(pos) = cursor {
            preview.move_to(pos);
        }
        self.preview = Some(preview);
    }

    /// History operations are legal mid-drag (e.g. a keyboard shortcut while
    /// the button is held), but they must end the drag first: once the tail
    /// command leaves the display list, later pointer-moves would otherwise
    /// drag whatever frozen command preceded it.
    fn end_drag(&mut self) {
        self.pointer = PointerState::Idle;
    }

    pub fn undo(&mut self) {
        self.end_drag();
        self.document.undo();
    }

    pub fn redo(&mut self) {
        self.end_drag();
        self.document.redo();
    }

    pub fn clear(&mut self) {
        self.end_drag();
        self.document.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.document.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.document.can_redo()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn preview(&self) -> Option<&ToolPreview> {
        self.preview.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.pointer == PointerState::Drawing
    }

    /// The ghost is painted only when idle; it must never be visible while
    /// a stroke or sticker placement is active.
    pub fn visible_preview(&self) -> Option<&ToolPreview> {
        match self.pointer {
            PointerState::Idle => self.preview.as_ref(),
            PointerState::Drawing => None,
        }
    }

    /// Convenience for tests and keyboard-driven flows.
    pub fn last_cursor_pos(&self) -> Option<Pos2> {
        self.preview.as_ref().and_then(ToolPreview::position)
    }
}

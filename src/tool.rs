use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::command::DrawCommand;
use crate::preview::ToolPreview;
use crate::sticker::Sticker;
use crate::stroke::Stroke;

/// Marker thickness presets offered in the tools panel.
pub const THIN_MARKER: f32 = 2.0;
pub const THICK_MARKER: f32 = 8.0;

/// Font size used for placed stickers.
pub const STICKER_SIZE: f32 = 32.0;

/// Stickers offered out of the box. Users can extend the palette from the
/// tools panel.
pub const DEFAULT_STICKERS: [char; 3] = ['😀', '⭐', '❤'];

/// The active drawing tool.
///
/// Selecting a tool only changes what the next pointer-down instantiates;
/// commands already on the canvas keep the settings they were created with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Tool {
    Marker { thickness: f32, color: Color32 },
    Sticker { glyph: char, size: f32 },
}

impl Default for Tool {
    fn default() -> Self {
        Tool::marker(THIN_MARKER, Color32::BLACK)
    }
}

impl Tool {
    pub fn marker(thickness: f32, color: Color32) -> Self {
        Tool::Marker { thickness, color }
    }

    pub fn sticker(glyph: char) -> Self {
        Tool::Sticker {
            glyph,
            size: STICKER_SIZE,
        }
    }

    /// Instantiate the command a pointer-down at `pos` starts.
    pub fn start(&self, pos: Pos2) -> DrawCommand {
        match *self {
            Tool::Marker { thickness, color } => {
                DrawCommand::Stroke(Stroke::new(pos, thickness, color))
            }
            Tool::Sticker { glyph, size } => DrawCommand::Sticker(Sticker::new(pos, glyph, size)),
        }
    }

    /// Build a fresh cursor ghost for this tool. The ghost stays invisible
    /// until it is given a position.
    pub fn preview(&self) -> ToolPreview {
        match *self {
            Tool::Marker { thickness, color } => ToolPreview::marker(thickness, color),
            Tool::Sticker { glyph, size } => ToolPreview::sticker(glyph, size),
        }
    }
}

/// The sticker glyphs offered in the tools panel, including any the user
/// added during this or an earlier session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerPalette {
    glyphs: Vec<char>,
}

impl Default for StickerPalette {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_STICKERS.to_vec(),
        }
    }
}

impl StickerPalette {
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Add a glyph to the palette. Duplicates are ignored so the panel
    /// never grows two buttons for the same sticker.
    pub fn add(&mut self, glyph: char) {
        if !self.glyphs.contains(&glyph) {
            log::info!("added sticker {glyph:?} to the palette");
            self.glyphs.push(glyph);
        }
    }
}

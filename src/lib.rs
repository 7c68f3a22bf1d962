#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod document;
pub mod error;
pub mod input;
pub mod panels;
pub mod preview;
pub mod renderer;
pub mod state;
pub mod sticker;
pub mod stroke;
pub mod tool;

pub use app::SketchApp;
pub use command::DrawCommand;
pub use document::Document;
pub use error::SketchError;
pub use input::{InputEvent, InputHandler};
pub use preview::ToolPreview;
pub use renderer::Renderer;
pub use state::SketchState;
pub use sticker::Sticker;
pub use stroke::Stroke;
pub use tool::{StickerPalette, Tool};

use egui::{Key, KeyboardShortcut, Modifiers};

use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::state::SketchState;
use crate::tool::StickerPalette;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_SHORTCUT_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// We derive Deserialize/Serialize so we can persist UI preferences on
/// shutdown. The drawing itself is session-only and never stored.
#[derive(serde::Deserialize, serde::Serialize, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SketchApp {
    state: SketchState,
    sticker_palette: StickerPalette,
    // Entry buffer for the "add sticker" box
    #[serde(skip)]
    glyph_entry: String,
    #[serde(skip)]
    input_handler: InputHandler,
    #[serde(skip)]
    renderer: Renderer,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            if let Some(app) = eframe::get_value::<Self>(storage, eframe::APP_KEY) {
                return app;
            }
        }
        Self::default()
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        ctx.input_mut(|input| {
            // Order matters: Shift-Z must be consumed before plain Z.
            if input.consume_shortcut(&REDO_SHORTCUT) || input.consume_shortcut(&REDO_SHORTCUT_ALT)
            {
                self.state.redo();
            }
            if input.consume_shortcut(&UNDO_SHORTCUT) {
                self.state.undo();
            }
        });
    }
}

impl eframe::App for SketchApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        panels::tools_panel(
            ctx,
            &mut self.state,
            &mut self.sticker_palette,
            &mut self.glyph_entry,
        );
        panels::central_panel(ctx, &mut self.state, &mut self.input_handler, &self.renderer);
    }
}

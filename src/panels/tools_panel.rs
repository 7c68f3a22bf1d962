use egui::{Button, Color32, Slider};

use crate::state::SketchState;
use crate::tool::{StickerPalette, THICK_MARKER, THIN_MARKER, Tool};

/// The tool/action side panel: marker presets and options, the sticker
/// palette, and the history actions. Buttons are enabled from the two
/// history flags and every selection goes through [`SketchState::select_tool`]
/// so the cursor ghost is rebuilt immediately.
pub fn tools_panel(
    ctx: &egui::Context,
    state: &mut SketchState,
    palette: &mut StickerPalette,
    glyph_entry: &mut String,
) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();

            marker_section(ui, state);
            ui.separator();
            sticker_section(ui, state, palette, glyph_entry);
            ui.separator();
            history_section(ui, state);
        });
}

fn marker_section(ui: &mut egui::Ui, state: &mut SketchState) {
    let (mut thickness, mut color) = match state.tool() {
        Tool::Marker { thickness, color } => (thickness, color),
        Tool::Sticker { .. } => (THIN_MARKER, Color32::BLACK),
    };

    ui.horizontal(|ui| {
        if ui
            .selectable_label(
                state.tool() == Tool::marker(THIN_MARKER, color),
                "✏ Thin",
            )
            .clicked()
        {
            log::info!("tool selected from UI: thin marker");
            state.select_tool(Tool::marker(THIN_MARKER, color));
        }
        if ui
            .selectable_label(
                state.tool() == Tool::marker(THICK_MARKER, color),
                "🖌 Thick",
            )
            .clicked()
        {
            log::info!("tool selected from UI: thick marker");
            state.select_tool(Tool::marker(THICK_MARKER, color));
        }
    });

    // Fine-grained marker options; editing them while a sticker is selected
    // switches back to the marker.
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label("Thickness:");
        changed |= ui.add(Slider::new(&mut thickness, 1.0..=50.0)).changed();
    });
    ui.horizontal(|ui| {
        ui.label("Color:");
        changed |= egui::color_picker::color_edit_button_srgba(
            ui,
            &mut color,
            egui::color_picker::Alpha::Opaque,
        )
        .changed();
    });
    if changed {
        state.select_tool(Tool::marker(thickness, color));
    }
}

fn sticker_section(
    ui: &mut egui::Ui,
    state: &mut SketchState,
    palette: &mut StickerPalette,
    glyph_entry: &mut String,
) {
    ui.label("Stickers:");
    ui.horizontal_wrapped(|ui| {
        for &glyph in palette.glyphs() {
            let selected = state.tool() == Tool::sticker(glyph);
            if ui.selectable_label(selected, glyph.to_string()).clicked() {
                log::info!("tool selected from UI: sticker {glyph:?}");
                state.select_tool(Tool::sticker(glyph));
            }
        }
    });

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(glyph_entry)
                .desired_width(40.0)
                .hint_text("🙂"),
        );
        if ui.button("Add").clicked() {
            if let Some(glyph) = glyph_entry.chars().next() {
                palette.add(glyph);
                state.select_tool(Tool::sticker(glyph));
            }
            glyph_entry.clear();
        }
    });
}

fn history_section(ui: &mut egui::Ui, state: &mut SketchState) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(state.can_undo(), Button::new("Undo"))
            .clicked()
        {
            state.undo();
        }
        if ui
            .add_enabled(state.can_redo(), Button::new("Redo"))
            .clicked()
        {
            state.redo();
        }
    });
    if ui.button("Clear").clicked() {
        state.clear();
    }
}

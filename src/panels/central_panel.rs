use crate::input::InputHandler;
use crate::renderer::Renderer;
use crate::state::SketchState;

/// The canvas: allocates a painter over the remaining space, feeds this
/// frame's pointer input through the state machine, and repaints.
///
/// Mutations run before the render call within the same frame, so the
/// painted output always reflects the latest committed state.
pub fn central_panel(
    ctx: &egui::Context,
    state: &mut SketchState,
    input_handler: &mut InputHandler,
    renderer: &Renderer,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());

        input_handler.set_canvas_rect(response.rect);

        let mut changed = false;
        for event in input_handler.process_input(ctx) {
            changed |= state.handle_event(event);
        }
        if changed {
            ctx.request_repaint();
        }

        renderer.render(&painter, response.rect, state);
    });
}

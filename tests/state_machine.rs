use eframe_sketch::command::DrawCommand;
use eframe_sketch::input::InputEvent;
use eframe_sketch::preview::ToolPreview;
use eframe_sketch::state::SketchState;
use eframe_sketch::tool::Tool;
use egui::{Color32, Pos2};

fn down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown {
        pos: Pos2::new(x, y),
    }
}

fn mv(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove {
        pos: Pos2::new(x, y),
    }
}

fn up(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerUp {
        pos: Pos2::new(x, y),
    }
}

#[test]
fn drag_lifecycle_produces_one_stroke() {
    let mut state = SketchState::new();
    state.select_tool(Tool::marker(2.0, Color32::BLACK));

    state.handle_event(down(10.0, 10.0));
    assert!(state.is_drawing());

    state.handle_event(mv(20.0, 10.0));
    state.handle_event(mv(20.0, 20.0));
    state.handle_event(up(20.0, 20.0));
    assert!(!state.is_drawing());

    let commands = state.document().commands();
    assert_eq!(commands.len(), 1);
    let DrawCommand::Stroke(stroke) = &commands[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(stroke.points().len(), 3);
}

#[test]
fn drag_mutates_the_committed_command_in_place() {
    let mut state = SketchState::new();
    state.handle_event(down(1.0, 1.0));
    // Already committed before the first move arrives.
    assert_eq!(state.document().commands().len(), 1);
    assert!(state.can_undo());

    state.handle_event(mv(2.0, 2.0));
    assert_eq!(state.document().commands().len(), 1);
}

#[test]
fn pointer_down_forks_history() {
    let mut state = SketchState::new();
    state.handle_event(down(1.0, 1.0));
    state.handle_event(up(1.0, 1.0));
    state.undo();
    assert!(state.can_redo());

    state.handle_event(down(2.0, 2.0));
    assert!(!state.can_redo());
}

#[test]
fn sticker_drag_repositions_instead_of_trailing() {
    let mut state = SketchState::new();
    state.select_tool(Tool::sticker('⭐'));

    state.handle_event(down(5.0, 5.0));
    state.handle_event(mv(6.0, 7.0));
    state.handle_event(mv(8.0, 9.0));
    state.handle_event(up(8.0, 9.0));

    let commands = state.document().commands();
    assert_eq!(commands.len(), 1);
    let DrawCommand::Sticker(sticker) = &commands[0] else {
        panic!("expected a sticker");
    };
    assert_eq!(sticker.position(), Pos2::new(8.0, 9.0));
}

#[test]
fn idle_moves_only_touch_the_preview() {
    let mut state = SketchState::new();
    state.handle_event(mv(30.0, 30.0));

    assert!(state.document().commands().is_empty());
    assert_eq!(state.last_cursor_pos(), Some(Pos2::new(30.0, 30.0)));
}

#[test]
fn preview_is_suppressed_while_drawing() {
    let mut state = SketchState::new();
    state.handle_event(mv(10.0, 10.0));
    assert!(state.visible_preview().is_some());

    state.handle_event(down(10.0, 10.0));
    state.handle_event(mv(15.0, 15.0));
    assert!(state.visible_preview().is_none());

    state.handle_event(up(15.0, 15.0));
    state.handle_event(mv(40.0, 40.0));
    let preview = state.visible_preview().expect("ghost returns once idle");
    assert_eq!(preview.position(), Some(Pos2::new(40.0, 40.0)));
}

#[test]
fn pointer_leave_discards_the_idle_preview() {
    let mut state = SketchState::new();
    state.handle_event(mv(10.0, 10.0));
    assert!(state.visible_preview().is_some());

    state.handle_event(InputEvent::PointerLeave);
    assert!(state.visible_preview().is_none());
    assert_eq!(state.last_cursor_pos(), None);
}

#[test]
fn pointer_leave_while_drawing_freezes_the_command() {
    let mut state = SketchState::new();
    state.handle_event(down(1.0, 1.0));
    state.handle_event(mv(2.0, 2.0));
    state.handle_event(InputEvent::PointerLeave);

    assert!(!state.is_drawing());
    assert_eq!(state.document().commands().len(), 1);
}

#[test]
fn selecting_a_tool_rebuilds_the_preview_in_place() {
    let mut state = SketchState::new();
    state.select_tool(Tool::marker(8.0, Color32::BLACK));
    state.handle_event(mv(25.0, 25.0));

    // Switch to a sticker without moving the pointer: the ghost must change
    // shape immediately and keep tracking the same spot.
    state.select_tool(Tool::sticker('😀'));
    match state.visible_preview() {
        Some(ToolPreview::Sticker { glyph, position, .. }) => {
            assert_eq!(*glyph, '😀');
            assert_eq!(*position, Some(Pos2::new(25.0, 25.0)));
        }
        other => panic!("expected a sticker ghost, got {other:?}"),
    }

    // And back to a thicker marker: radius reflects the new thickness.
    state.select_tool(Tool::marker(12.0, Color32::BLACK));
    match state.visible_preview() {
        Some(ToolPreview::Marker { radius, position, .. }) => {
            assert_eq!(*radius, 6.0);
            assert_eq!(*position, Some(Pos2::new(25.0, 25.0)));
        }
        other => panic!("expected a marker ghost, got {other:?}"),
    }
}

#[test]
fn tool_change_only_affects_the_next_pointer_down() {
    let mut state = SketchState::new();
    state.select_tool(Tool::marker(2.0, Color32::BLACK));
    state.handle_event(down(1.0, 1.0));

    // Switching mid-drag is legal but the in-progress command keeps its type.
    state.select_tool(Tool::sticker('⭐'));
    state.handle_event(mv(2.0, 2.0));
    state.handle_event(up(2.0, 2.0));
    assert!(matches!(
        state.document().commands()[0],
        DrawCommand::Stroke(_)
    ));

    state.handle_event(down(3.0, 3.0));
    state.handle_event(up(3.0, 3.0));
    assert!(matches!(
        state.document().commands()[1],
        DrawCommand::Sticker(_)
    ));
}

#[test]
fn undo_during_a_drag_ends_it_without_touching_frozen_commands() {
    let mut state = SketchState::new();
    state.handle_event(down(1.0, 1.0));
    state.handle_event(up(1.0, 1.0));

    // Undo arrives (e.g. via keyboard) while a second drag is active.
    state.handle_event(down(10.0, 10.0));
    state.undo();
    assert!(!state.is_drawing());

    // The in-progress command is gone, so this move is an idle move; the
    // surviving first stroke must stay exactly as committed.
    state.handle_event(mv(99.0, 99.0));
    let commands = state.document().commands();
    assert_eq!(commands.len(), 1);
    let DrawCommand::Stroke(stroke) = &commands[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(stroke.points(), &[Pos2::new(1.0, 1.0)]);
}

#[test]
fn clear_during_a_drag_ends_it() {
    let mut state = SketchState::new();
    state.handle_event(down(5.0, 5.0));
    state.clear();

    assert!(!state.is_drawing());
    state.handle_event(mv(6.0, 6.0));
    assert!(state.document().commands().is_empty());
    assert_eq!(state.last_cursor_pos(), Some(Pos2::new(6.0, 6.0)));
}

#[test]
fn clear_wipes_the_session() {
    let mut state = SketchState::new();
    state.handle_event(down(1.0, 1.0));
    state.handle_event(up(1.0, 1.0));
    state.undo();

    state.clear();
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert!(state.document().commands().is_empty());
}

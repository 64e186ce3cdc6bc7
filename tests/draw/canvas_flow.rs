use screen_pen::draw::command::{BackgroundChoice, Command};
use screen_pen::draw::model::{BackgroundMode, Rgba, WindowSize};
use screen_pen::draw::{Canvas, CanvasOptions};

use crate::{canvas, committed_alpha, drag, solid_snapshot};

#[test]
fn undo_and_redo_restore_committed_pixels() {
    let mut canvas = canvas(48, 48);
    drag(&mut canvas, &[(2.0, 10.0), (45.0, 10.0)]);
    let first = canvas.layers().committed().clone();
    drag(&mut canvas, &[(2.0, 30.0), (45.0, 30.0)]);
    let second = canvas.layers().committed().clone();

    canvas.apply(Command::Undo);
    assert_eq!(canvas.layers().committed(), &first);
    canvas.apply(Command::Redo);
    assert_eq!(canvas.layers().committed(), &second);

    canvas.apply(Command::Undo);
    canvas.apply(Command::Undo);
    assert_eq!(committed_alpha(&canvas, 20, 10), 0);
    assert_eq!(committed_alpha(&canvas, 20, 30), 0);

    // Nothing older than the empty canvas.
    canvas.apply(Command::Undo);
    assert_eq!(canvas.history().cursor(), Some(0));
}

#[test]
fn stroke_after_undo_discards_the_redo_branch() {
    let mut canvas = canvas(48, 48);
    drag(&mut canvas, &[(2.0, 10.0), (45.0, 10.0)]);
    drag(&mut canvas, &[(2.0, 30.0), (45.0, 30.0)]);
    canvas.apply(Command::Undo);
    drag(&mut canvas, &[(10.0, 2.0), (10.0, 45.0)]);

    assert!(!canvas.history().can_redo());
    assert_eq!(canvas.history().len(), 3);
    assert_eq!(committed_alpha(&canvas, 30, 30), 0);
}

#[test]
fn history_capacity_evicts_the_oldest_state() {
    let snapshot = solid_snapshot(32, 32, Rgba::BLACK);
    let options = CanvasOptions {
        history_capacity: 2,
        ..CanvasOptions::default()
    };
    let mut canvas = Canvas::new(snapshot, BackgroundMode::Snapshot, options).unwrap();
    drag(&mut canvas, &[(1.0, 5.0), (30.0, 5.0)]);
    drag(&mut canvas, &[(1.0, 20.0), (30.0, 20.0)]);

    assert_eq!(canvas.history().len(), 2);
    canvas.apply(Command::Undo);
    canvas.apply(Command::Undo);
    // The blank seed was evicted, so the first stroke is as far back as it goes.
    assert!(committed_alpha(&canvas, 15, 5) > 0);
    assert_eq!(committed_alpha(&canvas, 15, 20), 0);
}

#[test]
fn clear_is_not_recorded_but_can_be_undone() {
    let mut canvas = canvas(32, 32);
    drag(&mut canvas, &[(1.0, 16.0), (30.0, 16.0)]);
    let entries = canvas.history().len();

    canvas.apply(Command::ClearDrawing);
    assert_eq!(canvas.history().len(), entries);
    assert_eq!(committed_alpha(&canvas, 16, 16), 0);

    canvas.apply(Command::Undo);
    canvas.apply(Command::Redo);
    assert!(committed_alpha(&canvas, 16, 16) > 0);
}

#[test]
fn boards_replace_the_background_and_default_restores_it() {
    let snapshot = solid_snapshot(16, 16, Rgba::rgb(10, 20, 30));
    let mut canvas =
        Canvas::new(snapshot, BackgroundMode::Snapshot, CanvasOptions::default()).unwrap();
    let px = |canvas: &mut Canvas| {
        let frame = canvas.render();
        let p = frame.pixel(8, 8).unwrap();
        (p.red(), p.green(), p.blue(), p.alpha())
    };
    assert_eq!(px(&mut canvas), (10, 20, 30, 255));

    canvas.apply(Command::SetBackground(BackgroundChoice::Whiteboard));
    assert_eq!(px(&mut canvas), (255, 255, 255, 255));
    canvas.apply(Command::SetBackground(BackgroundChoice::Blackboard));
    assert_eq!(px(&mut canvas), (0, 0, 0, 255));
    canvas.apply(Command::SetBackground(BackgroundChoice::Default));
    assert_eq!(canvas.background(), BackgroundMode::Snapshot);
    assert_eq!(px(&mut canvas), (10, 20, 30, 255));
}

#[test]
fn transparent_session_renders_only_ink_but_exports_the_screen() {
    let mut canvas = canvas(16, 16);
    let frame = canvas.render();
    assert_eq!(frame.pixel(3, 3).unwrap().alpha(), 0);

    let exported = canvas.export_frame();
    let p = exported.pixel(3, 3).unwrap();
    assert_eq!((p.red(), p.green(), p.blue(), p.alpha()), (40, 40, 40, 255));
}

#[test]
fn export_puts_strokes_over_the_board() {
    let mut canvas = canvas(32, 32);
    canvas.apply(Command::SetBackground(BackgroundChoice::Whiteboard));
    canvas.apply(Command::SetColor(Rgba::rgb(0, 0, 255)));
    canvas.apply(Command::SetWidth(6));
    drag(&mut canvas, &[(0.0, 16.0), (31.0, 16.0)]);

    let exported = canvas.export_frame();
    let ink = exported.pixel(16, 16).unwrap();
    assert_eq!((ink.red(), ink.green(), ink.blue()), (0, 0, 255));
    let board = exported.pixel(16, 2).unwrap();
    assert_eq!((board.red(), board.green(), board.blue()), (255, 255, 255));
}

#[test]
fn pointer_positions_are_scaled_from_window_to_canvas() {
    let mut canvas = canvas(100, 100);
    canvas.set_window_size(WindowSize::new(50.0, 50.0));
    canvas.apply(Command::SelectTool(screen_pen::draw::model::Tool::Dot));
    drag(&mut canvas, &[(20.0, 20.0)]);

    assert!(committed_alpha(&canvas, 40, 40) > 0);
    assert_eq!(committed_alpha(&canvas, 20, 20), 0);
}

use screen_pen::draw::command::Command;
use screen_pen::draw::model::{Point, Tool};
use screen_pen::draw::stroke::StrokePhase;

use crate::{canvas, committed_alpha, drag};

#[test]
fn rect_drag_outlines_the_dragged_box() {
    let mut canvas = canvas(64, 64);
    canvas.apply(Command::SelectTool(Tool::Rect));
    canvas.apply(Command::SetWidth(2));
    drag(&mut canvas, &[(10.0, 10.0), (30.0, 40.0), (50.0, 50.0)]);

    for (x, y) in [(10, 30), (50, 30), (30, 10), (30, 50)] {
        assert!(committed_alpha(&canvas, x, y) > 200, "edge pixel ({x}, {y})");
    }
    for (x, y) in [(10, 10), (50, 50)] {
        assert!(committed_alpha(&canvas, x, y) > 0, "corner pixel ({x}, {y})");
    }
    for (x, y) in [(30, 30), (7, 30), (53, 30), (30, 7), (30, 53)] {
        assert_eq!(committed_alpha(&canvas, x, y), 0, "pixel ({x}, {y})");
    }
    // The intermediate preview at (30, 40) did not survive.
    assert_eq!(committed_alpha(&canvas, 20, 40), 0);
}

#[test]
fn freehand_path_passes_through_every_sample() {
    let mut canvas = canvas(64, 64);
    let entries_before = canvas.history().len();

    canvas.pointer_down(0.0, 0.0);
    for (x, y) in [(0.0, 0.0), (5.0, 5.0), (10.0, 10.0)] {
        canvas.pointer_move(x, y);
        canvas.paint_stroke();
    }
    assert_eq!(canvas.phase(), StrokePhase::PathDrawing);
    assert_eq!(
        canvas.stroke().active().unwrap().path(),
        &[Point::new(0, 0), Point::new(5, 5), Point::new(10, 10)]
    );

    canvas.pointer_up(10.0, 10.0);
    assert_eq!(canvas.phase(), StrokePhase::Idle);
    assert_eq!(canvas.history().len(), entries_before + 1);
    assert!(committed_alpha(&canvas, 5, 5) > 200);
    assert!(committed_alpha(&canvas, 8, 8) > 200);
}

#[test]
fn zero_length_drags_still_commit() {
    let mut canvas = canvas(32, 32);
    canvas.apply(Command::SelectTool(Tool::Line));
    let before = canvas.history().len();
    drag(&mut canvas, &[(12.0, 12.0)]);
    assert_eq!(canvas.history().len(), before + 1);

    canvas.apply(Command::SelectTool(Tool::Rect));
    drag(&mut canvas, &[(20.0, 20.0)]);
    assert_eq!(canvas.history().len(), before + 2);
}

#[test]
fn dot_is_centred_on_release() {
    let mut canvas = canvas(64, 64);
    canvas.apply(Command::SelectTool(Tool::Dot));
    drag(&mut canvas, &[(5.0, 5.0), (40.0, 40.0)]);
    assert_eq!(committed_alpha(&canvas, 40, 40), 255);
    assert_eq!(committed_alpha(&canvas, 5, 5), 0);
}

#[test]
fn eraser_cuts_through_committed_ink() {
    let mut canvas = canvas(64, 64);
    canvas.apply(Command::SetWidth(20));
    drag(&mut canvas, &[(0.0, 32.0), (63.0, 32.0)]);
    assert_eq!(committed_alpha(&canvas, 32, 32), 255);

    canvas.apply(Command::SelectEraser);
    drag(&mut canvas, &[(32.0, 0.0), (32.0, 63.0)]);
    assert_eq!(committed_alpha(&canvas, 32, 32), 0);
    assert_eq!(committed_alpha(&canvas, 5, 32), 255);
}

#[test]
fn second_press_during_a_stroke_is_ignored() {
    let mut canvas = canvas(32, 32);
    canvas.pointer_down(1.0, 1.0);
    canvas.apply(Command::SelectTool(Tool::Rect));
    canvas.pointer_down(20.0, 20.0);
    assert_eq!(canvas.stroke().active().unwrap().tool(), Tool::Path);
    assert_eq!(canvas.stroke().active().unwrap().begin(), Point::new(1, 1));
}

#[test]
fn release_without_press_records_nothing() {
    let mut canvas = canvas(32, 32);
    let before = canvas.history().len();
    canvas.pointer_up(4.0, 4.0);
    assert_eq!(canvas.history().len(), before);
}

#[test]
fn path_and_eraser_clicks_without_motion_leave_no_mark() {
    for tool in [Tool::Path, Tool::Eraser] {
        let mut canvas = canvas(32, 32);
        if tool == Tool::Eraser {
            canvas.apply(Command::SelectEraser);
        } else {
            canvas.apply(Command::SelectTool(tool));
        }
        let before = canvas.layers().committed().clone();
        let entries = canvas.history().len();

        canvas.pointer_down(16.0, 16.0);
        canvas.paint_stroke();
        canvas.pointer_up(16.0, 16.0);

        assert_eq!(canvas.layers().committed(), &before, "{tool:?}");
        assert_eq!(canvas.history().len(), entries + 1, "{tool:?}");
    }
}

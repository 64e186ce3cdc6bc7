mod canvas_flow;
mod capture_fallback;
mod history_scenarios;
mod save_flow;
mod stroke_scenarios;

use screen_pen::draw::model::{BackgroundMode, Rgba};
use screen_pen::draw::{Canvas, CanvasOptions};
use tiny_skia::Pixmap;

pub fn solid_snapshot(width: u32, height: u32, color: Rgba) -> Pixmap {
    let mut pixmap = Pixmap::new(width, height).unwrap();
    pixmap.fill(color.to_skia());
    pixmap
}

pub fn canvas(width: u32, height: u32) -> Canvas {
    Canvas::new(
        solid_snapshot(width, height, Rgba::rgb(40, 40, 40)),
        BackgroundMode::Transparent,
        CanvasOptions::default(),
    )
    .unwrap()
}

pub fn committed_alpha(canvas: &Canvas, x: u32, y: u32) -> u8 {
    canvas.layers().committed().pixel(x, y).unwrap().alpha()
}

pub fn drag(canvas: &mut Canvas, points: &[(f32, f32)]) {
    let (first, rest) = points.split_first().unwrap();
    canvas.pointer_down(first.0, first.1);
    for (x, y) in rest {
        canvas.pointer_move(*x, *y);
        canvas.paint_stroke();
    }
    let last = points.last().unwrap();
    canvas.pointer_up(last.0, last.1);
}

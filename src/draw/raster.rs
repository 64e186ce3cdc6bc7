//! Pen primitives drawn into a single layer.
//!
//! Every primitive writes with source-replace compositing under the shape's
//! coverage, so translucent ink replaces what is below it instead of
//! accumulating, and a transparent pen erases.

use tiny_skia::{
    BlendMode, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, StrokeDash,
    Transform,
};

use crate::draw::model::{CapStyle, JoinStyle, PenStyle, Point, DOT_RADIUS};

fn paint_for(pen: &PenStyle) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(pen.effective_color().to_skia());
    paint.blend_mode = BlendMode::Source;
    paint.anti_alias = true;
    paint
}

fn stroke_for(pen: &PenStyle) -> Stroke {
    let width = pen.width.max(1) as f32;
    let pattern = pen.dash.pattern();
    let dash = if pattern.is_empty() {
        None
    } else {
        StrokeDash::new(pattern.iter().map(|step| step * width).collect(), 0.0)
    };
    Stroke {
        width,
        line_cap: match pen.cap {
            CapStyle::Round => LineCap::Round,
            CapStyle::Square => LineCap::Square,
            CapStyle::Flat => LineCap::Butt,
        },
        line_join: match pen.join {
            JoinStyle::Round => LineJoin::Round,
            JoinStyle::Bevel => LineJoin::Bevel,
            JoinStyle::Miter => LineJoin::Miter,
        },
        dash,
        ..Stroke::default()
    }
}

fn stroke(pixmap: &mut Pixmap, pen: &PenStyle, path: Option<Path>) {
    // Degenerate geometry has no path; there is nothing to lay down.
    if let Some(path) = path {
        pixmap.stroke_path(
            &path,
            &paint_for(pen),
            &stroke_for(pen),
            Transform::identity(),
            None,
        );
    }
}

fn xy(p: Point) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

pub fn draw_line(pixmap: &mut Pixmap, pen: &PenStyle, start: Point, end: Point) {
    let mut pb = PathBuilder::new();
    let (x0, y0) = xy(start);
    let (x1, y1) = xy(end);
    pb.move_to(x0, y0);
    pb.line_to(x1, y1);
    stroke(pixmap, pen, pb.finish());
}

/// Outline of the box spanned by two opposite corners, in either order.
pub fn draw_rect_outline(pixmap: &mut Pixmap, pen: &PenStyle, a: Point, b: Point) {
    let left = a.x.min(b.x) as f32;
    let right = a.x.max(b.x) as f32;
    let top = a.y.min(b.y) as f32;
    let bottom = a.y.max(b.y) as f32;

    let mut pb = PathBuilder::new();
    pb.move_to(left, top);
    pb.line_to(right, top);
    pb.line_to(right, bottom);
    pb.line_to(left, bottom);
    pb.close();
    stroke(pixmap, pen, pb.finish());
}

/// Filled disc centred on `center`, outlined with the pen.
pub fn draw_dot(pixmap: &mut Pixmap, pen: &PenStyle, center: Point) {
    let (cx, cy) = xy(center);
    let Some(circle) = PathBuilder::from_circle(cx, cy, DOT_RADIUS) else {
        return;
    };
    pixmap.fill_path(
        &circle,
        &paint_for(pen),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
    stroke(pixmap, pen, Some(circle));
}

/// One freehand extension: a cubic from `from` whose control points and end
/// all sit on `to`.
pub fn draw_path_segment(pixmap: &mut Pixmap, pen: &PenStyle, from: Point, to: Point) {
    let mut pb = PathBuilder::new();
    let (x0, y0) = xy(from);
    let (x1, y1) = xy(to);
    pb.move_to(x0, y0);
    pb.cubic_to(x1, y1, x1, y1, x1, y1);
    stroke(pixmap, pen, pb.finish());
}

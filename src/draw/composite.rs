use tiny_skia::{BlendMode, Pixmap, PixmapPaint, Transform};

fn over(dst: &mut Pixmap, src: &Pixmap) {
    let paint = PixmapPaint {
        blend_mode: BlendMode::SourceOver,
        ..PixmapPaint::default()
    };
    dst.draw_pixmap(0, 0, src.as_ref(), &paint, Transform::identity(), None);
}

/// Builds the displayed frame: `background` copied as-is, then `working`
/// blended over it. Pure; the inputs are untouched.
pub fn compose(background: &Pixmap, working: &Pixmap) -> Pixmap {
    let mut frame = background.clone();
    over(&mut frame, working);
    frame
}

/// Builds the image written to disk: the captured screen, then the current
/// background, then the committed strokes.
pub fn compose_export(snapshot: &Pixmap, background: &Pixmap, committed: &Pixmap) -> Pixmap {
    let mut frame = snapshot.clone();
    over(&mut frame, background);
    over(&mut frame, committed);
    frame
}

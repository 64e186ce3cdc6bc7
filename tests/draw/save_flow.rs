use chrono::{Local, TimeZone};
use screen_pen::draw::command::Command;
use screen_pen::draw::model::Rgba;
use screen_pen::draw::save::save_frame;
use tempfile::tempdir;

use crate::{canvas, drag};

#[test]
fn saved_png_holds_screen_and_strokes() {
    let mut canvas = canvas(24, 24);
    canvas.apply(Command::SetColor(Rgba::rgb(255, 0, 0)));
    canvas.apply(Command::SetWidth(4));
    drag(&mut canvas, &[(0.0, 12.0), (23.0, 12.0)]);

    let dir = tempdir().unwrap();
    let now = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let path = save_frame(&canvas.export_frame(), dir.path(), now).unwrap();
    assert_eq!(path.file_name().unwrap(), "20260102_030405.png");

    let saved = image::open(&path).unwrap().to_rgba8();
    assert_eq!(saved.dimensions(), (24, 24));
    assert_eq!(saved.get_pixel(12, 12).0, [255, 0, 0, 255]);
    assert_eq!(saved.get_pixel(12, 2).0, [40, 40, 40, 255]);
}

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use tiny_skia::Pixmap;
use tracing::info;

pub fn timestamped_stem(now: chrono::DateTime<Local>) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}

pub fn build_filename(now: chrono::DateTime<Local>) -> String {
    format!("{}.png", timestamped_stem(now))
}

/// Converts a premultiplied frame into a straight-alpha image.
pub fn image_from_pixmap(frame: &Pixmap) -> Result<RgbaImage> {
    let mut raw = Vec::with_capacity(frame.data().len());
    for px in frame.pixels() {
        let px = px.demultiply();
        raw.extend_from_slice(&[px.red(), px.green(), px.blue(), px.alpha()]);
    }
    RgbaImage::from_raw(frame.width(), frame.height(), raw)
        .ok_or_else(|| anyhow!("frame buffer does not match {}x{}", frame.width(), frame.height()))
}

/// Writes `frame` as `YYYYMMDD_HHMMSS.png` into `dir`.
pub fn save_frame(frame: &Pixmap, dir: &Path, now: chrono::DateTime<Local>) -> Result<PathBuf> {
    let path = dir.join(build_filename(now));
    info!("saving {}", path.display());
    let image = image_from_pixmap(frame)?;
    image
        .save_with_format(&path, image::ImageFormat::Png)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Saves into the current working directory.
pub fn save_to_working_dir(frame: &Pixmap) -> Result<PathBuf> {
    let dir = std::env::current_dir().context("resolve working directory")?;
    save_frame(frame, &dir, Local::now())
}

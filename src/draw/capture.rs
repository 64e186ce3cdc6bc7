use std::process::Command;

use anyhow::{anyhow, bail, Context, Result};
use image::RgbaImage;
use screenshots::Screen;
use tracing::{debug, info, warn};

/// Samples per axis per display for the blank-screen check.
const BLANK_SAMPLE_GRID: u32 = 64;

/// Position and size of a display in the desktop layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct DisplayCapture {
    pub geometry: DisplayGeometry,
    pub image: RgbaImage,
}

/// One way of grabbing every connected display.
pub trait CaptureBackend {
    fn name(&self) -> &'static str;
    fn capture_all(&self) -> Result<Vec<DisplayCapture>>;
}

#[derive(Debug, Clone)]
pub struct CaptureReport {
    pub backend: &'static str,
    pub display: DisplayCapture,
    /// Every sampled pixel on every display was identical.
    pub blank_suspected: bool,
}

/// Native capture through the `screenshots` crate.
pub struct ScreenshotsBackend;

impl CaptureBackend for ScreenshotsBackend {
    fn name(&self) -> &'static str {
        "screenshots"
    }

    fn capture_all(&self) -> Result<Vec<DisplayCapture>> {
        let screens = Screen::all().context("enumerate screens")?;
        screens
            .iter()
            .map(|screen| -> Result<DisplayCapture> {
                let image = screen
                    .capture()
                    .with_context(|| format!("capture screen {}", screen.display_info.id))?;
                Ok(DisplayCapture {
                    geometry: geometry_of(screen),
                    image,
                })
            })
            .collect()
    }
}

/// Wayland capture through the `grim` command.
pub struct GrimBackend;

impl CaptureBackend for GrimBackend {
    fn name(&self) -> &'static str {
        "grim"
    }

    fn capture_all(&self) -> Result<Vec<DisplayCapture>> {
        let Some(layout) = display_layout() else {
            let image = run_png_command("grim", &["-"])?;
            return Ok(vec![whole_desktop(image)]);
        };
        layout
            .into_iter()
            .map(|geometry| -> Result<DisplayCapture> {
                let region = format!(
                    "{},{} {}x{}",
                    geometry.x, geometry.y, geometry.width, geometry.height
                );
                let image = run_png_command("grim", &["-g", &region, "-"])?;
                Ok(DisplayCapture { geometry, image })
            })
            .collect()
    }
}

/// X11 capture of the root window through ImageMagick's `import`.
pub struct ImportBackend;

impl CaptureBackend for ImportBackend {
    fn name(&self) -> &'static str {
        "import"
    }

    fn capture_all(&self) -> Result<Vec<DisplayCapture>> {
        let root = run_png_command("import", &["-window", "root", "png:-"])?;
        let Some(layout) = display_layout() else {
            return Ok(vec![whole_desktop(root)]);
        };
        let origin_x = layout.iter().map(|g| g.x).min().unwrap_or(0);
        let origin_y = layout.iter().map(|g| g.y).min().unwrap_or(0);
        Ok(layout
            .into_iter()
            .map(|geometry| {
                let image = image::imageops::crop_imm(
                    &root,
                    (geometry.x - origin_x).max(0) as u32,
                    (geometry.y - origin_y).max(0) as u32,
                    geometry.width,
                    geometry.height,
                )
                .to_image();
                DisplayCapture { geometry, image }
            })
            .collect())
    }
}

/// Backends in order of preference.
pub fn default_backends() -> Vec<Box<dyn CaptureBackend>> {
    vec![
        Box::new(ScreenshotsBackend),
        Box::new(GrimBackend),
        Box::new(ImportBackend),
    ]
}

/// Captures display `index` with the first backend that works.
///
/// A backend failure falls through to the next one. A capture where every
/// sampled pixel is identical is returned with a warning, since that usually
/// means the compositor handed back an empty frame.
pub fn capture_display(backends: &[Box<dyn CaptureBackend>], index: usize) -> Result<CaptureReport> {
    for backend in backends {
        let displays = match backend.capture_all() {
            Ok(displays) if displays.is_empty() => {
                warn!(backend = backend.name(), "capture backend reported no displays");
                continue;
            }
            Ok(displays) => displays,
            Err(err) => {
                warn!(backend = backend.name(), error = %format!("{err:#}"), "capture backend failed");
                continue;
            }
        };

        let blank_suspected = looks_blank(&displays);
        if blank_suspected {
            warn!(
                backend = backend.name(),
                "the screenshot appears to be blank; the compositor may not allow screen capture"
            );
        }

        let count = displays.len();
        let captured = displays.into_iter().nth(index).ok_or_else(|| {
            anyhow!("display {index} requested but only {count} display(s) available")
        })?;
        let (width, height) = captured.image.dimensions();
        info!(
            backend = backend.name(),
            width,
            height,
            "captured display {index}"
        );
        return Ok(CaptureReport {
            backend: backend.name(),
            display: captured,
            blank_suspected,
        });
    }
    bail!("unable to take a screenshot: no capture backend succeeded")
}

/// True when every sampled pixel across all displays is identical.
pub fn looks_blank(displays: &[DisplayCapture]) -> bool {
    let mut reference = None;
    for capture in displays {
        let image = &capture.image;
        if image.width() == 0 || image.height() == 0 {
            continue;
        }
        let step_x = (image.width() / BLANK_SAMPLE_GRID).max(1);
        let step_y = (image.height() / BLANK_SAMPLE_GRID).max(1);
        for y in (0..image.height()).step_by(step_y as usize) {
            for x in (0..image.width()).step_by(step_x as usize) {
                let px = *image.get_pixel(x, y);
                match reference {
                    None => reference = Some(px),
                    Some(first) if first != px => return false,
                    Some(_) => {}
                }
            }
        }
    }
    true
}

fn geometry_of(screen: &Screen) -> DisplayGeometry {
    let info = &screen.display_info;
    DisplayGeometry {
        x: info.x,
        y: info.y,
        width: info.width,
        height: info.height,
    }
}

fn display_layout() -> Option<Vec<DisplayGeometry>> {
    match Screen::all() {
        Ok(screens) if !screens.is_empty() => Some(screens.iter().map(geometry_of).collect()),
        Ok(_) => None,
        Err(err) => {
            debug!(error = %err, "display layout unavailable");
            None
        }
    }
}

fn whole_desktop(image: RgbaImage) -> DisplayCapture {
    DisplayCapture {
        geometry: DisplayGeometry {
            x: 0,
            y: 0,
            width: image.width(),
            height: image.height(),
        },
        image,
    }
}

fn run_png_command(program: &str, args: &[&str]) -> Result<RgbaImage> {
    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("run {program}"))?;
    if !output.status.success() {
        bail!(
            "{program} exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    let image = image::load_from_memory(&output.stdout)
        .with_context(|| format!("decode {program} output"))?;
    Ok(image.to_rgba8())
}

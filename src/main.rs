use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use screen_pen::cli::Cli;
use screen_pen::draw::capture::{capture_display, default_backends};
use screen_pen::draw::layers::pixmap_from_image;
use screen_pen::draw::model::BackgroundMode;
use screen_pen::draw::{platform, run_overlay, Canvas, CanvasOptions};
use screen_pen::{logging, settings_store};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        error!("{err:#}");
        eprintln!("screen_pen: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let loaded = settings_store::load(cli.config.as_deref());
    logging::init(
        loaded.settings.debug_logging,
        loaded.settings.log_file.clone(),
    );
    if let (true, Some(path)) = (loaded.seeded, &loaded.path) {
        info!("added default config file to {}", path.display());
    }
    for issue in &loaded.issues {
        warn!("config {issue}");
    }
    let settings = loaded.settings;

    let transparent = platform::use_transparency(cli.transparent);
    let report = capture_display(&default_backends(), cli.screen)?;
    let snapshot = pixmap_from_image(&report.display.image).context("prepare screenshot")?;
    let background = if transparent {
        BackgroundMode::Transparent
    } else {
        BackgroundMode::Snapshot
    };
    let canvas = Canvas::new(
        snapshot,
        background,
        CanvasOptions {
            history_capacity: settings.drawing_history,
            pen_width: settings.default_pen_size,
        },
    )?;

    run_overlay(canvas, settings, report.display.geometry, transparent)
}

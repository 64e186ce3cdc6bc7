use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "screen_pen",
    version,
    about = "Draw over your screen and save the result",
    disable_version_flag = true
)]
pub struct Cli {
    /// Display to draw on (0 is the first display).
    #[arg(short = 's', long = "screen", default_value_t = 0)]
    pub screen: usize,

    /// Draw over the live desktop instead of a screenshot.
    #[arg(short = 't', long)]
    pub transparent: bool,

    /// Configuration file to use instead of the per-user one.
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print version.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),
}

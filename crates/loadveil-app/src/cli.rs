use std::path::PathBuf;

use clap::Parser;

/// Loadveil: shows load progress over an embedded web view.
#[derive(Parser, Debug)]
#[command(name = "loadveil", version, about)]
pub struct Args {
    /// Resource URL override.
    #[arg(long)]
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Start offline: nothing is loaded and no probe runs.
    #[arg(long)]
    pub offline: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

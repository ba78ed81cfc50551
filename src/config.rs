//! Command-line configuration

use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Animate classic sorting algorithms in the terminal
#[derive(Debug, Clone, Parser)]
#[command(name = "sortty", version, about)]
pub struct Cli {
    /// Write structured logs to this file (the terminal is owned by the visualizer)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Maximum level written to the log file
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: Level,

    /// Go straight to the controls menu
    #[arg(long)]
    pub skip_intro: bool,
}

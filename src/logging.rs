//! Tracing setup.
//!
//! The visualizer owns the terminal, so log output only goes to a file. When
//! no file is requested no subscriber is installed and events are dropped.

use crate::error::{Result, VisualizerError};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

pub fn init(log_file: Option<&Path>, level: Level) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path).map_err(|source| VisualizerError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .init();

    tracing::info!(path = %path.display(), %level, "logging initialized");
    Ok(())
}

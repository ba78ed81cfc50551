//! Error types for the visualizer binary.
//!
//! The sorting algorithms themselves cannot fail; everything here comes from
//! the terminal, the console, or the log file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisualizerError {
    /// Raw mode, the alternate screen or the terminal itself could not be set up.
    /// The session is skipped and the user is returned to the controls menu.
    #[error("terminal initialization failed: {0}")]
    TerminalInit(#[source] io::Error),

    /// A frame failed to draw mid-session
    #[error("failed to draw frame: {0}")]
    Render(#[source] io::Error),

    /// Polling or reading terminal key events failed
    #[error("failed to read terminal events: {0}")]
    Input(#[source] io::Error),

    /// Reading from or writing to the console failed
    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),

    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, VisualizerError>;

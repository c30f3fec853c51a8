//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Per-line problems (malformed rows, rows before any column declaration)
//! are not errors: they are skipped and counted in `IngestStats`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a trace pass
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Step attribution for every later row would be wrong, so the pass stops here.
    #[error("Block marker on line {line_number} has no parsable ITERATION value: {line}")]
    FatalBlockState { line_number: usize, line: String },
}

/// Errors that can occur while looking for run files
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Cannot read run directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Failed to render chart: {0}")]
    ChartFailed(String),
}

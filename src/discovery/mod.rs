//! Locating the solver's header and trace files in a run directory.

pub mod types;

pub use types::{MissingInputs, Readiness, RunFiles};

use crate::utils::config::{DEFAULT_HEADER_EXTENSION, DEFAULT_TRACE_EXTENSION};
use crate::utils::error::DiscoveryError;
use log::debug;
use std::path::{Path, PathBuf};

/// File extensions identifying the two solver outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    pub header_extension: String,
    pub trace_extension: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            header_extension: DEFAULT_HEADER_EXTENSION.to_string(),
            trace_extension: DEFAULT_TRACE_EXTENSION.to_string(),
        }
    }
}

impl DiscoveryConfig {
    pub fn with_header_extension(mut self, extension: impl Into<String>) -> Self {
        self.header_extension = normalize_extension(extension.into());
        self
    }

    pub fn with_trace_extension(mut self, extension: impl Into<String>) -> Self {
        self.trace_extension = normalize_extension(extension.into());
        self
    }
}

fn normalize_extension(extension: String) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}

/// Find the header and trace files in `dir`
///
/// **Public** - main entry point for discovery
///
/// Extensions match case-insensitively. With several candidates the
/// lexicographically last file name wins.
///
/// # Returns
/// `Readiness::NotReady` naming each missing file when either is absent
///
/// # Errors
/// * `DiscoveryError::NotADirectory` - `dir` exists but is not a directory
/// * `DiscoveryError::ReadDir` - directory listing failed
pub fn locate_run_files(
    dir: impl AsRef<Path>,
    config: &DiscoveryConfig,
) -> Result<Readiness<RunFiles>, DiscoveryError> {
    let dir = dir.as_ref();

    if dir.exists() && !dir.is_dir() {
        return Err(DiscoveryError::NotADirectory(dir.to_path_buf()));
    }

    let read_dir_error = |source| DiscoveryError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let header = last_with_extension(&files, &config.header_extension);
    let trace = last_with_extension(&files, &config.trace_extension);
    debug!("Discovery in {}: header {:?}, trace {:?}", dir.display(), header, trace);

    match (header, trace) {
        (Some(header), Some(trace)) => Ok(Readiness::Ready(RunFiles { header, trace })),
        (header, trace) => {
            let mut missing = MissingInputs::default();
            if header.is_none() {
                missing.push(format!("no .{} file in {}", config.header_extension, dir.display()));
            }
            if trace.is_none() {
                missing.push(format!("no .{} file in {}", config.trace_extension, dir.display()));
            }
            Ok(Readiness::NotReady(missing))
        }
    }
}

fn last_with_extension(files: &[PathBuf], extension: &str) -> Option<PathBuf> {
    files
        .iter()
        .rev()
        .find(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .cloned()
}

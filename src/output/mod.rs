//! Output writers for extracted pressure series.
//!
//! This module handles writing data to disk in various formats:
//! - JSON reports
//! - SVG line charts, one per pair or stacked into one document

pub mod chart;
pub mod json;
pub mod report;

// Re-export main functions
pub use chart::{
    chart_file_name, render_pair_chart, render_pair_charts, render_stacked_chart, ChartConfig,
};
pub use json::{read_report, report_to_string, write_report};
pub use report::{to_report, PointRecord, PressureReport, SeriesRecord};

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Check that `path` can be written and create missing parent directories
///
/// **Private** - shared by every writer
pub(crate) fn prepare_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_output_path_empty() {
        assert!(prepare_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_prepare_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(prepare_output_path(temp_dir.path()).is_err());
    }
}

//! Solver trace parsing.
//!
//! This module handles:
//! - Loading the contact pair registry from the header file
//! - Resolving column positions declared inside the trace file
//! - Tracking solver iteration and step counters
//! - Turning data rows into raw per-pair observations

mod markup;

pub mod block;
pub mod registry;
pub mod schema;
pub mod trace;

// Re-export main types
pub use block::BlockState;
pub use registry::{load_registry, PairId, PairRegistry};
pub use schema::{ColumnSchema, ResolvedColumns};
pub use trace::{
    EngineConfig, IngestStats, IterationPolicy, Observation, PressureEngine, TraceReport,
    TraceState,
};

use crate::discovery::{MissingInputs, Readiness, RunFiles};
use crate::series::{build_series_set, SeriesSet};
pub use crate::utils::error::TraceError;
use log::{debug, info};
use std::path::Path;

/// Everything one engine run produces
#[derive(Debug, Clone)]
pub struct Extraction {
    pub registry: PairRegistry,
    pub series: SeriesSet,
    pub stats: IngestStats,
}

/// Extract per-pair series from pre-read header and trace lines
///
/// **Public** - main entry point for in-memory input
///
/// # Errors
/// * `TraceError::FatalBlockState` - a block marker without a usable iteration
pub fn extract<'h, 't, H, T>(
    header_lines: H,
    trace_lines: T,
    config: &EngineConfig,
) -> Result<Extraction, TraceError>
where
    H: IntoIterator<Item = &'h str>,
    T: IntoIterator<Item = &'t str>,
{
    let registry = load_registry(header_lines);
    if registry.is_empty() {
        info!("Header declares no contact pairs; every data row will be ignored");
    }

    let report = PressureEngine::new(&registry, *config).run(trace_lines)?;
    let series = build_series_set(&registry, &report.observations);

    Ok(Extraction {
        registry,
        series,
        stats: report.stats,
    })
}

/// Same as `extract`, returning only the series
pub fn extract_series<'h, 't, H, T>(
    header_lines: H,
    trace_lines: T,
    config: &EngineConfig,
) -> Result<SeriesSet, TraceError>
where
    H: IntoIterator<Item = &'h str>,
    T: IntoIterator<Item = &'t str>,
{
    extract(header_lines, trace_lines, config).map(|extraction| extraction.series)
}

/// Extract per-pair series from the header and trace files on disk
///
/// **Public** - main entry point for file input
///
/// # Returns
/// `Readiness::NotReady` when either file does not exist yet
///
/// # Errors
/// * `TraceError::Io` - a file exists but cannot be read
/// * `TraceError::FatalBlockState` - see `extract`
pub fn extract_from_files(
    files: &RunFiles,
    config: &EngineConfig,
) -> Result<Readiness<Extraction>, TraceError> {
    let mut missing = MissingInputs::default();
    for path in [&files.header, &files.trace] {
        if !path.exists() {
            missing.push(format!("{} does not exist", path.display()));
        }
    }
    if !missing.is_empty() {
        info!("Input not ready: {}", missing);
        return Ok(Readiness::NotReady(missing));
    }

    let header = read_text(&files.header)?;
    let trace = read_text(&files.trace)?;
    debug!(
        "Read {} header bytes and {} trace bytes",
        header.len(),
        trace.len()
    );

    extract(header.lines(), trace.lines(), config).map(Readiness::Ready)
}

/// Same as `extract_from_files`, returning only the series
pub fn extract_series_from_files(
    header: impl AsRef<Path>,
    trace: impl AsRef<Path>,
    config: &EngineConfig,
) -> Result<Readiness<SeriesSet>, TraceError> {
    let files = RunFiles {
        header: header.as_ref().to_path_buf(),
        trace: trace.as_ref().to_path_buf(),
    };
    Ok(extract_from_files(&files, config)?.map(|extraction| extraction.series))
}

/// Whole-file read; solver output is not guaranteed to be valid UTF-8
fn read_text(path: &Path) -> Result<String, TraceError> {
    let bytes = std::fs::read(path).map_err(|source| TraceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

//! JSON report schema.
//!
//! This module defines the structure of the JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::discovery::RunFiles;
use crate::parser::{Extraction, IngestStats, IterationPolicy, PairId};
use crate::series::Series;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_file: Option<String>,

    /// Iteration-0 handling used for this run
    pub policy: IterationPolicy,

    pub stats: IngestStats,

    /// One entry per registered pair, in header order
    pub series: Vec<SeriesRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub pair_id: PairId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_pressure: Option<f64>,

    /// Pressure at the last step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_pressure: Option<f64>,

    pub points: Vec<PointRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub step: u32,
    pub iteration: u32,
    pub pressure: f64,
}

impl From<&Series> for SeriesRecord {
    fn from(series: &Series) -> Self {
        Self {
            pair_id: series.pair_id,
            peak_pressure: series.peak_pressure(),
            final_pressure: series.last_pressure(),
            points: series
                .observations()
                .iter()
                .map(|o| PointRecord {
                    step: o.step,
                    iteration: o.iteration,
                    pressure: o.pressure,
                })
                .collect(),
        }
    }
}

impl PressureReport {
    pub fn total_points(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Convert an extraction into the report written to disk
///
/// **Public** - used by commands to create final output
pub fn to_report(
    extraction: &Extraction,
    files: Option<&RunFiles>,
    policy: IterationPolicy,
) -> PressureReport {
    use chrono::Utc;

    PressureReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        header_file: files.map(|f| f.header.display().to_string()),
        trace_file: files.map(|f| f.trace.display().to_string()),
        policy,
        stats: extraction.stats,
        series: extraction.series.iter().map(SeriesRecord::from).collect(),
    }
}

//! Row ingestion for the solver trace (.cnd) file.
//!
//! Each line goes through the same sequence:
//! 1. Column declarations update the `ColumnSchema`
//! 2. Block markers advance the `BlockState`
//! 3. Plain data rows become `Observation`s for registered pairs
//!
//! All mutable bookkeeping lives in `TraceState`, owned by the engine.

use super::block::BlockState;
use super::registry::{PairId, PairRegistry};
use super::schema::{ColumnSchema, ResolvedColumns};
use crate::utils::config::META_DELIMITER;
use crate::utils::error::TraceError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// How rows recorded while the solver reports iteration 0 are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IterationPolicy {
    /// Keep iteration-0 rows and let retry deduplication remove artifacts
    #[default]
    RetainAndDeduplicate,
    /// Treat iteration 0 as setup and discard every row recorded there
    DropIterationZero,
}

/// Engine configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub policy: IterationPolicy,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: IterationPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// One peak-pressure reading for one pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub pair_id: PairId,
    pub pressure: f64,
    pub step: u32,
    pub iteration: u32,
}

/// Counters describing what a pass did with each line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    pub lines: usize,
    pub blocks: usize,
    pub data_rows: usize,
    pub observations: usize,
    pub unresolved_schema_rows: usize,
    pub malformed_rows: usize,
    pub unregistered_rows: usize,
    pub dropped_iteration_zero: usize,
}

impl IngestStats {
    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{} lines, {} blocks, {} data rows, {} observations \
             ({} malformed, {} before schema, {} unregistered, {} iteration-0 dropped)",
            self.lines,
            self.blocks,
            self.data_rows,
            self.observations,
            self.malformed_rows,
            self.unresolved_schema_rows,
            self.unregistered_rows,
            self.dropped_iteration_zero,
        )
    }
}

/// Raw result of a pass, before retry deduplication
#[derive(Debug, Clone, Default)]
pub struct TraceReport {
    pub observations: Vec<Observation>,
    pub stats: IngestStats,
}

/// Parser state threaded through every line of a pass
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceState {
    pub schema: ColumnSchema,
    pub block: BlockState,
}

/// What happened to a single data row
#[derive(Debug, Clone, Copy, PartialEq)]
enum RowOutcome {
    Accepted(Observation),
    UnresolvedSchema,
    Malformed,
    Unregistered,
    DroppedIterationZero,
}

/// Stateful ingestion engine for one trace pass
pub struct PressureEngine<'r> {
    registry: &'r PairRegistry,
    config: EngineConfig,
    state: TraceState,
    report: TraceReport,
}

impl<'r> PressureEngine<'r> {
    pub fn new(registry: &'r PairRegistry, config: EngineConfig) -> Self {
        Self {
            registry,
            config,
            state: TraceState::default(),
            report: TraceReport::default(),
        }
    }

    /// Run a whole pass over trace lines
    ///
    /// **Public** - main entry point for a pre-built registry
    ///
    /// # Errors
    /// * `TraceError::FatalBlockState` - a block marker without a usable iteration
    pub fn run<'a, I>(mut self, lines: I) -> Result<TraceReport, TraceError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for (index, line) in lines.into_iter().enumerate() {
            self.ingest_line(index + 1, line)?;
        }

        debug!("Trace pass finished: {}", self.report.stats.summary());
        Ok(self.finish())
    }

    /// Process a single line (1-based `line_number`, used in diagnostics)
    pub fn ingest_line(&mut self, line_number: usize, line: &str) -> Result<(), TraceError> {
        self.report.stats.lines += 1;

        self.state.schema.observe_line(line);

        if BlockState::is_block_marker(line) {
            let iteration = self.state.block.open_block(line).ok_or_else(|| {
                TraceError::FatalBlockState {
                    line_number,
                    line: line.trim().to_string(),
                }
            })?;
            self.report.stats.blocks += 1;
            debug!(
                "Block {} opened at line {} (iteration {})",
                self.state.block.step_counter(),
                line_number,
                iteration
            );
        }

        if line.contains(META_DELIMITER) || line.trim().is_empty() {
            return Ok(());
        }

        self.report.stats.data_rows += 1;
        match self.parse_row(line) {
            RowOutcome::Accepted(observation) => {
                self.report.stats.observations += 1;
                self.report.observations.push(observation);
            }
            RowOutcome::UnresolvedSchema => {
                debug!("Line {}: data row before any column declaration", line_number);
                self.report.stats.unresolved_schema_rows += 1;
            }
            RowOutcome::Malformed => {
                debug!("Line {}: skipping malformed row: {}", line_number, line.trim());
                self.report.stats.malformed_rows += 1;
            }
            RowOutcome::Unregistered => self.report.stats.unregistered_rows += 1,
            RowOutcome::DroppedIterationZero => self.report.stats.dropped_iteration_zero += 1,
        }

        Ok(())
    }

    fn parse_row(&self, line: &str) -> RowOutcome {
        let Some(columns) = self.state.schema.resolved() else {
            return RowOutcome::UnresolvedSchema;
        };

        let fields: Vec<&str> = line.split_whitespace().collect();

        let Some(pair_id) = parse_pair_id(&fields, columns) else {
            return RowOutcome::Malformed;
        };
        if !self.registry.contains(pair_id) {
            return RowOutcome::Unregistered;
        }

        let iteration = self.state.block.current_iteration();
        if self.config.policy == IterationPolicy::DropIterationZero && iteration == 0 {
            return RowOutcome::DroppedIterationZero;
        }

        let Some(pressure) = parse_pressure(&fields, columns) else {
            return RowOutcome::Malformed;
        };

        RowOutcome::Accepted(Observation {
            pair_id,
            pressure,
            step: self.state.block.step_counter(),
            iteration,
        })
    }

    /// Current parser state (schema and block counters)
    pub fn state(&self) -> &TraceState {
        &self.state
    }

    pub fn finish(self) -> TraceReport {
        if self.report.stats.data_rows > 0 && self.report.stats.observations == 0 {
            warn!("Trace contained data rows but none matched a registered contact pair");
        }
        self.report
    }
}

fn parse_pair_id(fields: &[&str], columns: ResolvedColumns) -> Option<PairId> {
    fields.get(columns.pair_id)?.parse::<PairId>().ok()
}

fn parse_pressure(fields: &[&str], columns: ResolvedColumns) -> Option<f64> {
    fields
        .get(columns.pressure)?
        .parse::<f64>()
        .ok()
        .filter(|pressure| pressure.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: [&str; 2] = [
        r#"<COLUMN NUMBER=" 1">Contact Pair ID</COLUMN>"#,
        r#"<COLUMN NUMBER=" 2">Max. Contact Pressure</COLUMN>"#,
    ];

    fn registry() -> PairRegistry {
        [1, 2].into_iter().collect()
    }

    fn run(lines: &[&str], config: EngineConfig) -> Result<TraceReport, TraceError> {
        let registry = registry();
        PressureEngine::new(&registry, config).run(lines.iter().copied())
    }

    #[test]
    fn test_rows_before_schema_are_skipped() {
        let lines = [r#"<COLDATA ITERATION=" 1">"#, "1 10.0", SCHEMA[0], SCHEMA[1], "1 11.0"];
        let report = run(&lines, EngineConfig::new()).unwrap();

        assert_eq!(report.stats.unresolved_schema_rows, 1);
        assert_eq!(report.observations.len(), 1);
        assert_eq!(report.observations[0].pressure, 11.0);
    }

    #[test]
    fn test_unregistered_and_malformed_rows() {
        let lines = [
            SCHEMA[0],
            SCHEMA[1],
            r#"<COLDATA ITERATION=" 1">"#,
            "9 1.0",
            "x 1.0",
            "1 nan",
            "2",
            "2 4.5",
            "",
        ];
        let report = run(&lines, EngineConfig::new()).unwrap();

        assert_eq!(report.stats.unregistered_rows, 1);
        assert_eq!(report.stats.malformed_rows, 3);
        assert_eq!(report.stats.data_rows, 5);
        assert_eq!(report.observations.len(), 1);
        assert_eq!(report.observations[0].pair_id, 2);
    }

    #[test]
    fn test_observation_carries_block_state() {
        let lines = [
            SCHEMA[0],
            SCHEMA[1],
            r#"<COLDATA ITERATION=" 0">"#,
            "1 1.0",
            r#"<COLDATA ITERATION=" 4">"#,
            "1 2.0",
        ];
        let report = run(&lines, EngineConfig::new()).unwrap();

        let attributed: Vec<(u32, u32)> = report
            .observations
            .iter()
            .map(|o| (o.step, o.iteration))
            .collect();
        assert_eq!(attributed, vec![(1, 0), (2, 4)]);
    }

    #[test]
    fn test_drop_iteration_zero_policy() {
        let lines = [
            SCHEMA[0],
            SCHEMA[1],
            r#"<COLDATA ITERATION=" 0">"#,
            "1 1.0",
            r#"<COLDATA ITERATION=" 1">"#,
            "1 2.0",
        ];
        let config = EngineConfig::new().with_policy(IterationPolicy::DropIterationZero);
        let report = run(&lines, config).unwrap();

        assert_eq!(report.stats.dropped_iteration_zero, 1);
        assert_eq!(report.observations.len(), 1);
        assert_eq!(report.observations[0].step, 2);
    }

    #[test]
    fn test_fatal_block_state_names_line() {
        let lines = [SCHEMA[0], SCHEMA[1], r#"<COLDATA ITERATION=" ?">"#, "1 1.0"];
        let err = run(&lines, EngineConfig::new()).unwrap_err();

        match err {
            TraceError::FatalBlockState { line_number, line } => {
                assert_eq!(line_number, 3);
                assert!(line.contains("COLDATA"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_state_follows_each_line() {
        let registry = registry();
        let mut engine = PressureEngine::new(&registry, EngineConfig::new());

        engine.ingest_line(1, SCHEMA[0]).unwrap();
        assert_eq!(engine.state().schema.pair_id_column(), Some(0));
        assert_eq!(engine.state().schema.pressure_column(), None);

        engine.ingest_line(2, SCHEMA[1]).unwrap();
        engine.ingest_line(3, r#"<COLDATA MAX_ITERATION=" 9" ITERATION=" 1">"#).unwrap();
        assert_eq!(engine.state().schema.pressure_column(), Some(1));
        assert_eq!(engine.state().block.current_iteration(), 1);
        assert_eq!(engine.state().block.step_counter(), 1);

        engine.ingest_line(4, "1 2.0").unwrap();
        let report = engine.finish();
        assert_eq!(report.observations[0].iteration, 1);
    }

    #[test]
    fn test_schema_switch_mid_file() {
        let lines = [
            SCHEMA[0],
            SCHEMA[1],
            r#"<COLDATA ITERATION=" 1">"#,
            "1 3.0 99.0",
            r#"<COLUMN NUMBER=" 3">Max. Contact Pressure</COLUMN>"#,
            "1 3.0 99.0",
        ];
        let report = run(&lines, EngineConfig::new()).unwrap();

        let pressures: Vec<f64> = report.observations.iter().map(|o| o.pressure).collect();
        assert_eq!(pressures, vec![3.0, 99.0]);
    }
}

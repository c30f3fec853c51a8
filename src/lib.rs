//! Contact Pressure Trace
//!
//! Peak contact pressure per contact pair, extracted from the trace files a
//! mechanical solver writes while it runs.
//!
//! The solver emits a header file (`.nlh`) naming the contact pairs and a
//! trace file (`.cnd`) of column-addressed rows grouped into iteration
//! blocks. This crate resolves the columns, attributes every row to a step,
//! removes rows left behind by solver retries and hands back one
//! `(step, pressure)` series per pair.
//!
//! ## Getting Started
//!
//! ```bash
//! cp-trace extract --dir path/to/run --charts charts/
//! ```

pub mod commands;
pub mod discovery;
pub mod output;
pub mod parser;
pub mod series;
pub mod utils;

pub use discovery::{Readiness, RunFiles};
pub use parser::{extract_series, extract_series_from_files, EngineConfig, IterationPolicy};
pub use series::{Series, SeriesSet};

//! Configuration and constants for the engine and the CLI.

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Markup recognised in the header (.nlh) file
pub const CONTACT_PAIR_KEY: &str = "CONTACT_PAIR=";

// Markup recognised in the trace (.cnd) file
pub const PAIR_ID_COLUMN_MARKER: &str = "Contact Pair ID";
pub const PRESSURE_COLUMN_MARKER: &str = "Max. Contact Pressure";
pub const BLOCK_MARKER: &str = "COLDATA ";
pub const ITERATION_KEY: &str = "ITERATION=";

/// Any line containing this character is markup, never a data row
pub const META_DELIMITER: char = '<';

// Default file extensions written by the solver
pub const DEFAULT_HEADER_EXTENSION: &str = "nlh";
pub const DEFAULT_TRACE_EXTENSION: &str = "cnd";

/// Environment variable that switches on the drop-iteration-zero policy
pub const DROP_ITERATION_ZERO_ENV: &str = "CPTRACE_DROP_ITERATION_ZERO";

// Chart defaults (pixels)
pub const DEFAULT_CHART_WIDTH: u32 = 1000;
pub const DEFAULT_CHART_HEIGHT: u32 = 500;

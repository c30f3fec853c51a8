//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod extract;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use extract::{execute_extract, validate_args};
pub use models::{ExtractArgs, InputSource};
pub use utils::{display_schema, display_version, print_summary, validate_report_file};

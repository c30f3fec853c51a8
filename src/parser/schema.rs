//! Column schema declared inline in the trace file.
//!
//! The trace file names its columns with markup such as
//! `<COLUMN NUMBER=" 2">Contact Pair ID</COLUMN>`. A later declaration
//! replaces the earlier one for every row that follows it.

use super::markup::declared_column;
use crate::utils::config::{PAIR_ID_COLUMN_MARKER, PRESSURE_COLUMN_MARKER};
use log::debug;

/// Column positions currently in effect (0-based)
///
/// Starts unresolved. Rows cannot be read until both columns have been
/// declared at least once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnSchema {
    pair_id_column: Option<usize>,
    pressure_column: Option<usize>,
}

/// Fully resolved schema, handed to row parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub pair_id: usize,
    pub pressure: usize,
}

impl ColumnSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply any column declarations found on the line
    ///
    /// **Public** - called for every trace line
    ///
    /// # Returns
    /// True if the mapping changed. Malformed declarations leave the
    /// previous mapping untouched.
    pub fn observe_line(&mut self, line: &str) -> bool {
        let mut changed = false;

        if let Some(declared) = declared_column(line, PAIR_ID_COLUMN_MARKER) {
            changed |= Self::apply(&mut self.pair_id_column, declared, PAIR_ID_COLUMN_MARKER);
        }
        if let Some(declared) = declared_column(line, PRESSURE_COLUMN_MARKER) {
            changed |= Self::apply(&mut self.pressure_column, declared, PRESSURE_COLUMN_MARKER);
        }

        changed
    }

    fn apply(slot: &mut Option<usize>, declared: Option<usize>, marker: &str) -> bool {
        match declared {
            Some(column) => {
                debug!("'{}' is now column {}", marker, column);
                let changed = *slot != Some(column);
                *slot = Some(column);
                changed
            }
            None => {
                debug!("Ignoring malformed '{}' column declaration", marker);
                false
            }
        }
    }

    /// Both columns, if both have been declared
    pub fn resolved(&self) -> Option<ResolvedColumns> {
        Some(ResolvedColumns {
            pair_id: self.pair_id_column?,
            pressure: self.pressure_column?,
        })
    }

    pub fn pair_id_column(&self) -> Option<usize> {
        self.pair_id_column
    }

    pub fn pressure_column(&self) -> Option<usize> {
        self.pressure_column
    }
}

//! Solver iteration and step bookkeeping.

use super::markup::keyed_value;
use crate::utils::config::{BLOCK_MARKER, ITERATION_KEY};

/// Iteration and step counters in effect for the current data block
///
/// `step_counter` is bumped once per block-opening marker and never goes
/// back down during a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockState {
    current_iteration: u32,
    step_counter: u32,
}

impl BlockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the line opens a new data block
    pub fn is_block_marker(line: &str) -> bool {
        line.contains(BLOCK_MARKER)
    }

    /// Open a new block from a marker line
    ///
    /// **Public** - called by the trace engine on every block marker
    ///
    /// # Returns
    /// The parsed iteration, or `None` if the marker has no integer
    /// `ITERATION` value. On `None` the state is left unchanged and the
    /// caller must abort the pass.
    pub fn open_block(&mut self, line: &str) -> Option<u32> {
        let iteration = keyed_value(line, ITERATION_KEY)?.parse::<u32>().ok()?;

        self.current_iteration = iteration;
        self.step_counter += 1;

        Some(iteration)
    }

    pub fn current_iteration(&self) -> u32 {
        self.current_iteration
    }

    pub fn step_counter(&self) -> u32 {
        self.step_counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_increments_regardless_of_iteration() {
        let mut state = BlockState::new();

        for (expected_step, iteration) in [0u32, 0, 5, 1, 0].into_iter().enumerate() {
            let line = format!(r#"<COLDATA ITERATION=" {}">"#, iteration);
            assert_eq!(state.open_block(&line), Some(iteration));
            assert_eq!(state.step_counter(), expected_step as u32 + 1);
            assert_eq!(state.current_iteration(), iteration);
        }
    }

    #[test]
    fn test_bad_iteration_leaves_state_unchanged() {
        let mut state = BlockState::new();
        state.open_block(r#"<COLDATA ITERATION="2">"#);

        assert_eq!(state.open_block(r#"<COLDATA ITERATION=" two">"#), None);
        assert_eq!(state.open_block("<COLDATA SUBSTEP=\"1\">"), None);
        assert_eq!(state.step_counter(), 1);
        assert_eq!(state.current_iteration(), 2);
    }

    #[test]
    fn test_is_block_marker() {
        assert!(BlockState::is_block_marker(r#"<COLDATA ITERATION=" 1">"#));
        assert!(!BlockState::is_block_marker("</COLDATA>"));
        assert!(!BlockState::is_block_marker("1 2.0"));
    }
}

//! Removal of solver retry artifacts.
//!
//! When the solver abandons a non-convergent increment it starts again at
//! iteration 0. The observation recorded just before that restart belongs to
//! the abandoned attempt and is dropped; the iteration-0 row itself is kept
//! because it opens the corrected increment.

use crate::parser::Observation;
use log::debug;

/// Drop retry artifacts and renumber steps 1..N
///
/// **Public** - main entry point, expects one pair's observations in file order
///
/// # Algorithm
/// 1. Mark position `i - 1` wherever `iteration[i] == 0` and `iteration[i - 1] != 0`
/// 2. Remove marked positions
/// 3. Renumber `step` contiguously from 1
pub fn deduplicate(observations: &[Observation]) -> Vec<Observation> {
    let mut cleaned = remove_retry_artifacts(observations);
    renumber_steps(&mut cleaned);
    cleaned
}

/// Steps 1 and 2 of `deduplicate`, step numbers untouched
pub fn remove_retry_artifacts(observations: &[Observation]) -> Vec<Observation> {
    let stale: Vec<bool> = (0..observations.len())
        .map(|i| {
            observations
                .get(i + 1)
                .is_some_and(|next| next.iteration == 0 && observations[i].iteration != 0)
        })
        .collect();

    let kept: Vec<Observation> = observations
        .iter()
        .zip(&stale)
        .filter_map(|(observation, &is_stale)| (!is_stale).then_some(*observation))
        .collect();

    if kept.len() != observations.len() {
        debug!(
            "Dropped {} retry artifact(s) out of {} observations",
            observations.len() - kept.len(),
            observations.len()
        );
    }

    kept
}

/// Assign steps 1..N in sequence order
pub fn renumber_steps(observations: &mut [Observation]) {
    for (step, observation) in (1u32..).zip(observations.iter_mut()) {
        observation.step = step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_iterations(iterations: &[u32]) -> Vec<Observation> {
        iterations
            .iter()
            .enumerate()
            .map(|(i, &iteration)| Observation {
                pair_id: 1,
                pressure: i as f64 * 10.0,
                step: i as u32 + 1,
                iteration,
            })
            .collect()
    }

    fn iterations(observations: &[Observation]) -> Vec<u32> {
        observations.iter().map(|o| o.iteration).collect()
    }

    #[test]
    fn test_drops_observation_before_restart() {
        let cleaned = deduplicate(&with_iterations(&[1, 1, 2, 0, 3]));

        assert_eq!(iterations(&cleaned), vec![1, 1, 0, 3]);
        assert_eq!(cleaned.iter().map(|o| o.step).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        // the 20.0 reading belonged to the abandoned attempt
        assert_eq!(
            cleaned.iter().map(|o| o.pressure).collect::<Vec<_>>(),
            vec![0.0, 10.0, 30.0, 40.0]
        );
    }

    #[test]
    fn test_consecutive_zeros_only_drop_once() {
        let cleaned = deduplicate(&with_iterations(&[0, 0, 1, 0, 0, 2]));
        assert_eq!(iterations(&cleaned), vec![0, 0, 0, 0, 2]);
    }

    #[test]
    fn test_leading_zero_is_kept() {
        let cleaned = deduplicate(&with_iterations(&[0, 1, 2]));
        assert_eq!(iterations(&cleaned), vec![0, 1, 2]);
    }

    #[test]
    fn test_idempotent_once_no_restart_remains() {
        let once = deduplicate(&with_iterations(&[0, 1, 0, 1, 2]));
        assert_eq!(iterations(&once), vec![0, 0, 1, 2]);
        assert_eq!(deduplicate(&once), once);
    }

    #[test]
    fn test_empty() {
        assert!(deduplicate(&[]).is_empty());
    }
}

//! Per-pair pressure series built from raw trace observations.
//!
//! This module handles:
//! - Splitting the raw observation sequence by contact pair
//! - Removing solver retry artifacts
//! - Contiguous step numbering for plotting

pub mod dedup;

pub use dedup::{deduplicate, remove_retry_artifacts, renumber_steps};

use crate::parser::{Observation, PairId, PairRegistry};
use log::debug;

/// Deduplicated pressure history of one contact pair
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub pair_id: PairId,
    observations: Vec<Observation>,
}

impl Series {
    /// Build a series from one pair's raw observations (file order)
    pub fn from_raw(pair_id: PairId, raw: &[Observation]) -> Self {
        Self {
            pair_id,
            observations: deduplicate(raw),
        }
    }

    /// `(step, pressure)` points in step order
    pub fn points(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.observations.iter().map(|o| (o.step, o.pressure))
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Highest pressure in the series
    pub fn peak_pressure(&self) -> Option<f64> {
        self.observations.iter().map(|o| o.pressure).reduce(f64::max)
    }

    pub fn last_pressure(&self) -> Option<f64> {
        self.observations.last().map(|o| o.pressure)
    }
}

/// One series per registered pair, in registry order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    series: Vec<Series>,
}

impl SeriesSet {
    /// Series for `pair_id`, if the pair was registered
    pub fn get(&self, pair_id: PairId) -> Option<&Series> {
        self.series.iter().find(|s| s.pair_id == pair_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    pub fn pair_ids(&self) -> impl Iterator<Item = PairId> + '_ {
        self.series.iter().map(|s| s.pair_id)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total points across every series
    pub fn total_points(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }
}

impl<'a> IntoIterator for &'a SeriesSet {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

/// Build the final series for every registered pair
///
/// **Public** - main entry point after a trace pass
///
/// # Arguments
/// * `registry` - Pairs of interest; fixes output order
/// * `observations` - Raw observations in file order
///
/// # Returns
/// A `SeriesSet` with one (possibly empty) series per registered pair
pub fn build_series_set(registry: &PairRegistry, observations: &[Observation]) -> SeriesSet {
    let series = registry
        .iter()
        .map(|pair_id| {
            let raw: Vec<Observation> = observations
                .iter()
                .filter(|o| o.pair_id == pair_id)
                .copied()
                .collect();

            let series = Series::from_raw(pair_id, &raw);
            debug!(
                "Pair {}: {} raw observations, {} after deduplication",
                pair_id,
                raw.len(),
                series.len()
            );
            series
        })
        .collect();

    SeriesSet { series }
}

//! Contact pair registry loaded from the solver header (.nlh) file.
//!
//! Lines of interest carry a `CONTACT_PAIR="<id>"` attribute. Everything else
//! is ignored, and a marker line without a usable id is skipped rather than
//! failing the load.

use super::markup::keyed_value;
use crate::utils::config::CONTACT_PAIR_KEY;
use log::debug;
use std::collections::HashSet;

/// Solver-defined contact pair identifier
pub type PairId = u32;

/// Ordered set of contact pairs of interest
///
/// Membership is a set; iteration follows first-declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairRegistry {
    order: Vec<PairId>,
    members: HashSet<PairId>,
}

impl PairRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair id; returns false if it was already registered
    pub fn insert(&mut self, pair_id: PairId) -> bool {
        if self.members.insert(pair_id) {
            self.order.push(pair_id);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, pair_id: PairId) -> bool {
        self.members.contains(&pair_id)
    }

    /// Pair ids in declaration order
    pub fn iter(&self) -> impl Iterator<Item = PairId> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<PairId> for PairRegistry {
    fn from_iter<I: IntoIterator<Item = PairId>>(iter: I) -> Self {
        let mut registry = Self::new();
        for pair_id in iter {
            registry.insert(pair_id);
        }
        registry
    }
}

/// Build the registry from header file lines
///
/// **Public** - main entry point for the header file
///
/// # Arguments
/// * `lines` - Header file content, line by line
///
/// # Returns
/// Registry of every well-formed `CONTACT_PAIR` id, first occurrence order.
/// An empty registry is a valid result.
pub fn load_registry<'a, I>(lines: I) -> PairRegistry
where
    I: IntoIterator<Item = &'a str>,
{
    let mut registry = PairRegistry::new();

    for (index, line) in lines.into_iter().enumerate() {
        if !line.contains(CONTACT_PAIR_KEY) {
            continue;
        }

        match keyed_value(line, CONTACT_PAIR_KEY).and_then(|raw| raw.parse::<PairId>().ok()) {
            Some(pair_id) => {
                if !registry.insert(pair_id) {
                    debug!("Duplicate contact pair {} on header line {}", pair_id, index + 1);
                }
            }
            None => debug!(
                "Skipping malformed contact pair on header line {}: {}",
                index + 1,
                line.trim()
            ),
        }
    }

    debug!("Loaded {} contact pairs from header", registry.len());
    registry
}

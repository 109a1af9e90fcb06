//! All-pairs distance table keyed by unordered node pairs.

use std::collections::{BTreeMap, btree_map::Entry};

use crate::graph::NodeId;

/// An unordered pair of nodes stored as `(min, max)`.
///
/// # Examples
/// ```
/// use smallworld_core::NodePair;
///
/// assert_eq!(NodePair::new(3, 1), NodePair::new(1, 3));
/// assert_eq!(NodePair::new(3, 1).nodes(), (1, 3));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodePair {
    low: NodeId,
    high: NodeId,
}

impl NodePair {
    /// Creates the pair `{a, b}`.
    #[must_use]
    pub const fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Returns the endpoints ordered as `(min, max)`.
    #[must_use]
    pub const fn nodes(&self) -> (NodeId, NodeId) {
        (self.low, self.high)
    }
}

/// Hop counts between every mutually reachable pair of distinct nodes.
///
/// Iteration follows ascending pair order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PairDistances {
    entries: BTreeMap<NodePair, usize>,
}

impl PairDistances {
    /// Stores `hops` for `pair` unless the pair is already present.
    pub(crate) fn record(&mut self, pair: NodePair, hops: usize) {
        if let Entry::Vacant(slot) = self.entries.entry(pair) {
            slot.insert(hops);
        }
    }

    /// Returns the distance between `a` and `b` in either order.
    #[must_use]
    pub fn get(&self, a: NodeId, b: NodeId) -> Option<usize> {
        self.entries.get(&NodePair::new(a, b)).copied()
    }

    /// Returns the number of recorded pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no pair is mutually reachable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates recorded pairs and their distances.
    pub fn iter(&self) -> impl Iterator<Item = (NodePair, usize)> + '_ {
        self.entries.iter().map(|(pair, hops)| (*pair, *hops))
    }

    /// Returns the mean distance over recorded pairs, or `None` when empty.
    #[must_use]
    pub fn mean_distance(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let total: usize = self.entries.values().sum();
        Some(total as f64 / self.entries.len() as f64)
    }

    /// Returns the largest recorded distance, or `None` when empty.
    #[must_use]
    pub fn diameter(&self) -> Option<usize> {
        self.entries.values().copied().max()
    }
}

//! Benchmark parameter types.

use std::fmt;

use smallworld_core::Probability;

/// Parameters for one small-world benchmark graph.
#[derive(Clone, Copy, Debug)]
pub struct SmallWorldBenchParams {
    /// Number of nodes.
    pub node_count: usize,
    /// Ring-lattice degree.
    pub ring_degree: usize,
    /// Rewiring probability.
    pub probability: Probability,
}

impl fmt::Display for SmallWorldBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},k={},p={}",
            self.node_count,
            self.ring_degree,
            self.probability.get()
        )
    }
}

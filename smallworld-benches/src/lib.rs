//! Benchmark support crate for smallworld.
//!
//! Provides parameter types and seeded graph fixtures shared by the Criterion
//! benchmarks for small-world construction and shortest-path solving.

pub mod error;
pub mod params;

use rand::{SeedableRng, rngs::SmallRng};
use smallworld_core::{Graph, build_small_world};

use crate::{error::BenchSetupError, params::SmallWorldBenchParams};

/// Seed used for every benchmark graph.
pub const SEED: u64 = 42;

/// Builds the graph described by `params` from [`SEED`].
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when construction fails.
pub fn seeded_graph(params: &SmallWorldBenchParams) -> Result<Graph, BenchSetupError> {
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut graph = Graph::new(params.node_count, params.ring_degree);
    build_small_world(&mut graph, params.probability.get(), &mut rng)?;
    Ok(graph)
}

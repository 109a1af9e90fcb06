use rand::{SeedableRng, rngs::SmallRng};
use smallworld_core::{Graph, NodeId, build_small_world};

/// Builds a small-world graph from a fixed seed.
#[must_use]
pub fn seeded_graph(node_count: usize, ring_degree: usize, probability: f64, seed: u64) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = Graph::new(node_count, ring_degree);
    build_small_world(&mut graph, probability, &mut rng).expect("build must succeed");
    graph
}

/// Returns the edges of `graph` as `(min, max)` pairs, sorted.
#[must_use]
pub fn sorted_pairs(graph: &Graph) -> Vec<(NodeId, NodeId)> {
    let mut pairs: Vec<_> = graph.edges().iter().map(|edge| edge.canonical()).collect();
    pairs.sort_unstable();
    pairs
}

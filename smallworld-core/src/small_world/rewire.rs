//! Rewiring phase of small-world construction.
//!
//! Nodes are visited in ascending order, skipping the last. For each node the
//! neighbour list is captured when its turn begins and every captured
//! neighbour above it is considered once. The candidate pool for a selected
//! edge is rebuilt from the live adjacency, so swaps made earlier in the same
//! turn shrink or reshape the pools of later ones.

use rand::{Rng, distributions::Standard, seq::SliceRandom};
use tracing::{Level, debug, trace};

use crate::{
    error::{GraphError, Result},
    graph::{Graph, NodeId},
};

use super::Probability;

pub(super) fn rewire_edges<R: Rng + ?Sized>(
    graph: &mut Graph,
    probability: Probability,
    rng: &mut R,
) -> Result<usize> {
    let mut rewired = 0_usize;
    let last = graph.node_count().saturating_sub(1);

    for anchor in 0..last {
        let captured = graph.adjacency_of(anchor).to_vec();
        for neighbour in captured.into_iter().filter(|&n| n > anchor) {
            let draw: f64 = rng.sample(Standard);
            if tracing::enabled!(Level::TRACE) {
                trace!(anchor, neighbour, draw, "considering edge");
            }
            if draw >= probability.get() {
                continue;
            }
            let candidates = rewiring_candidates(graph, anchor);
            let &replacement = candidates
                .choose(rng)
                .ok_or(GraphError::NoCandidates { node: anchor })?;
            graph.swap_edge(anchor, neighbour, replacement)?;
            debug!(anchor, neighbour, replacement, "edge rewired");
            rewired += 1;
        }
    }

    Ok(rewired)
}

/// Nodes other than `anchor` that are not currently adjacent to it, ascending.
fn rewiring_candidates(graph: &Graph, anchor: NodeId) -> Vec<NodeId> {
    let mut excluded = vec![false; graph.node_count()];
    if let Some(slot) = excluded.get_mut(anchor) {
        *slot = true;
    }
    for &neighbour in graph.adjacency_of(anchor) {
        if let Some(slot) = excluded.get_mut(neighbour) {
            *slot = true;
        }
    }
    excluded
        .iter()
        .enumerate()
        .filter_map(|(node, &skip)| (!skip).then_some(node))
        .collect()
}

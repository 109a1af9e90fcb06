//! Reference solver: greedy minimum-label selection with unit weights.

use tracing::trace;

use crate::{
    error::Result,
    graph::{Graph, NodeId},
};

use super::{PathSolver, ShortestPaths};

/// Dijkstra-style solver that scans every unvisited node to pick the next one.
///
/// Among unvisited nodes with equal tentative distance the lowest id is
/// settled first. Callers must not rely on that order.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySolver;

impl PathSolver for GreedySolver {
    fn solve(&self, graph: &Graph, source: NodeId) -> Result<ShortestPaths> {
        graph.check_node(source)?;
        let mut paths = ShortestPaths::new(graph.node_count(), source);
        let mut unvisited = vec![true; graph.node_count()];

        while let Some((current, hops)) = closest_unvisited(&paths, &unvisited) {
            if let Some(slot) = unvisited.get_mut(current) {
                *slot = false;
            }
            for &neighbour in graph.adjacency_of(current) {
                paths.relax(neighbour, current, hops + 1);
            }
        }

        trace!(
            source,
            reachable = paths.reachable_count(),
            "greedy solve complete"
        );
        Ok(paths)
    }
}

fn closest_unvisited(paths: &ShortestPaths, unvisited: &[bool]) -> Option<(NodeId, usize)> {
    let mut best: Option<(NodeId, usize)> = None;
    for (node, _) in unvisited.iter().enumerate().filter(|&(_, &open)| open) {
        let Some(hops) = paths.distance(node) else {
            continue;
        };
        if best.is_none_or(|(_, known)| hops < known) {
            best = Some((node, hops));
        }
    }
    best
}

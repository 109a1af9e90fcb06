//! Priority-queue solver for larger graphs.

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::trace;

use crate::{
    error::Result,
    graph::{Graph, NodeId},
};

use super::{PathSolver, ShortestPaths};

/// Dijkstra with a binary heap and lazy deletion of stale entries.
///
/// Produces the same distances as [`super::GreedySolver`] in
/// `O((N + E) log N)` per source. Equally distant nodes are settled in heap
/// order, which is unspecified.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapSolver;

impl PathSolver for HeapSolver {
    fn solve(&self, graph: &Graph, source: NodeId) -> Result<ShortestPaths> {
        graph.check_node(source)?;
        let mut paths = ShortestPaths::new(graph.node_count(), source);
        let mut settled = vec![false; graph.node_count()];
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse((0_usize, source)));

        while let Some(Reverse((hops, current))) = frontier.pop() {
            match settled.get_mut(current) {
                Some(done) if !*done => *done = true,
                _ => continue,
            }
            for &neighbour in graph.adjacency_of(current) {
                if paths.relax(neighbour, current, hops + 1) {
                    frontier.push(Reverse((hops + 1, neighbour)));
                }
            }
        }

        trace!(
            source,
            reachable = paths.reachable_count(),
            "heap solve complete"
        );
        Ok(paths)
    }
}

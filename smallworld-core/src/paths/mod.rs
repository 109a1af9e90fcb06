//! Unweighted shortest paths over a [`Graph`].
//!
//! Every edge has unit weight, so distances are hop counts. Two solvers share
//! the [`PathSolver`] contract:
//!
//! - [`GreedySolver`] repeatedly scans the unvisited nodes for the smallest
//!   tentative distance. It is `O(N^2)` per source and is the reference
//!   behaviour used by [`shortest_paths`] and [`all_pairs_distances`].
//! - [`HeapSolver`] keeps tentative distances in a binary heap and suits
//!   larger graphs.
//!
//! Both produce identical distance maps. Predecessors may differ between them
//! wherever several shortest paths exist: the order in which equally distant
//! nodes are settled is not part of the contract.

mod greedy;
mod heap;
mod pairs;

use tracing::{info, instrument};

use crate::{
    error::Result,
    graph::{Graph, NodeId},
};

pub use self::{
    greedy::GreedySolver,
    heap::HeapSolver,
    pairs::{NodePair, PairDistances},
};

/// Single-source shortest-path algorithm over an unweighted [`Graph`].
pub trait PathSolver {
    /// Computes hop counts and a predecessor tree from `source`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidNode`] when `source` is out of
    /// bounds.
    fn solve(&self, graph: &Graph, source: NodeId) -> Result<ShortestPaths>;
}

/// Distances and predecessors from a single source node.
///
/// Nodes that cannot be reached from the source have neither a distance nor a
/// predecessor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPaths {
    source: NodeId,
    distances: Vec<Option<usize>>,
    predecessors: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    pub(crate) fn new(node_count: usize, source: NodeId) -> Self {
        let mut distances = vec![None; node_count];
        if let Some(slot) = distances.get_mut(source) {
            *slot = Some(0);
        }
        Self {
            source,
            distances,
            predecessors: vec![None; node_count],
        }
    }

    /// Returns the source node.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> NodeId { self.source }

    /// Returns the hop count to `node`, or `None` when it is unreachable.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<usize> {
        self.distances.get(node).copied().flatten()
    }

    /// Returns the node preceding `node` on its recorded shortest path.
    ///
    /// The source and unreachable nodes have no predecessor.
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node).copied().flatten()
    }

    /// Iterates `(node, distance)` over reachable nodes in ascending node order.
    ///
    /// The source is included with distance zero.
    pub fn reachable(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(node, distance)| distance.map(|d| (node, d)))
    }

    /// Returns the number of reachable nodes, including the source.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().flatten().count()
    }

    /// Reconstructs the recorded path from the source to `target`.
    ///
    /// Returns `None` when `target` is unreachable or out of bounds.
    ///
    /// # Examples
    /// ```
    /// use smallworld_core::{Graph, shortest_paths};
    ///
    /// let graph = Graph::with_edges(4, &[(0, 1), (1, 2), (2, 3)])?;
    /// let paths = shortest_paths(&graph, 0)?;
    /// assert_eq!(paths.path_to(3), Some(vec![0, 1, 2, 3]));
    /// # Ok::<(), smallworld_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        let hops = self.distance(target)?;
        let mut path = Vec::with_capacity(hops + 1);
        let mut current = target;
        path.push(current);
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    /// Records `distance` and `predecessor` for `node` when it improves on
    /// the current entry. Returns `true` when the entry changed.
    pub(crate) fn relax(&mut self, node: NodeId, predecessor: NodeId, distance: usize) -> bool {
        let Some(slot) = self.distances.get_mut(node) else {
            return false;
        };
        if slot.is_some_and(|known| known <= distance) {
            return false;
        }
        *slot = Some(distance);
        if let Some(entry) = self.predecessors.get_mut(node) {
            *entry = Some(predecessor);
        }
        true
    }
}

/// Computes shortest paths from `source` with the reference [`GreedySolver`].
///
/// # Errors
/// Returns [`crate::GraphError::InvalidNode`] when `source` is out of bounds.
///
/// # Examples
/// ```
/// use smallworld_core::{Graph, shortest_paths};
///
/// let graph = Graph::with_edges(4, &[(0, 1), (2, 3)])?;
/// let paths = shortest_paths(&graph, 0)?;
/// assert_eq!(paths.reachable().collect::<Vec<_>>(), vec![(0, 0), (1, 1)]);
/// assert_eq!(paths.distance(3), None);
/// # Ok::<(), smallworld_core::GraphError>(())
/// ```
pub fn shortest_paths(graph: &Graph, source: NodeId) -> Result<ShortestPaths> {
    GreedySolver.solve(graph, source)
}

/// Computes the distance of every mutually reachable pair of distinct nodes
/// with the reference [`GreedySolver`].
///
/// # Errors
/// Propagates solver errors; the reference solver cannot fail for sources
/// drawn from the graph itself.
///
/// # Examples
/// ```
/// use smallworld_core::{Graph, all_pairs_distances};
///
/// let cycle = Graph::with_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])?;
/// let distances = all_pairs_distances(&cycle)?;
/// assert_eq!(distances.len(), 6);
/// assert_eq!(distances.get(2, 0), Some(2));
/// # Ok::<(), smallworld_core::GraphError>(())
/// ```
pub fn all_pairs_distances(graph: &Graph) -> Result<PairDistances> {
    all_pairs_distances_with(graph, &GreedySolver)
}

/// Computes all-pairs distances with the supplied solver.
///
/// The solver runs once per node; each unordered pair is recorded the first
/// time it is reached.
///
/// # Errors
/// Propagates the first error returned by `solver`.
#[instrument(
    name = "paths.all_pairs",
    err,
    skip(graph, solver),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn all_pairs_distances_with<S: PathSolver + ?Sized>(
    graph: &Graph,
    solver: &S,
) -> Result<PairDistances> {
    let mut distances = PairDistances::default();
    for source in graph.nodes() {
        let paths = solver.solve(graph, source)?;
        for (node, hops) in paths.reachable() {
            if node != source {
                distances.record(NodePair::new(source, node), hops);
            }
        }
    }
    info!(pairs = distances.len(), "all-pairs distances computed");
    Ok(distances)
}

//! Consistency checks between the edge list and the adjacency.
//!
//! The checks walk both views and report the first disagreement: self-loops,
//! duplicate pairs, edges missing from an endpoint's adjacency, neighbours
//! without a backing edge, and asymmetric neighbour lists.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{Level, debug, trace};

use super::{Graph, NodeId};

/// A violated structural invariant of [`Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphInvariantViolation {
    /// An edge joins a node to itself.
    #[error("edge list contains a self-loop on node {node}")]
    SelfLoop {
        /// The looping node.
        node: NodeId,
    },
    /// An unordered pair appears more than once in the edge list.
    #[error("edge ({left}, {right}) appears more than once")]
    DuplicateEdge {
        /// Smaller endpoint.
        left: NodeId,
        /// Larger endpoint.
        right: NodeId,
    },
    /// An edge-list entry is missing from an endpoint's adjacency.
    #[error("edge ({origin}, {target}) is missing from the adjacency of {origin}")]
    MissingAdjacency {
        /// Node whose adjacency lacks the neighbour.
        origin: NodeId,
        /// The absent neighbour.
        target: NodeId,
    },
    /// An adjacency entry has no matching edge-list entry.
    #[error("node {origin} lists neighbour {target} without a backing edge")]
    UnbackedNeighbour {
        /// Node whose adjacency holds the stray entry.
        origin: NodeId,
        /// The listed neighbour.
        target: NodeId,
    },
    /// A node lists a neighbour more than once.
    #[error("node {origin} lists neighbour {target} more than once")]
    RepeatedNeighbour {
        /// Node whose adjacency repeats an entry.
        origin: NodeId,
        /// The repeated neighbour.
        target: NodeId,
    },
    /// An endpoint lies outside the node range.
    #[error("node {node} is out of bounds for {node_count} nodes")]
    OutOfBounds {
        /// The offending identifier.
        node: NodeId,
        /// Number of nodes in the graph.
        node_count: usize,
    },
}

impl Graph {
    /// Verifies that the edge list and adjacency encode the same simple graph.
    ///
    /// When this returns `Ok(())`, every node's degree equals the number of
    /// edges incident to it and the degree sum is twice the edge count.
    ///
    /// # Errors
    /// Returns the first [`GraphInvariantViolation`] encountered.
    ///
    /// # Examples
    /// ```
    /// use smallworld_core::Graph;
    ///
    /// let graph = Graph::with_edges(3, &[(0, 1), (1, 2)])?;
    /// assert!(graph.check_invariants().is_ok());
    /// # Ok::<(), smallworld_core::GraphError>(())
    /// ```
    pub fn check_invariants(&self) -> Result<(), GraphInvariantViolation> {
        if tracing::enabled!(Level::TRACE) {
            trace!(
                nodes = self.node_count,
                edges = self.edges.len(),
                "checking graph invariants"
            );
        }
        let pairs = self.check_edge_list()?;
        self.check_adjacency(&pairs)
    }

    fn check_edge_list(&self) -> Result<HashSet<(NodeId, NodeId)>, GraphInvariantViolation> {
        let mut pairs = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            for node in [edge.source, edge.target] {
                if node >= self.node_count {
                    return Err(GraphInvariantViolation::OutOfBounds {
                        node,
                        node_count: self.node_count,
                    });
                }
            }
            if edge.source == edge.target {
                return Err(GraphInvariantViolation::SelfLoop { node: edge.source });
            }
            let (left, right) = edge.canonical();
            if !pairs.insert((left, right)) {
                return Err(GraphInvariantViolation::DuplicateEdge { left, right });
            }
            for (origin, target) in [(edge.source, edge.target), (edge.target, edge.source)] {
                if !self.adjacency_of(origin).contains(&target) {
                    debug!(origin, target, "edge missing from adjacency");
                    return Err(GraphInvariantViolation::MissingAdjacency { origin, target });
                }
            }
        }
        Ok(pairs)
    }

    fn check_adjacency(
        &self,
        pairs: &HashSet<(NodeId, NodeId)>,
    ) -> Result<(), GraphInvariantViolation> {
        for (origin, neighbours) in self.adjacency.iter().enumerate() {
            let mut listed = HashSet::with_capacity(neighbours.len());
            for &target in neighbours {
                if !listed.insert(target) {
                    return Err(GraphInvariantViolation::RepeatedNeighbour { origin, target });
                }
                let key = if origin <= target {
                    (origin, target)
                } else {
                    (target, origin)
                };
                if !pairs.contains(&key) {
                    debug!(origin, target, "neighbour without backing edge");
                    return Err(GraphInvariantViolation::UnbackedNeighbour { origin, target });
                }
            }
        }
        Ok(())
    }
}

//! Undirected graph store with two synchronised views of the edge set.
//!
//! [`Graph`] keeps an ordered list of unique undirected edges alongside a
//! node → neighbour adjacency. Both structures are private and only change
//! through the mutation methods on [`Graph`], each of which validates its
//! arguments before touching either view. After every successful call the two
//! views describe the same simple graph; [`Graph::check_invariants`] verifies
//! this on demand.

mod invariants;

use std::{collections::HashSet, ops::Range};

use tracing::trace;

use crate::error::{GraphError, Result};

pub use self::invariants::GraphInvariantViolation;

/// Identifier of a node, always in `[0, node_count)`.
pub type NodeId = usize;

/// An undirected edge in the orientation it was inserted with.
///
/// Equality is orientation-sensitive; use [`Edge::connects`] to compare
/// undirected endpoints.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
}

impl Edge {
    pub(crate) const fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    /// Returns the first endpoint as inserted.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> NodeId { self.source }

    /// Returns the second endpoint as inserted.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> NodeId { self.target }

    /// Returns `true` when this edge joins `a` and `b` in either orientation.
    #[must_use]
    pub const fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// Returns the endpoints ordered as `(min, max)`.
    #[must_use]
    pub const fn canonical(&self) -> (NodeId, NodeId) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

impl From<Edge> for (NodeId, NodeId) {
    fn from(edge: Edge) -> Self {
        (edge.source, edge.target)
    }
}

/// A simple undirected graph over a fixed node set.
///
/// # Examples
/// ```
/// use smallworld_core::Graph;
///
/// let mut graph = Graph::new(4, 2);
/// graph.add_edge(0, 1)?;
/// graph.add_edge(1, 2)?;
/// assert_eq!(graph.degree(1)?, 2);
/// assert_eq!(graph.edge_count(), 2);
///
/// graph.remove_edge(2, 1)?;
/// assert_eq!(graph.neighbours(1)?, &[0]);
/// # Ok::<(), smallworld_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    node_count: usize,
    ring_degree: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<NodeId>>,
}

impl Graph {
    /// Creates an empty graph over nodes `0..node_count`.
    ///
    /// `ring_degree` is the target mean degree consumed by
    /// [`crate::build_small_world`]; the store itself never reads it.
    #[must_use]
    pub fn new(node_count: usize, ring_degree: usize) -> Self {
        Self {
            node_count,
            ring_degree,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Creates a graph holding the supplied undirected edges, in order.
    ///
    /// The ring degree is set to zero; the result is intended for analysis
    /// rather than small-world construction.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNode`] or [`GraphError::SelfLoop`] for the
    /// first pair that [`Graph::add_edge`] rejects.
    ///
    /// # Examples
    /// ```
    /// use smallworld_core::Graph;
    ///
    /// let cycle = Graph::with_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])?;
    /// assert_eq!(cycle.edge_count(), 4);
    /// # Ok::<(), smallworld_core::GraphError>(())
    /// ```
    pub fn with_edges(node_count: usize, pairs: &[(NodeId, NodeId)]) -> Result<Self> {
        let mut graph = Self::new(node_count, 0);
        for &(a, b) in pairs {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the ring degree requested at construction time.
    #[must_use]
    #[rustfmt::skip]
    pub const fn ring_degree(&self) -> usize { self.ring_degree }

    /// Returns the node identifiers in ascending order.
    #[must_use]
    pub const fn nodes(&self) -> Range<NodeId> {
        0..self.node_count
    }

    /// Returns the edge list in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the graph has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the neighbours of `node` in adjacency order.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNode`] when `node` is out of bounds.
    pub fn neighbours(&self, node: NodeId) -> Result<&[NodeId]> {
        self.check_node(node)?;
        Ok(self.adjacency_of(node))
    }

    /// Returns the number of neighbours of `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNode`] when `node` is out of bounds.
    pub fn degree(&self, node: NodeId) -> Result<usize> {
        self.neighbours(node).map(<[NodeId]>::len)
    }

    /// Returns `true` when `a` and `b` are adjacent.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNode`] when either node is out of bounds.
    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> Result<bool> {
        self.check_nodes(&[a, b])?;
        Ok(self.adjacency_of(a).contains(&b))
    }

    /// Adds the undirected edge `a–b`.
    ///
    /// Adding an edge that already exists in either orientation is a no-op.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNode`] when either node is out of bounds
    /// and [`GraphError::SelfLoop`] when `a == b`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        self.check_nodes(&[a, b])?;
        if a == b {
            return Err(GraphError::SelfLoop { node: a });
        }
        if self.adjacency_of(a).contains(&b) {
            trace!(a, b, "edge already present");
            return Ok(());
        }
        self.edges.push(Edge::new(a, b));
        push_unique(&mut self.adjacency, a, b);
        push_unique(&mut self.adjacency, b, a);
        Ok(())
    }

    /// Removes the undirected edge `a–b`.
    ///
    /// The relative order of the remaining edges and neighbours is preserved.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNode`] when either node is out of bounds
    /// and [`GraphError::InvalidEdge`] when the edge does not exist.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        self.check_nodes(&[a, b])?;
        let position = self.edge_position(a, b)?;
        self.edges.remove(position);
        remove_neighbour(&mut self.adjacency, a, b);
        remove_neighbour(&mut self.adjacency, b, a);
        Ok(())
    }

    /// Replaces the edge `a–b` with `a–c`.
    ///
    /// The `a–b` entry is removed from the edge list, `(a, c)` is appended, and
    /// the adjacency is rebuilt from the edge list. Rewiring calls this once per
    /// selected edge, so the full rebuild is not amortised across swaps.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNode`] when any node is out of bounds,
    /// [`GraphError::InvalidEdge`] when `a–b` does not exist, and
    /// [`GraphError::InvalidSwapTarget`] when `c` equals `a` or is already a
    /// neighbour of `a`.
    ///
    /// # Examples
    /// ```
    /// use smallworld_core::Graph;
    ///
    /// let mut graph = Graph::with_edges(4, &[(0, 1), (1, 2)])?;
    /// graph.swap_edge(1, 0, 3)?;
    /// assert!(graph.contains_edge(1, 3)?);
    /// assert!(!graph.contains_edge(0, 1)?);
    /// assert_eq!(graph.edge_count(), 2);
    /// # Ok::<(), smallworld_core::GraphError>(())
    /// ```
    pub fn swap_edge(&mut self, a: NodeId, b: NodeId, c: NodeId) -> Result<()> {
        self.check_nodes(&[a, b, c])?;
        let position = self.edge_position(a, b)?;
        if c == a || self.adjacency_of(a).contains(&c) {
            return Err(GraphError::InvalidSwapTarget {
                anchor: a,
                target_node: c,
            });
        }
        self.edges.remove(position);
        self.edges.push(Edge::new(a, c));
        self.rebuild_adjacency_from_edges();
        Ok(())
    }

    /// Rebuilds the adjacency from the edge list.
    ///
    /// Neighbour order follows edge-list order. Calling this repeatedly yields
    /// the same adjacency.
    pub fn rebuild_adjacency_from_edges(&mut self) {
        let mut adjacency = vec![Vec::new(); self.node_count];
        for edge in &self.edges {
            push_unique(&mut adjacency, edge.source, edge.target);
            push_unique(&mut adjacency, edge.target, edge.source);
        }
        self.adjacency = adjacency;
    }

    /// Rebuilds the edge list from the adjacency.
    ///
    /// Nodes are visited in ascending order and each unordered pair is emitted
    /// once, oriented from the node that lists it first. Calling this
    /// repeatedly yields the same edge list.
    pub fn rebuild_edges_from_adjacency(&mut self) {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for (node, neighbours) in self.adjacency.iter().enumerate() {
            for &neighbour in neighbours {
                let edge = Edge::new(node, neighbour);
                if seen.insert(edge.canonical()) {
                    edges.push(edge);
                }
            }
        }
        self.edges = edges;
    }

    pub(crate) fn check_node(&self, node: NodeId) -> Result<()> {
        if node < self.node_count {
            Ok(())
        } else {
            Err(GraphError::InvalidNode {
                node,
                node_count: self.node_count,
            })
        }
    }

    fn check_nodes(&self, nodes: &[NodeId]) -> Result<()> {
        nodes.iter().try_for_each(|&node| self.check_node(node))
    }

    /// Neighbours of a node already known to be in bounds.
    pub(crate) fn adjacency_of(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    fn edge_position(&self, a: NodeId, b: NodeId) -> Result<usize> {
        self.edges
            .iter()
            .position(|edge| edge.connects(a, b))
            .ok_or(GraphError::InvalidEdge {
                source_node: a,
                target_node: b,
            })
    }
}

fn push_unique(adjacency: &mut [Vec<NodeId>], node: NodeId, neighbour: NodeId) {
    if let Some(list) = adjacency.get_mut(node) {
        if !list.contains(&neighbour) {
            list.push(neighbour);
        }
    }
}

fn remove_neighbour(adjacency: &mut [Vec<NodeId>], node: NodeId, neighbour: NodeId) {
    if let Some(list) = adjacency.get_mut(node) {
        if let Some(position) = list.iter().position(|&n| n == neighbour) {
            list.remove(position);
        }
    }
}

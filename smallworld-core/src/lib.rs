//! Small-world graph core library.
//!
//! Provides a dual-representation undirected [`Graph`] store, Watts–Strogatz
//! construction via [`build_small_world`], and unweighted shortest paths via
//! [`shortest_paths`] and [`all_pairs_distances`].
//!
//! Everything here is synchronous and owns no global state: independent
//! [`Graph`] instances can be built and analysed on separate threads, each
//! with its own random source.

mod error;
mod graph;
mod paths;
mod small_world;
#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result},
    graph::{Edge, Graph, GraphInvariantViolation, NodeId},
    paths::{
        GreedySolver, HeapSolver, NodePair, PairDistances, PathSolver, ShortestPaths,
        all_pairs_distances, all_pairs_distances_with, shortest_paths,
    },
    small_world::{Probability, SmallWorldSummary, build_small_world},
};

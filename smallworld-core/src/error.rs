//! Error types for the small-world core library.
//!
//! Defines the error enum exposed by the public API, its stable code table,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by graph mutation, construction and analysis.
///
/// Every variant is a precondition violation detected before the graph is
/// touched, so an `Err` never leaves a [`crate::Graph`] half-mutated.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An operation referenced a node identifier outside `[0, node_count)`.
    #[error("node {node} is out of bounds for a graph of {node_count} nodes")]
    InvalidNode {
        /// The offending node identifier.
        node: NodeId,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// An operation referenced an edge that does not exist in either orientation.
    #[error("edge ({source_node}, {target_node}) does not exist")]
    InvalidEdge {
        /// First endpoint as supplied by the caller.
        source_node: NodeId,
        /// Second endpoint as supplied by the caller.
        target_node: NodeId,
    },
    /// An edge from a node to itself was requested.
    #[error("self-loop on node {node} is not permitted")]
    SelfLoop {
        /// The node that would have been connected to itself.
        node: NodeId,
    },
    /// A swap target equals the anchor or is already one of its neighbours.
    #[error("node {target_node} cannot replace a neighbour of node {anchor}")]
    InvalidSwapTarget {
        /// Endpoint kept by the swap.
        anchor: NodeId,
        /// Rejected replacement endpoint.
        target_node: NodeId,
    },
    /// A construction algorithm was invoked on a graph that already has edges.
    #[error("graph already holds {edges} edges; construction requires an empty graph")]
    NotEmpty {
        /// Number of edges present when construction was attempted.
        edges: usize,
    },
    /// Rewiring probability outside `[0, 1]` (or NaN).
    #[error("rewiring probability must lie in [0, 1] (got {got})")]
    InvalidProbability {
        /// The rejected probability.
        got: f64,
    },
    /// Every other node is already adjacent to the endpoint being rewired.
    #[error("node {node} is adjacent to every other node; no rewiring target exists")]
    NoCandidates {
        /// The fixed endpoint whose candidate pool was empty.
        node: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An operation referenced a node identifier outside the graph.
        InvalidNode => InvalidNode { .. } => "GRAPH_INVALID_NODE",
        /// An operation referenced an edge that does not exist.
        InvalidEdge => InvalidEdge { .. } => "GRAPH_INVALID_EDGE",
        /// An edge from a node to itself was requested.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// A swap target equals the anchor or is already adjacent to it.
        InvalidSwapTarget => InvalidSwapTarget { .. } => "GRAPH_INVALID_SWAP_TARGET",
        /// Construction was invoked on a non-empty graph.
        NotEmpty => NotEmpty { .. } => "GRAPH_NOT_EMPTY",
        /// Rewiring probability outside `[0, 1]`.
        InvalidProbability => InvalidProbability { .. } => "GRAPH_INVALID_PROBABILITY",
        /// No rewiring target remained for a node.
        NoCandidates => NoCandidates { .. } => "GRAPH_NO_CANDIDATES",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;

//! Watts–Strogatz small-world construction.
//!
//! Construction runs in two phases over an empty [`Graph`]:
//!
//! - A ring lattice joins every node to the `K / 2` nearest nodes on each side
//!   of a circular ordering. `K` is halved with integer division, so an odd
//!   ring degree produces lattice degree `K - 1`.
//! - A rewiring pass visits every lattice edge once through its smaller
//!   endpoint and, with probability `p`, moves the far endpoint to a node
//!   drawn uniformly from those not yet adjacent to the near endpoint.
//!
//! Rewiring moves endpoints but never changes the edge count. The random
//! source is supplied by the caller, so a seeded generator reproduces the same
//! graph.

mod lattice;
mod rewire;

use rand::Rng;
use tracing::{field, info, instrument};

use crate::{
    error::{GraphError, Result},
    graph::Graph,
};

/// A rewiring probability validated to lie in `[0, 1]`.
///
/// # Examples
/// ```
/// use smallworld_core::{GraphError, Probability};
///
/// assert_eq!(Probability::new(0.25)?.get(), 0.25);
/// assert!(matches!(
///     Probability::new(1.5),
///     Err(GraphError::InvalidProbability { .. })
/// ));
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    /// Validates `value` as a probability.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidProbability`] when `value` is NaN or lies
    /// outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GraphError::InvalidProbability { got: value })
        }
    }

    /// Returns the raw probability.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> f64 { self.0 }

    /// Returns `true` when no edge can ever be selected for rewiring.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 <= 0.0
    }
}

impl TryFrom<f64> for Probability {
    type Error = GraphError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

/// Counts reported by [`build_small_world`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SmallWorldSummary {
    lattice_edges: usize,
    rewired_edges: usize,
}

impl SmallWorldSummary {
    /// Returns the number of edges created by the ring lattice phase.
    ///
    /// The finished graph holds exactly this many edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn lattice_edges(&self) -> usize { self.lattice_edges }

    /// Returns the number of edges whose far endpoint was moved.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rewired_edges(&self) -> usize { self.rewired_edges }
}

/// Populates an empty `graph` with one sampled Watts–Strogatz graph.
///
/// The ring degree is taken from [`Graph::ring_degree`]. Construction runs on
/// a staged copy that replaces `graph` only once both phases succeed, so on
/// error `graph` is left untouched. With `probability == 0` no random values
/// are drawn and the result is exactly the ring lattice.
///
/// # Errors
/// Returns [`GraphError::NotEmpty`] when `graph` already has edges,
/// [`GraphError::InvalidProbability`] when `probability` lies outside
/// `[0, 1]`, and [`GraphError::NoCandidates`] when an edge selected for
/// rewiring has an endpoint already adjacent to every other node.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use smallworld_core::{Graph, build_small_world};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let mut graph = Graph::new(20, 4);
/// let summary = build_small_world(&mut graph, 0.3, &mut rng)?;
/// assert_eq!(summary.lattice_edges(), 40);
/// assert_eq!(graph.edge_count(), 40);
/// # Ok::<(), smallworld_core::GraphError>(())
/// ```
#[instrument(
    name = "small_world.build",
    err,
    skip(graph, rng),
    fields(
        nodes = graph.node_count(),
        ring_degree = graph.ring_degree(),
        rewired = field::Empty,
    ),
)]
pub fn build_small_world<R: Rng + ?Sized>(
    graph: &mut Graph,
    probability: f64,
    rng: &mut R,
) -> Result<SmallWorldSummary> {
    if !graph.is_empty() {
        return Err(GraphError::NotEmpty {
            edges: graph.edge_count(),
        });
    }
    let probability = Probability::new(probability)?;

    let mut staged = graph.clone();
    let lattice_edges = lattice::add_ring_lattice(&mut staged)?;
    let rewired_edges = if probability.is_zero() {
        0
    } else {
        rewire::rewire_edges(&mut staged, probability, rng)?
    };
    *graph = staged;

    tracing::Span::current().record("rewired", rewired_edges);
    info!(
        lattice_edges,
        rewired_edges,
        probability = probability.get(),
        "small-world graph built"
    );
    Ok(SmallWorldSummary {
        lattice_edges,
        rewired_edges,
    })
}

#[cfg(test)]
mod tests;

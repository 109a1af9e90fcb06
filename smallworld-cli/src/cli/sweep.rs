//! Probability sweep: repeated builds tabulated as degree histograms.

use rand::{SeedableRng, rngs::SmallRng};
use rayon::prelude::*;
use serde::Serialize;
use smallworld_core::{Graph, GraphError, build_small_world};
use tracing::{debug, info, instrument};

const SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Degree histograms for every probability in a sweep.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepReport {
    /// Nodes per graph.
    pub node_count: usize,
    /// Requested ring-lattice degree.
    pub ring_degree: usize,
    /// Graphs built per probability.
    pub reps: u32,
    /// Base seed every replicate seed is derived from.
    pub seed: u64,
    /// One entry per probability, in ascending order.
    pub points: Vec<SweepPoint>,
}

/// Histograms of all replicates built at one probability.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Rewiring probability.
    pub probability: f64,
    /// One row per replicate. Entry `d` is the fraction of nodes with degree
    /// `d`; rows are zero-padded to the widest row at this probability.
    pub histograms: Vec<Vec<f64>>,
}

/// Derives the seed for replicate `index` from `base_seed`.
///
/// The result depends only on its inputs, so a sweep is reproducible however
/// rayon schedules the replicates.
///
/// # Examples
/// ```
/// use smallworld_cli::cli::derive_seed;
///
/// assert_eq!(derive_seed(7, 3), derive_seed(7, 3));
/// assert_ne!(derive_seed(7, 3), derive_seed(7, 4));
/// ```
#[must_use]
#[inline]
pub fn derive_seed(base_seed: u64, index: u64) -> u64 {
    splitmix64(base_seed ^ index.wrapping_add(1).wrapping_mul(SEED_SPACING))
}

#[inline]
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}

/// Returns the normalised degree distribution of `graph`.
///
/// Entry `d` is the fraction of nodes with degree `d`, covering every degree
/// from zero to the maximum. An empty graph yields an empty histogram.
///
/// # Errors
/// Propagates node lookup failures from the graph.
///
/// # Examples
/// ```
/// use smallworld_cli::cli::degree_histogram;
/// use smallworld_core::Graph;
///
/// let star = Graph::with_edges(4, &[(0, 1), (0, 2), (0, 3)])?;
/// assert_eq!(degree_histogram(&star)?, vec![0.0, 0.75, 0.0, 0.25]);
/// # Ok::<(), smallworld_core::GraphError>(())
/// ```
pub fn degree_histogram(graph: &Graph) -> Result<Vec<f64>, GraphError> {
    let mut counts: Vec<u32> = Vec::new();
    for node in graph.nodes() {
        let degree = graph.degree(node)?;
        if counts.len() <= degree {
            counts.resize(degree + 1, 0);
        }
        if let Some(slot) = counts.get_mut(degree) {
            *slot += 1;
        }
    }
    let total = f64::from(counts.iter().sum::<u32>());
    Ok(counts
        .into_iter()
        .map(|count| f64::from(count) / total)
        .collect())
}

fn pad_rows(rows: &mut [Vec<f64>]) {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in rows {
        row.resize(width, 0.0);
    }
}

fn run_replicate(
    node_count: usize,
    ring_degree: usize,
    probability: f64,
    seed: u64,
) -> Result<Vec<f64>, GraphError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = Graph::new(node_count, ring_degree);
    build_small_world(&mut graph, probability, &mut rng)?;
    degree_histogram(&graph)
}

/// Builds `reps` graphs at each of `steps` probabilities `1/steps, ..., 1`.
///
/// Replicates at one probability run in parallel, each on its own graph with
/// its own generator seeded by [`derive_seed`].
///
/// # Errors
/// Returns the first [`GraphError`] raised by any replicate, for example
/// [`GraphError::NoCandidates`] when a node has nowhere to rewire to.
#[instrument(
    name = "sweep.run",
    err,
    fields(points = steps),
)]
pub(crate) fn run_sweep(
    node_count: usize,
    ring_degree: usize,
    reps: u32,
    steps: u32,
    seed: u64,
) -> Result<SweepReport, GraphError> {
    let mut points = Vec::new();
    for step in 1..=steps {
        let probability = f64::from(step) / f64::from(steps);
        let first_index = u64::from(step - 1) * u64::from(reps);
        let mut histograms = (0..reps)
            .into_par_iter()
            .map(|rep| {
                let replicate_seed = derive_seed(seed, first_index + u64::from(rep));
                run_replicate(node_count, ring_degree, probability, replicate_seed)
            })
            .collect::<Result<Vec<_>, _>>()?;
        pad_rows(&mut histograms);
        debug!(probability, replicates = histograms.len(), "sweep point done");
        points.push(SweepPoint {
            probability,
            histograms,
        });
    }
    info!(points = points.len(), "sweep complete");
    Ok(SweepReport {
        node_count,
        ring_degree,
        reps,
        seed,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn derived_seeds_are_distinct_across_indices() {
        let seeds: std::collections::HashSet<u64> =
            (0..1_000).map(|index| derive_seed(42, index)).collect();
        assert_eq!(seeds.len(), 1_000);
    }

    #[rstest]
    #[case::ragged(
        vec![vec![0.5, 0.5], vec![1.0], vec![]],
        vec![vec![0.5, 0.5], vec![1.0, 0.0], vec![0.0, 0.0]],
    )]
    #[case::uniform(vec![vec![1.0], vec![1.0]], vec![vec![1.0], vec![1.0]])]
    #[case::empty(vec![], vec![])]
    fn pad_rows_extends_to_widest(
        #[case] mut rows: Vec<Vec<f64>>,
        #[case] expected: Vec<Vec<f64>>,
    ) {
        pad_rows(&mut rows);
        assert_eq!(rows, expected);
    }

    #[rstest]
    fn lattice_histogram_is_a_single_spike() {
        let histogram = run_replicate(12, 4, 0.0, 0).expect("lattice builds");
        assert_eq!(histogram, vec![0.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[rstest]
    fn empty_graph_has_empty_histogram() {
        let graph = Graph::new(0, 0);
        assert!(degree_histogram(&graph).expect("no nodes").is_empty());
    }

    #[rstest]
    fn isolated_nodes_count_at_degree_zero() {
        let graph = Graph::with_edges(4, &[(0, 1)]).expect("valid edge");
        assert_eq!(degree_histogram(&graph).expect("histogram"), vec![0.5, 0.5]);
    }
}

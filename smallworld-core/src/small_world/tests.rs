//! Tests for ring lattice construction and rewiring.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::{RngCore, SeedableRng, rngs::SmallRng};
use rstest::rstest;

use crate::error::GraphError;
use crate::graph::{Graph, NodeId};
use crate::test_utils::suite_proptest_config;

use super::{Probability, build_small_world, lattice::add_ring_lattice};

/// Pairwise ring-neighbour test: `|i - j| mod (N - 1 - K/2)` within `(0, K/2]`.
///
/// Agrees with the per-offset lattice only while the lattice degree is below
/// `N - 1`.
fn pairwise_ring_check(left: NodeId, right: NodeId, node_count: usize, ring_degree: usize) -> bool {
    let half = ring_degree / 2;
    let modulus = node_count - 1 - half;
    let gap = left.abs_diff(right) % modulus;
    gap > 0 && gap <= half
}

fn pairwise_lattice(node_count: usize, ring_degree: usize) -> BTreeSet<(NodeId, NodeId)> {
    let mut pairs = BTreeSet::new();
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if pairwise_ring_check(i, j, node_count, ring_degree) {
                pairs.insert((i, j));
            }
        }
    }
    pairs
}

fn canonical_pairs(graph: &Graph) -> BTreeSet<(NodeId, NodeId)> {
    graph.edges().iter().map(|edge| edge.canonical()).collect()
}

fn lattice(node_count: usize, ring_degree: usize) -> Graph {
    let mut graph = Graph::new(node_count, ring_degree);
    add_ring_lattice(&mut graph).expect("lattice construction succeeds");
    graph
}

#[rstest]
#[case(0.0)]
#[case(0.5)]
#[case(1.0)]
fn probability_accepts_closed_unit_interval(#[case] raw: f64) {
    let probability = Probability::new(raw).expect("value lies in [0, 1]");
    assert_eq!(probability.get(), raw);
}

#[rstest]
#[case(-0.1)]
#[case(1.5)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn probability_rejects_out_of_range(#[case] raw: f64) {
    let err = Probability::try_from(raw).expect_err("value is invalid");
    assert!(matches!(err, GraphError::InvalidProbability { .. }));
}

#[rstest]
fn lattice_orders_edges_by_offset() {
    let graph = lattice(6, 4);
    let first: Vec<(NodeId, NodeId)> = graph
        .edges()
        .iter()
        .take(4)
        .map(|&edge| edge.into())
        .collect();
    assert_eq!(first, vec![(0, 4), (0, 5), (0, 1), (0, 2)]);
    assert_eq!(graph.edge_count(), 12);
}

#[rstest]
#[case::even(10, 4, 20, 4)]
#[case::odd_degree_rounds_down(10, 5, 20, 4)]
#[case::degree_two(7, 2, 7, 2)]
#[case::degree_one_is_empty(7, 1, 0, 0)]
#[case::complete(5, 4, 10, 4)]
#[case::wraps_past_complete(5, 6, 10, 4)]
#[case::offset_hits_self(5, 10, 10, 4)]
#[case::two_nodes(2, 2, 1, 1)]
#[case::single_node(1, 4, 0, 0)]
#[case::no_nodes(0, 4, 0, 0)]
fn lattice_edge_counts(
    #[case] node_count: usize,
    #[case] ring_degree: usize,
    #[case] expected_edges: usize,
    #[case] expected_degree: usize,
) {
    let graph = lattice(node_count, ring_degree);
    assert_eq!(graph.edge_count(), expected_edges);
    assert!(
        graph
            .nodes()
            .all(|node| graph.degree(node) == Ok(expected_degree))
    );
    graph.check_invariants().expect("lattice is consistent");
}

#[rstest]
#[case(10, 4)]
#[case(10, 2)]
#[case(30, 6)]
#[case(9, 7)]
fn lattice_matches_pairwise_check(#[case] node_count: usize, #[case] ring_degree: usize) {
    assert_eq!(
        canonical_pairs(&lattice(node_count, ring_degree)),
        pairwise_lattice(node_count, ring_degree)
    );
}

#[rstest]
fn pairwise_check_diverges_once_lattice_is_complete() {
    // K/2 = 2, N - 1 - K/2 = 2: the gap of 2 reduces to 0 and is dropped.
    let per_offset = canonical_pairs(&lattice(5, 4));
    let pairwise = pairwise_lattice(5, 4);
    assert_eq!(per_offset.len(), 10);
    assert!(pairwise.len() < per_offset.len());
    assert!(pairwise.is_subset(&per_offset));
}

#[rstest]
fn zero_probability_yields_lattice() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut graph = Graph::new(12, 4);
    let summary = build_small_world(&mut graph, 0.0, &mut rng).expect("build succeeds");
    assert_eq!(graph, lattice(12, 4));
    assert_eq!(summary.rewired_edges(), 0);
    assert_eq!(summary.lattice_edges(), 24);
}

#[rstest]
fn zero_probability_draws_nothing() {
    let mut used = SmallRng::seed_from_u64(3);
    let mut graph = Graph::new(12, 4);
    build_small_world(&mut graph, 0.0, &mut used).expect("build succeeds");

    let mut fresh = SmallRng::seed_from_u64(3);
    assert_eq!(used.next_u64(), fresh.next_u64());
}

#[rstest]
#[case(7)]
#[case(42)]
#[case(999)]
fn full_probability_rewires_every_lattice_edge(#[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = Graph::new(40, 4);
    let summary = build_small_world(&mut graph, 1.0, &mut rng).expect("build succeeds");
    assert_eq!(summary.rewired_edges(), summary.lattice_edges());
    assert_eq!(graph.edge_count(), 80);
    graph.check_invariants().expect("rewired graph is consistent");
}

#[rstest]
fn same_seed_reproduces_graph() {
    let build = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut graph = Graph::new(50, 6);
        build_small_world(&mut graph, 0.4, &mut rng).expect("build succeeds");
        graph
    };
    assert_eq!(build(5), build(5));
    assert_ne!(build(5), build(6));
}

#[rstest]
fn rejects_non_empty_graph() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut graph = Graph::with_edges(10, &[(0, 1)]).expect("valid edge");
    let before = graph.clone();
    let err = build_small_world(&mut graph, 0.5, &mut rng).expect_err("graph has edges");
    assert_eq!(err, GraphError::NotEmpty { edges: 1 });
    assert_eq!(graph, before);
}

#[rstest]
fn rejects_invalid_probability_before_building() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut graph = Graph::new(10, 4);
    let err = build_small_world(&mut graph, 1.5, &mut rng).expect_err("probability invalid");
    assert_eq!(err, GraphError::InvalidProbability { got: 1.5 });
    assert!(graph.is_empty());
}

#[rstest]
fn reports_missing_candidates_without_partial_graph() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut graph = Graph::new(3, 2);
    let err = build_small_world(&mut graph, 1.0, &mut rng).expect_err("triangle is saturated");
    assert_eq!(err, GraphError::NoCandidates { node: 0 });
    assert!(graph.is_empty());
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn rewiring_preserves_edge_count(
        node_count in 10_usize..60,
        ring_degree in prop::sample::select(vec![2_usize, 4, 6]),
        probability in 0.0_f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut graph = Graph::new(node_count, ring_degree);
        let summary = match build_small_world(&mut graph, probability, &mut rng) {
            Ok(summary) => summary,
            // A node saturated by earlier rewires leaves no target; the graph stays empty.
            Err(GraphError::NoCandidates { .. }) => {
                prop_assert!(graph.is_empty());
                return Ok(());
            }
            Err(err) => return Err(TestCaseError::fail(err.to_string())),
        };
        prop_assert_eq!(summary.lattice_edges(), node_count * (ring_degree / 2));
        prop_assert_eq!(graph.edge_count(), summary.lattice_edges());
        prop_assert!(summary.rewired_edges() <= summary.lattice_edges());
        prop_assert_eq!(graph.check_invariants(), Ok(()));
    }

    #[test]
    fn lattice_agrees_with_pairwise_check_below_completeness(
        (node_count, ring_degree) in (4_usize..40)
            .prop_flat_map(|n| (Just(n), 0_usize..(n - 1))),
    ) {
        let graph = lattice(node_count, ring_degree);
        prop_assert_eq!(canonical_pairs(&graph), pairwise_lattice(node_count, ring_degree));
    }
}

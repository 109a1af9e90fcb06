//! Small-world construction benchmarks.
//!
//! Measures ring-lattice construction plus rewiring across graph sizes and
//! rewiring probabilities.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};

use smallworld_benches::{SEED, error::BenchSetupError, params::SmallWorldBenchParams};
use smallworld_core::{Graph, Probability, build_small_world};

const NODE_COUNTS: &[usize] = &[100, 1_000];
const RING_DEGREE: usize = 10;
const PROBABILITIES: &[f64] = &[0.0, 0.1, 1.0];

fn build_small_world_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("build_small_world");
    group.sample_size(20);

    for &node_count in NODE_COUNTS {
        for &raw in PROBABILITIES {
            let params = SmallWorldBenchParams {
                node_count,
                ring_degree: RING_DEGREE,
                probability: Probability::new(raw)?,
            };
            group.bench_with_input(
                BenchmarkId::from_parameter(params),
                &params,
                |b, params| {
                    b.iter_batched(
                        || {
                            (
                                Graph::new(params.node_count, params.ring_degree),
                                SmallRng::seed_from_u64(SEED),
                            )
                        },
                        |(mut graph, mut rng)| {
                            build_small_world(&mut graph, params.probability.get(), &mut rng)
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn small_world_build(c: &mut Criterion) {
    if let Err(err) = build_small_world_impl(c) {
        panic!("build_small_world benchmark setup failed: {err}");
    }
}

criterion_group!(benches, small_world_build);
criterion_main!(benches);

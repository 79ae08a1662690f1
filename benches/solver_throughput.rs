use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use astrocalc::{
    engine::{AstrophysicalParameterEngine, Quantities},
    habitability,
    kepler::{self, OrbitalKnowns},
    stellar_scaling::{self, StellarMode},
    synodic::{self, SynodicBranch, SynodicKnowns},
};

const SAMPLES: usize = 10_000;

fn bench_stellar(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xA57E_0001);

    c.bench_function("solvers/stellar_resolve", |b| {
        b.iter_batched(
            || {
                (0..SAMPLES)
                    .map(|_| {
                        let mode = StellarMode::ALL[rng.random_range(0..StellarMode::ALL.len())];
                        (mode, rng.random_range(0.1..10.0))
                    })
                    .collect::<Vec<(StellarMode, f64)>>()
            },
            |cases| {
                for (mode, value) in cases {
                    black_box(stellar_scaling::resolve(mode, black_box(value), 6).unwrap());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_kepler(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xA57E_0002);

    c.bench_function("solvers/kepler_mass_period", |b| {
        b.iter_batched(
            || {
                (0..SAMPLES)
                    .map(|_| OrbitalKnowns::MassPeriod {
                        mass: rng.random_range(0.1..20.0),
                        period: rng.random_range(0.01..200.0),
                    })
                    .collect::<Vec<_>>()
            },
            |cases| {
                for knowns in cases {
                    black_box(kepler::solve(black_box(knowns)).unwrap());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_synodic(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xA57E_0003);

    c.bench_function("solvers/synodic_pq", |b| {
        b.iter_batched(
            || {
                (0..SAMPLES)
                    .map(|_| SynodicKnowns::PQ {
                        p: rng.random_range(0.1..100.0),
                        q: rng.random_range(0.1..100.0),
                    })
                    .collect::<Vec<_>>()
            },
            |cases| {
                for knowns in cases {
                    black_box(synodic::solve(black_box(knowns), SynodicBranch::Inner).unwrap());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_habitability(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xA57E_0004);

    c.bench_function("solvers/habitability_index", |b| {
        b.iter_batched(
            || {
                (0..SAMPLES)
                    .map(|_| rng.random_range(0.0..5.0))
                    .collect::<Vec<f64>>()
            },
            |distances| {
                for d in distances {
                    black_box(habitability::index(black_box(d), 1.0, 3).unwrap());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Dispatch overhead of the engine on a fixed orbit query.
fn bench_engine_dispatch(c: &mut Criterion) {
    let engine = AstrophysicalParameterEngine::default();
    let query = Quantities::new().mass(1.0).axis(5.2);

    c.bench_function("solvers/engine_resolve_orbit", |b| {
        b.iter(|| black_box(engine.resolve(black_box(&query)).unwrap()))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_stellar, bench_kepler, bench_synodic, bench_habitability, bench_engine_dispatch
);
criterion_main!(benches);

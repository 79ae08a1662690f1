use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use astrocalc::spectral::{interpolator::SpectralInterpolator, SpectralClass};

/// Random label such as "K3.7", covering every class.
#[inline]
fn rand_label(rng: &mut StdRng) -> String {
    let class = SpectralClass::ALL[rng.random_range(0..SpectralClass::ALL.len())];
    let subclass = rng.random_range(0..10u8);
    let tenths = rng.random_range(0..10u8);
    format!("{class}{subclass}.{tenths}")
}

/// Label → temperature: regex parse plus one indexed lookup.
fn bench_temperature_of(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EC7_0001);
    let samples = 10_000usize;
    let interpolator = SpectralInterpolator::default();

    c.bench_function("spectral/temperature_of", |b| {
        b.iter_batched(
            || (0..samples).map(|_| rand_label(&mut rng)).collect::<Vec<_>>(),
            |labels| {
                for label in labels {
                    black_box(interpolator.temperature_of(black_box(&label)).unwrap());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Temperature → label: binary search over the descending table.
fn bench_subclass_of(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EC7_0002);
    let samples = 10_000usize;
    let interpolator = SpectralInterpolator::default();

    c.bench_function("spectral/subclass_of", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| rng.random_range(2000.0..55000.0))
                    .collect::<Vec<f64>>()
            },
            |temperatures| {
                for t in temperatures {
                    black_box(interpolator.subclass_of(black_box(t)).unwrap());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Full table rendering through comfy-table.
fn bench_render_table(c: &mut Criterion) {
    let interpolator = SpectralInterpolator::default();

    c.bench_function("spectral/render_full_table", |b| {
        b.iter(|| black_box(interpolator.display(None).to_string()))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_temperature_of, bench_subclass_of, bench_render_table
);
criterion_main!(benches);

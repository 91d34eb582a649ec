mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use density_redistribute::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const COUNT: usize = 10_000;
const CLIP_RADII: [f64; 4] = [0.01, 0.1, 0.5, 1.0];

fn generation_clip_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation/spherical_power_law");
    group.throughput(common::elements_throughput(COUNT));

    for &min_radius in &CLIP_RADII {
        let ready = common::ready(common::sphere(), SphericalPowerLaw::new(1.0, min_radius));
        let mut rng = StdRng::seed_from_u64(0xC0FFEE ^ min_radius.to_bits());

        group.bench_with_input(
            BenchmarkId::from_parameter(min_radius),
            &min_radius,
            |b, _| {
                b.iter(|| {
                    let positions = sample_positions(&ready, COUNT, &mut rng);
                    black_box(positions.len());
                });
            },
        );
    }

    group.finish();
}

fn generation_parallel_benches(c: &mut Criterion) {
    let weight = Product::new(
        SphericalPowerLaw::new(0.5, 0.1),
        AxialExponential::new(3.0, 0.5),
    );
    let ready = common::ready(common::disk(), weight);
    let count = COUNT * 10;

    let mut group = c.benchmark_group("generation/disk_product");
    group.throughput(common::elements_throughput(count));

    group.bench_function("sequential", |b| {
        let mut rng = StdRng::seed_from_u64(0xD15C);
        b.iter(|| black_box(sample_positions(&ready, count, &mut rng).len()));
    });

    group.bench_function("parallel", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let positions = par_sample_positions(&ready, count, seed, 4096);
            black_box(positions.map(|p| p.len()).ok());
        });
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = generation_clip_benches, generation_parallel_benches
}
criterion_main!(benches);

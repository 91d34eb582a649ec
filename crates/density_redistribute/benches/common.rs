#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use density_redistribute::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

pub fn sphere() -> Spherical<ExponentialSphere> {
    Spherical(ExponentialSphere::new(1.0))
}

pub fn disk() -> ExponentialDisk {
    ExponentialDisk::new(3.0, 0.3)
}

/// Runs setup with a fixed seed; panics on failure since benches use known-good inputs.
pub fn ready<G: Geometry, W: WeightFunction>(
    geometry: G,
    weight: W,
) -> RedistributedGeometry<G, W> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    match Redistribution::new(geometry, weight).setup(&mut rng) {
        Ok(ready) => ready,
        Err(err) => panic!("bench setup failed: {err}"),
    }
}

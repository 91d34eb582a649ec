use density_redistribute::prelude::*;
use density_redistribute_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let sphere = ExponentialSphere::try_new(1.0)?;
    let weight = SphericalExponential::try_new(1.0)?;
    let mut rng = StdRng::seed_from_u64(7);

    // The radial engine only ever touches radii; the full engine draws 3D positions.
    let radial = RadialRedistribution::new(sphere, weight).setup(&mut rng)?;
    let full = Redistribution::new(Spherical(sphere), weight).setup(&mut rng)?;

    // Both estimate the same constant; the exact value is 8.
    println!("radial norm = {:.4}", radial.normalization());
    println!("full norm   = {:.4}", full.normalization());

    let n = 100_000;
    let radial_mean = (0..n).map(|_| radial.random_radius(&mut rng)).sum::<f64>() / n as f64;
    let wrapped = Spherical(radial);
    let full_mean = sample_positions(&wrapped, n, &mut rng)
        .iter()
        .map(|p| p.radius())
        .sum::<f64>()
        / n as f64;
    println!("mean radius (radial)  = {radial_mean:.4}");
    println!("mean radius (wrapped) = {full_mean:.4}");
    println!("expected              = 1.5000");

    Ok(())
}

use density_redistribute::prelude::*;
use density_redistribute_examples::{init_tracing, render_positions_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Exponential sphere steepened by r^-1.5, with the singular core clipped at r = 0.2.
    let base = Spherical(ExponentialSphere::try_new(1.0)?);
    let weight = SphericalPowerLaw::try_new(1.5, 0.2)?;

    let mut rng = StdRng::seed_from_u64(2025);
    let geometry = Redistribution::new(base, weight).setup(&mut rng)?;
    tracing::info!(
        "norm = {:.4}, envelope = {:.4}",
        geometry.normalization(),
        geometry.envelope()
    );

    let positions = sample_positions(&geometry, 200_000, &mut rng);

    let rc = RenderConfig::new((800, 800), 4.0);
    render_positions_to_png(&positions, &rc, "spherical-power-law-basic.png")?;

    Ok(())
}

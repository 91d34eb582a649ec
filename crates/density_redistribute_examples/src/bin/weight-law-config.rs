use density_redistribute::prelude::*;
use density_redistribute_examples::{init_tracing, render_positions_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Weights described as data, validated when built.
    let law = WeightLaw::SphericalPowerLaw {
        exponent: 0.5,
        min_radius: 0.1,
    }
    .times(WeightLaw::AxialExponential {
        radial_scale: 4.0,
        vertical_scale: 0.5,
    });
    let weight = law.build()?;

    let options = RedistributionOptions::new()
        .with_samples(50_000)
        .with_max_attempts(1_000_000);
    let mut rng = StdRng::seed_from_u64(3);
    let geometry = Redistribution::new(Spherical(ExponentialSphere::try_new(1.5)?), weight)
        .with_options(options)
        .setup(&mut rng)?;
    tracing::info!("dimension {} after reweighting", geometry.dimension());

    let positions = sample_positions(&geometry, 200_000, &mut rng);
    let rc = RenderConfig::new((800, 800), 6.0).with_color([140, 200, 255]);
    render_positions_to_png(&positions, &rc, "weight-law-config.png")?;

    // An invalid law is reported instead of panicking.
    let invalid = WeightLaw::SphericalPowerLaw {
        exponent: 1.0,
        min_radius: 0.0,
    };
    if let Err(err) = invalid.build() {
        tracing::warn!("rejected law: {err}");
    }

    Ok(())
}

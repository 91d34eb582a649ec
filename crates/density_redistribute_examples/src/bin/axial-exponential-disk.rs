use density_redistribute::prelude::*;
use density_redistribute_examples::{
    init_tracing, render_positions_to_png, Projection, RenderConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A thick disk pinched into a thinner, more compact one.
    let disk = ExponentialDisk::try_new(3.0, 0.6)?;
    let weight = AxialExponential::try_new(2.0, 0.3)?;

    let mut rng = StdRng::seed_from_u64(11);
    let geometry = Redistribution::new(disk, weight).setup(&mut rng)?;
    tracing::info!("dimension {} after reweighting", geometry.dimension());

    let positions = par_sample_positions(&geometry, 400_000, 11, 8192)?;

    let face_on = RenderConfig::new((800, 800), 10.0);
    render_positions_to_png(&positions, &face_on, "axial-exponential-disk-face-on.png")?;

    let edge_on = RenderConfig::new((800, 800), 10.0).with_projection(Projection::Xz);
    render_positions_to_png(&positions, &edge_on, "axial-exponential-disk-edge-on.png")?;

    Ok(())
}


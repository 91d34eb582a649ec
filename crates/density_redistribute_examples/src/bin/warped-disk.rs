use density_redistribute::prelude::*;
use density_redistribute_examples::{
    init_tracing, render_positions_to_png, Projection, RenderConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let disk = ExponentialDisk::try_new(2.5, 0.2)?;
    let twist_free = WarpedGeometry::new(disk.clone(), TwistFreeWarp::try_new(10.0, 1.5, 2.0)?);
    let twisted = WarpedGeometry::new(disk, TwistedWarp::try_new(10.0, 1.5, 0.5)?);

    // Clipping the centre of a warped disk: the weight composes with any geometry.
    let weight = AxialPowerLaw::try_new(1.0, 0.0, 0.5, 0.0)?;
    let mut rng = StdRng::seed_from_u64(99);
    let clipped = Redistribution::new(twist_free, weight).setup(&mut rng)?;

    let edge_on = RenderConfig::new((900, 450), 10.0).with_projection(Projection::Xz);
    let positions = sample_positions(&clipped, 300_000, &mut rng);
    render_positions_to_png(&positions, &edge_on, "warped-disk-twist-free.png")?;

    let positions = par_sample_positions(&twisted, 300_000, 99, 8192)?;
    render_positions_to_png(&positions, &edge_on, "warped-disk-twisted.png")?;

    Ok(())
}

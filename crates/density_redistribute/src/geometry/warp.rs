//! Height-shift decorators that warp a disk-like geometry out of its midplane.
//!
//! A [`HeightShift`] moves every point vertically by `h(R, φ)`. Evaluating the density applies
//! the inverse shift before querying the base geometry; drawing a position applies the forward
//! shift to a base sample. Because only `z` moves, the surface density along the z-axis is that
//! of the unwarped model. The x and y surface densities are forwarded unchanged as an
//! approximation.
//!
//! Both warps are truncated at a maximum cylindrical radius `R₀`: the density is zero beyond it
//! and base samples beyond it are redrawn. The density is not rescaled for the truncated mass,
//! so choose `R₀` large compared to the base geometry's radial extent.
use std::f64::consts::{PI, TAU};

use rand::Rng as RngCore;

use crate::error::{ensure_non_negative, ensure_positive, Error, Result};
use crate::geometry::{Geometry, DIMENSION_GENERAL};
use crate::position::Position;

/// A vertical displacement field `h(R, φ)` with a truncation radius.
pub trait HeightShift: Send + Sync {
    fn height_shift(&self, cyl_radius: f64, azimuth: f64) -> f64;

    /// Cylindrical radius beyond which the warped density vanishes.
    fn max_radius(&self) -> f64;
}

/// Warp without twist: `h(R, φ) = H (R/R₀)^b cos φ`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwistFreeWarp {
    max_radius: f64,
    max_height: f64,
    power: f64,
}

impl TwistFreeWarp {
    pub fn try_new(max_radius: f64, max_height: f64, power: f64) -> Result<Self> {
        ensure_positive("max_radius", max_radius)?;
        ensure_non_negative("max_height", max_height)?;
        ensure_positive("power", power)?;
        Ok(Self {
            max_radius,
            max_height,
            power,
        })
    }

    pub fn new(max_radius: f64, max_height: f64, power: f64) -> Self {
        debug_assert!(max_radius > 0.0, "max_radius must be > 0");
        debug_assert!(max_height >= 0.0, "max_height must be >= 0");
        debug_assert!(power > 0.0, "power must be > 0");
        Self {
            max_radius,
            max_height,
            power,
        }
    }

    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    pub fn power(&self) -> f64 {
        self.power
    }
}

impl HeightShift for TwistFreeWarp {
    fn height_shift(&self, cyl_radius: f64, azimuth: f64) -> f64 {
        self.max_height * (cyl_radius / self.max_radius).powf(self.power) * azimuth.cos()
    }

    fn max_radius(&self) -> f64 {
        self.max_radius
    }
}

/// Twisted warp: with `s = √(10 R/R₀)`, `h(R, φ) = (2H/π) s sin(s) cos(φ - φ₀ - s)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwistedWarp {
    max_radius: f64,
    max_height: f64,
    phase: f64,
}

impl TwistedWarp {
    /// `phase` is the azimuthal zero-point in radians, within `[0, 2π]`.
    pub fn try_new(max_radius: f64, max_height: f64, phase: f64) -> Result<Self> {
        ensure_positive("max_radius", max_radius)?;
        ensure_non_negative("max_height", max_height)?;
        if !(0.0..=TAU).contains(&phase) {
            return Err(Error::InvalidConfig(format!(
                "phase must lie in [0, 2π], got {phase}"
            )));
        }
        Ok(Self {
            max_radius,
            max_height,
            phase,
        })
    }

    pub fn new(max_radius: f64, max_height: f64) -> Self {
        debug_assert!(max_radius > 0.0, "max_radius must be > 0");
        debug_assert!(max_height >= 0.0, "max_height must be >= 0");
        Self {
            max_radius,
            max_height,
            phase: 0.0,
        }
    }

    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }
}

impl HeightShift for TwistedWarp {
    fn height_shift(&self, cyl_radius: f64, azimuth: f64) -> f64 {
        let s = (10.0 * cyl_radius / self.max_radius).sqrt();
        2.0 * self.max_height / PI * s * s.sin() * (azimuth - self.phase - s).cos()
    }

    fn max_radius(&self) -> f64 {
        self.max_radius
    }
}

/// Applies a [`HeightShift`] to a base geometry.
#[derive(Debug, Clone)]
pub struct WarpedGeometry<G, S> {
    geometry: G,
    shift: S,
}

impl<G: Geometry, S: HeightShift> WarpedGeometry<G, S> {
    pub fn new(geometry: G, shift: S) -> Self {
        Self { geometry, shift }
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn shift(&self) -> &S {
        &self.shift
    }
}

impl<G: Geometry, S: HeightShift> Geometry for WarpedGeometry<G, S> {
    fn dimension(&self) -> u8 {
        DIMENSION_GENERAL
    }

    fn density(&self, position: Position) -> f64 {
        let (r_cyl, phi, z) = position.cylindrical();
        if r_cyl > self.shift.max_radius() {
            return 0.0;
        }
        let h = self.shift.height_shift(r_cyl, phi);
        self.geometry.density(position.with_z(z - h))
    }

    fn generate_position(&self, rng: &mut dyn RngCore) -> Position {
        loop {
            let p = self.geometry.generate_position(rng);
            let (r_cyl, phi, z) = p.cylindrical();
            if r_cyl <= self.shift.max_radius() {
                return p.with_z(z + self.shift.height_shift(r_cyl, phi));
            }
        }
    }

    fn sigma_x(&self) -> f64 {
        self.geometry.sigma_x()
    }

    fn sigma_y(&self) -> f64 {
        self.geometry.sigma_y()
    }

    fn sigma_z(&self) -> f64 {
        self.geometry.sigma_z()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::geometry::ExponentialDisk;

    #[test]
    fn warp_parameters_are_validated() {
        assert!(TwistFreeWarp::try_new(0.0, 1.0, 1.0).is_err());
        assert!(TwistFreeWarp::try_new(10.0, -1.0, 1.0).is_err());
        assert!(TwistFreeWarp::try_new(10.0, 1.0, 0.0).is_err());
        assert!(TwistedWarp::try_new(10.0, 1.0, 7.0).is_err());
        assert!(TwistedWarp::try_new(10.0, 1.0, PI).is_ok());
    }

    #[test]
    fn twist_free_shift_is_largest_on_the_edge_along_x() {
        let warp = TwistFreeWarp::new(10.0, 2.0, 2.0);
        assert!((warp.height_shift(10.0, 0.0) - 2.0).abs() < 1e-12);
        assert!((warp.height_shift(5.0, 0.0) - 0.5).abs() < 1e-12);
        assert!(warp.height_shift(10.0, 0.5 * PI).abs() < 1e-12);
        assert_eq!(warp.height_shift(0.0, 1.0), 0.0);
    }

    #[test]
    fn density_follows_the_shifted_midplane() {
        let disk = ExponentialDisk::new(2.0, 0.2);
        let warp = TwistFreeWarp::new(20.0, 3.0, 1.0);
        let warped = WarpedGeometry::new(disk.clone(), warp);

        let r_cyl = 10.0;
        let h = warp.height_shift(r_cyl, 0.0);
        let on_plane = warped.density(Position::from_cylindrical(r_cyl, 0.0, h));
        let original = disk.density(Position::from_cylindrical(r_cyl, 0.0, 0.0));
        assert!((on_plane - original).abs() < 1e-15);

        assert_eq!(warped.density(Position::new(25.0, 0.0, 0.0)), 0.0);
        assert_eq!(warped.dimension(), DIMENSION_GENERAL);
        assert_eq!(warped.sigma_z(), disk.sigma_z());
    }

    #[test]
    fn generated_positions_respect_truncation_and_shift() {
        let disk = ExponentialDisk::new(2.0, 0.1);
        let warp = TwistedWarp::try_new(4.0, 1.0, 0.0).expect("valid warp");
        let warped = WarpedGeometry::new(disk, warp);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..5_000 {
            let p = warped.generate_position(&mut rng);
            let (r_cyl, phi, z) = p.cylindrical();
            assert!(r_cyl <= 4.0 + 1e-12);
            // The base disk is thin, so samples hug the warped surface.
            let offset = z - warp.height_shift(r_cyl, phi);
            assert!(offset.abs() < 2.0, "offset {offset} at R={r_cyl}");
        }
    }
}

//! Exponential reference geometries with analytic normalization.
use std::f64::consts::PI;

use rand::Rng as RngCore;

use crate::error::{ensure_positive, Result};
use crate::geometry::{Geometry, RadialGeometry, DIMENSION_AXIAL};
use crate::position::{rand01, rand01_open, Position};

/// Spherical exponential density `ρ(r) = exp(-r/s) / (8π s³)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExponentialSphere {
    scale: f64,
}

impl ExponentialSphere {
    /// Creates a new sphere with scale length `scale`, validating it is > 0.
    pub fn try_new(scale: f64) -> Result<Self> {
        ensure_positive("scale", scale)?;
        Ok(Self { scale })
    }

    pub fn new(scale: f64) -> Self {
        debug_assert!(scale > 0.0, "scale must be > 0");
        Self { scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl RadialGeometry for ExponentialSphere {
    fn density(&self, radius: f64) -> f64 {
        let s = self.scale;
        (-radius / s).exp() / (8.0 * PI * s * s * s)
    }

    fn random_radius(&self, rng: &mut dyn RngCore) -> f64 {
        // 4πr²ρ(r) is a Gamma(3, s) distribution.
        let product = rand01_open(rng) * rand01_open(rng) * rand01_open(rng);
        -self.scale * product.ln()
    }

    fn sigma_r(&self) -> f64 {
        1.0 / (8.0 * PI * self.scale * self.scale)
    }
}

/// Double exponential disk `ρ(R, z) = exp(-R/h_R - |z|/h_z) / (4π h_R² h_z)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExponentialDisk {
    radial_scale: f64,
    vertical_scale: f64,
}

impl ExponentialDisk {
    pub fn try_new(radial_scale: f64, vertical_scale: f64) -> Result<Self> {
        ensure_positive("radial_scale", radial_scale)?;
        ensure_positive("vertical_scale", vertical_scale)?;
        Ok(Self {
            radial_scale,
            vertical_scale,
        })
    }

    pub fn new(radial_scale: f64, vertical_scale: f64) -> Self {
        debug_assert!(radial_scale > 0.0, "radial_scale must be > 0");
        debug_assert!(vertical_scale > 0.0, "vertical_scale must be > 0");
        Self {
            radial_scale,
            vertical_scale,
        }
    }

    pub fn radial_scale(&self) -> f64 {
        self.radial_scale
    }

    pub fn vertical_scale(&self) -> f64 {
        self.vertical_scale
    }
}

impl Geometry for ExponentialDisk {
    fn dimension(&self) -> u8 {
        DIMENSION_AXIAL
    }

    fn density(&self, position: Position) -> f64 {
        let (hr, hz) = (self.radial_scale, self.vertical_scale);
        let r_cyl = position.cyl_radius();
        let z = position.z().abs();
        (-r_cyl / hr - z / hz).exp() / (4.0 * PI * hr * hr * hz)
    }

    fn generate_position(&self, rng: &mut dyn RngCore) -> Position {
        // Surface density 2πR exp(-R/h_R) is Gamma(2, h_R); the vertical profile is Laplace.
        let r_cyl = -self.radial_scale * (rand01_open(rng) * rand01_open(rng)).ln();
        let phi = 2.0 * PI * rand01(rng);
        let height = -self.vertical_scale * rand01_open(rng).ln();
        let z = if rand01(rng) < 0.5 { height } else { -height };
        Position::from_cylindrical(r_cyl, phi, z)
    }

    fn sigma_x(&self) -> f64 {
        1.0 / (2.0 * PI * self.radial_scale * self.vertical_scale)
    }

    fn sigma_y(&self) -> f64 {
        self.sigma_x()
    }

    fn sigma_z(&self) -> f64 {
        1.0 / (2.0 * PI * self.radial_scale * self.radial_scale)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn try_new_rejects_non_positive_scales() {
        assert!(ExponentialSphere::try_new(0.0).is_err());
        assert!(ExponentialSphere::try_new(1.0).is_ok());
        assert!(ExponentialDisk::try_new(1.0, -0.1).is_err());
        assert!(ExponentialDisk::try_new(f64::NAN, 0.1).is_err());
        assert!(ExponentialDisk::try_new(3.0, 0.3).is_ok());
    }

    #[test]
    fn sphere_density_integrates_to_one() {
        let sphere = ExponentialSphere::new(0.7);
        let dr = 1e-3;
        let total: f64 = (0..40_000)
            .map(|i| {
                let r = (i as f64 + 0.5) * dr;
                4.0 * PI * r * r * sphere.density(r) * dr
            })
            .sum();
        assert!((total - 1.0).abs() < 1e-4, "total {total}");
    }

    #[test]
    fn disk_samples_match_scale_lengths() {
        let disk = ExponentialDisk::new(3.0, 0.25);
        let mut rng = StdRng::seed_from_u64(11);
        let n = 40_000;
        let (mut sum_r, mut sum_abs_z, mut sum_z) = (0.0, 0.0, 0.0);
        for _ in 0..n {
            let p = disk.generate_position(&mut rng);
            sum_r += p.cyl_radius();
            sum_abs_z += p.z().abs();
            sum_z += p.z();
        }
        let n = n as f64;
        // Gamma(2, h_R) mean is 2h_R, the Laplace half-profile mean is h_z.
        assert!((sum_r / n - 6.0).abs() < 0.1);
        assert!((sum_abs_z / n - 0.25).abs() < 0.01);
        assert!((sum_z / n).abs() < 0.01);
    }

    #[test]
    fn disk_sigma_z_matches_line_integral() {
        let disk = ExponentialDisk::new(2.0, 0.5);
        let dz = 1e-4;
        let integral: f64 = (-200_000..200_000)
            .map(|i| disk.density(Position::new(0.0, 0.0, (i as f64 + 0.5) * dz)) * dz)
            .sum();
        assert!((integral - disk.sigma_z()).abs() / disk.sigma_z() < 1e-4);
    }
}

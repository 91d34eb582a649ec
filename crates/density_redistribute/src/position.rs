//! Spatial positions and uniform deviates.
//!
//! [`Position`] is an immutable point in 3D space that converts freely between Cartesian,
//! cylindrical `(R, φ, z)` and spherical `(r, θ, φ)` coordinates. The helpers at the bottom
//! turn any [`RngCore`] into the uniform deviates used by the samplers.
use std::f64::consts::{PI, TAU};

use glam::DVec3;
use mint::Vector3;
use rand::Rng as RngCore;

/// A point in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position(DVec3);

impl Position {
    pub const ORIGIN: Position = Position(DVec3::ZERO);

    /// Creates a position from Cartesian coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Creates a position from cylindrical coordinates `(R, φ, z)`.
    pub fn from_cylindrical(cyl_radius: f64, azimuth: f64, z: f64) -> Self {
        let (sin_phi, cos_phi) = azimuth.sin_cos();
        Self::new(cyl_radius * cos_phi, cyl_radius * sin_phi, z)
    }

    /// Creates a position from spherical coordinates `(r, θ, φ)` with θ the polar angle.
    pub fn from_spherical(radius: f64, polar: f64, azimuth: f64) -> Self {
        let (sin_theta, cos_theta) = polar.sin_cos();
        let (sin_phi, cos_phi) = azimuth.sin_cos();
        Self::new(
            radius * sin_theta * cos_phi,
            radius * sin_theta * sin_phi,
            radius * cos_theta,
        )
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Distance from the origin.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.0.length()
    }

    /// Distance from the z-axis.
    #[inline]
    pub fn cyl_radius(&self) -> f64 {
        self.0.x.hypot(self.0.y)
    }

    /// Azimuth in `[0, 2π)`.
    pub fn azimuth(&self) -> f64 {
        let phi = self.0.y.atan2(self.0.x);
        if phi < 0.0 {
            phi + TAU
        } else {
            phi
        }
    }

    /// Polar angle in `[0, π]`, measured from the positive z-axis. Zero at the origin.
    pub fn polar(&self) -> f64 {
        let r = self.radius();
        if r > 0.0 {
            (self.0.z / r).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        }
    }

    /// Returns `(R, φ, z)`.
    pub fn cylindrical(&self) -> (f64, f64, f64) {
        (self.cyl_radius(), self.azimuth(), self.0.z)
    }

    /// Returns `(r, θ, φ)`.
    pub fn spherical(&self) -> (f64, f64, f64) {
        (self.radius(), self.polar(), self.azimuth())
    }

    /// Returns a copy with the z-coordinate replaced.
    pub fn with_z(self, z: f64) -> Self {
        Self::new(self.0.x, self.0.y, z)
    }

    #[inline]
    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }
}

impl From<DVec3> for Position {
    fn from(value: DVec3) -> Self {
        Self(value)
    }
}

impl From<Position> for DVec3 {
    fn from(value: Position) -> Self {
        value.0
    }
}

impl From<Vector3<f64>> for Position {
    fn from(value: Vector3<f64>) -> Self {
        Self(DVec3::from(value))
    }
}

impl From<Position> for Vector3<f64> {
    fn from(value: Position) -> Self {
        value.0.into()
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub fn rand01(rng: &mut dyn RngCore) -> f64 {
    // 53 high bits fill the mantissa exactly.
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Generate a random float in the range (0, 1], safe to pass to `ln`.
#[inline]
pub(crate) fn rand01_open(rng: &mut dyn RngCore) -> f64 {
    1.0 - rand01(rng)
}

/// Draw an isotropic unit direction.
pub(crate) fn random_direction(rng: &mut dyn RngCore) -> DVec3 {
    let cos_theta = 2.0 * rand01(rng) - 1.0;
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    let phi = 2.0 * PI * rand01(rng);
    let (sin_phi, cos_phi) = phi.sin_cos();
    DVec3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
}

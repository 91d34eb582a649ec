//! Geometry capabilities consumed and exposed by the redistribution engines.
//!
//! A geometry is a normalized spatial density paired with a generator that draws positions from
//! that same density. Every decorator in this crate implements the capability set it consumes,
//! so decorators stack transparently. Implementations must be `Send + Sync`: once set up, a
//! geometry is queried concurrently by many workers, each bringing its own RNG.
use std::sync::Arc;

use rand::Rng as RngCore;

use crate::position::{random_direction, Position};

pub mod exponential;
pub mod warp;

pub use exponential::{ExponentialDisk, ExponentialSphere};
pub use warp::{HeightShift, TwistFreeWarp, TwistedWarp, WarpedGeometry};

/// Spherically symmetric.
pub const DIMENSION_SPHERICAL: u8 = 1;
/// Axially symmetric.
pub const DIMENSION_AXIAL: u8 = 2;
/// No symmetry.
pub const DIMENSION_GENERAL: u8 = 3;

/// A normalized 3D density with a matching position generator.
pub trait Geometry: Send + Sync {
    /// Reported symmetry: 1 spherical, 2 axisymmetric, 3 general.
    fn dimension(&self) -> u8;

    /// Density at `position`; integrates to one over all space.
    fn density(&self, position: Position) -> f64;

    /// Draws a position distributed according to [`Geometry::density`].
    fn generate_position(&self, rng: &mut dyn RngCore) -> Position;

    /// Surface density along the whole x-axis.
    fn sigma_x(&self) -> f64;

    /// Surface density along the whole y-axis.
    fn sigma_y(&self) -> f64;

    /// Surface density along the whole z-axis.
    fn sigma_z(&self) -> f64;
}

/// A normalized spherically symmetric density described by radius alone.
///
/// `density(r)` is the 3D density at distance `r`, so `∫ 4πr² density(r) dr = 1`, while
/// [`RadialGeometry::random_radius`] draws radii from the shell-weighted distribution
/// `4πr² density(r)`.
pub trait RadialGeometry: Send + Sync {
    fn density(&self, radius: f64) -> f64;

    fn random_radius(&self, rng: &mut dyn RngCore) -> f64;

    /// Radial surface density `∫₀^∞ density(r) dr`.
    fn sigma_r(&self) -> f64;
}

macro_rules! forward_geometry {
    ($($ptr:ty),*) => {$(
        impl<T: Geometry + ?Sized> Geometry for $ptr {
            fn dimension(&self) -> u8 {
                (**self).dimension()
            }

            fn density(&self, position: Position) -> f64 {
                (**self).density(position)
            }

            fn generate_position(&self, rng: &mut dyn RngCore) -> Position {
                (**self).generate_position(rng)
            }

            fn sigma_x(&self) -> f64 {
                (**self).sigma_x()
            }

            fn sigma_y(&self) -> f64 {
                (**self).sigma_y()
            }

            fn sigma_z(&self) -> f64 {
                (**self).sigma_z()
            }
        }

        impl<T: RadialGeometry + ?Sized> RadialGeometry for $ptr {
            fn density(&self, radius: f64) -> f64 {
                (**self).density(radius)
            }

            fn random_radius(&self, rng: &mut dyn RngCore) -> f64 {
                (**self).random_radius(rng)
            }

            fn sigma_r(&self) -> f64 {
                (**self).sigma_r()
            }
        }
    )*};
}

forward_geometry!(&T, Box<T>, Arc<T>);

/// Presents a [`RadialGeometry`] as a spherically symmetric 3D [`Geometry`].
#[derive(Debug, Clone)]
pub struct Spherical<G>(pub G);

impl<G: RadialGeometry> Geometry for Spherical<G> {
    fn dimension(&self) -> u8 {
        DIMENSION_SPHERICAL
    }

    fn density(&self, position: Position) -> f64 {
        self.0.density(position.radius())
    }

    fn generate_position(&self, rng: &mut dyn RngCore) -> Position {
        let r = self.0.random_radius(rng);
        Position::from(random_direction(rng) * r)
    }

    fn sigma_x(&self) -> f64 {
        2.0 * self.0.sigma_r()
    }

    fn sigma_y(&self) -> f64 {
        2.0 * self.0.sigma_r()
    }

    fn sigma_z(&self) -> f64 {
        2.0 * self.0.sigma_r()
    }
}

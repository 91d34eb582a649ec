//! Weight functions that reshape a geometry's density.
//!
//! A weight is a non-negative, possibly unnormalized and possibly singular function of
//! position. Alongside its value it reports a supremum over the admissible region (the envelope
//! used by rejection sampling), an admissibility predicate that carves singular cores out of
//! space, and how it changes the symmetry dimension of the geometry it is applied to.
//!
//! Weights that depend on the spherical radius alone also implement [`RadialWeight`], so the same
//! law drives both the 3D engine and the radial specialization.
//!
//! Admissibility and the zero set of the weight must agree: inside the admissible region a
//! weight is strictly positive and finite. The engines additionally treat a zero weight as an
//! automatic rejection.
use std::sync::Arc;

use crate::position::Position;

pub mod axial_exponential;
pub mod axial_power_law;
pub mod law;
pub mod product;
pub mod spherical_exponential;
pub mod spherical_power_law;

pub use axial_exponential::AxialExponential;
pub use axial_power_law::AxialPowerLaw;
pub use law::WeightLaw;
pub use product::Product;
pub use spherical_exponential::SphericalExponential;
pub use spherical_power_law::SphericalPowerLaw;

/// A weight over 3D positions.
pub trait WeightFunction: Send + Sync {
    fn weight(&self, position: Position) -> f64;

    /// Supremum of [`WeightFunction::weight`] over the admissible region.
    fn max_weight(&self) -> f64;

    /// Whether `position` lies in the admissible region.
    fn inside(&self, _position: Position) -> bool {
        true
    }

    /// Symmetry dimension of a geometry of dimension `base` after reweighting.
    fn dimension(&self, base: u8) -> u8 {
        base
    }
}

/// A weight over the spherical radius.
pub trait RadialWeight: Send + Sync {
    fn weight(&self, radius: f64) -> f64;

    /// Supremum of [`RadialWeight::weight`] over the admissible radii.
    fn max_weight(&self) -> f64;

    fn inside(&self, _radius: f64) -> bool {
        true
    }
}

macro_rules! forward_weight {
    ($($ptr:ty),*) => {$(
        impl<T: WeightFunction + ?Sized> WeightFunction for $ptr {
            fn weight(&self, position: Position) -> f64 {
                (**self).weight(position)
            }

            fn max_weight(&self) -> f64 {
                (**self).max_weight()
            }

            fn inside(&self, position: Position) -> bool {
                (**self).inside(position)
            }

            fn dimension(&self, base: u8) -> u8 {
                (**self).dimension(base)
            }
        }

        impl<T: RadialWeight + ?Sized> RadialWeight for $ptr {
            fn weight(&self, radius: f64) -> f64 {
                (**self).weight(radius)
            }

            fn max_weight(&self) -> f64 {
                (**self).max_weight()
            }

            fn inside(&self, radius: f64) -> bool {
                (**self).inside(radius)
            }
        }
    )*};
}

forward_weight!(&T, Box<T>, Arc<T>);

#![forbid(unsafe_code)]
//! density_redistribute: Monte Carlo density redistribution for analytic geometries.
//!
//! A base geometry's density `ρ` is reweighted by a bounded weight `w` into `n ρ w`, where the
//! normalization `n` is estimated once from base samples. Positions are drawn by rejection
//! against the base geometry's own sampler.
//!
//! Modules:
//! - geometry: the geometry traits, spherical adapter, reference geometries, and warps
//! - weight: weight traits and the built-in spherical and axial laws
//! - redistribute: the 3D engine and its radial specialization
//! - batch: sequential and rayon-parallel bulk sampling
pub mod batch;
pub mod error;
pub mod geometry;
pub mod position;
pub mod redistribute;
pub mod weight;

/// Convenient re-exports for common types. Import with `use density_redistribute::prelude::*;`.
pub mod prelude {
    pub use crate::batch::{par_sample_positions, sample_positions, seed_for_batch};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{
        ExponentialDisk, ExponentialSphere, Geometry, HeightShift, RadialGeometry, Spherical,
        TwistFreeWarp, TwistedWarp, WarpedGeometry, DIMENSION_AXIAL, DIMENSION_GENERAL,
        DIMENSION_SPHERICAL,
    };
    pub use crate::position::{rand01, Position};
    pub use crate::redistribute::{
        RadialRedistributed, RadialRedistribution, RedistributedGeometry, Redistribution,
        RedistributionOptions,
    };
    pub use crate::weight::{
        AxialExponential, AxialPowerLaw, Product, RadialWeight, SphericalExponential,
        SphericalPowerLaw, WeightFunction, WeightLaw,
    };
}

//! The radial specialization: reweighting a spherical geometry by a function of radius alone.
//!
//! The base geometry draws radii from its shell-weighted distribution `4πr² ρ(r)`, so the
//! normalization `N / Σ w(rᵢ)` over those radii already carries the shell measure and needs no
//! explicit `4πr²` factor: `∫ 4πr² · n ρ(r) w(r) dr = n E[w] = 1`.
use rand::Rng as RngCore;
use tracing::error;

use crate::error::Result;
use crate::geometry::RadialGeometry;
use crate::redistribute::{normalize, rejection_sample, RedistributionOptions};
use crate::weight::RadialWeight;

/// A radial geometry and a radial weight awaiting normalization.
#[derive(Debug, Clone)]
pub struct RadialRedistribution<G, W> {
    geometry: G,
    weight: W,
    options: RedistributionOptions,
}

impl<G: RadialGeometry, W: RadialWeight> RadialRedistribution<G, W> {
    pub fn new(geometry: G, weight: W) -> Self {
        Self {
            geometry,
            weight,
            options: RedistributionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RedistributionOptions) -> Self {
        self.options = options;
        self
    }

    /// Estimates the normalization constant from base radii and returns the ready geometry.
    pub fn setup(self, rng: &mut dyn RngCore) -> Result<RadialRedistributed<G, W>> {
        let Self {
            geometry,
            weight,
            options,
        } = self;

        let normalization = normalize(
            &options,
            weight.max_weight(),
            || geometry.random_radius(rng),
            |r| weight.inside(r),
            |r| weight.weight(r),
        )?;

        Ok(RadialRedistributed {
            geometry,
            weight,
            norm: normalization.norm,
            envelope: normalization.envelope,
            max_attempts: options.max_attempts,
        })
    }
}

/// A normalized, reweighted radial geometry.
///
/// Wrap it in [`crate::geometry::Spherical`] to use it as a 3D geometry. The radial surface
/// density is forwarded from the base geometry as an approximation.
#[derive(Debug, Clone)]
pub struct RadialRedistributed<G, W> {
    geometry: G,
    weight: W,
    norm: f64,
    envelope: f64,
    max_attempts: Option<usize>,
}

impl<G: RadialGeometry, W: RadialWeight> RadialRedistributed<G, W> {
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn weight_function(&self) -> &W {
        &self.weight
    }

    pub fn normalization(&self) -> f64 {
        self.norm
    }

    pub fn envelope(&self) -> f64 {
        self.envelope
    }

    /// Draws a radius, giving up after `max_attempts` base draws.
    pub fn random_radius_capped(&self, rng: &mut dyn RngCore, max_attempts: usize) -> Option<f64> {
        self.sample(rng, Some(max_attempts))
    }

    fn sample(&self, rng: &mut dyn RngCore, max_attempts: Option<usize>) -> Option<f64> {
        rejection_sample(
            rng,
            self.envelope,
            max_attempts,
            |rng| self.geometry.random_radius(rng),
            |r| self.weight.inside(r),
            |r| self.weight.weight(r),
        )
    }
}

impl<G: RadialGeometry, W: RadialWeight> RadialGeometry for RadialRedistributed<G, W> {
    fn density(&self, radius: f64) -> f64 {
        if !self.weight.inside(radius) {
            return 0.0;
        }
        self.norm * self.geometry.density(radius) * self.weight.weight(radius)
    }

    fn random_radius(&self, rng: &mut dyn RngCore) -> f64 {
        if let Some(cap) = self.max_attempts {
            if let Some(r) = self.sample(rng, Some(cap)) {
                return r;
            }
            error!(
                "Radial rejection sampling drew {} base radii without acceptance.",
                cap
            );
            if cfg!(debug_assertions) {
                panic!("radial rejection sampling exceeded {cap} attempts");
            }
        }
        loop {
            if let Some(r) = self.sample(rng, None) {
                return r;
            }
        }
    }

    fn sigma_r(&self) -> f64 {
        self.geometry.sigma_r()
    }
}

//! The 3D redistribution engine.
use rand::Rng as RngCore;
use tracing::error;

use crate::error::Result;
use crate::geometry::Geometry;
use crate::position::Position;
use crate::redistribute::{normalize, rejection_sample, RedistributionOptions};
use crate::weight::WeightFunction;

/// A geometry and a weight awaiting normalization.
#[derive(Debug, Clone)]
pub struct Redistribution<G, W> {
    geometry: G,
    weight: W,
    options: RedistributionOptions,
}

impl<G: Geometry, W: WeightFunction> Redistribution<G, W> {
    /// Pairs `geometry` with `weight` using default options.
    pub fn new(geometry: G, weight: W) -> Self {
        Self {
            geometry,
            weight,
            options: RedistributionOptions::default(),
        }
    }

    /// Replaces the options.
    pub fn with_options(mut self, options: RedistributionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RedistributionOptions {
        &self.options
    }

    /// Estimates the normalization constant from base samples and returns the ready geometry.
    ///
    /// Fails with [`crate::error::Error::MassRemoved`] when the admissible region holds less
    /// than the configured minimum fraction of the sampled base mass, and with
    /// [`crate::error::Error::DegenerateWeight`] when the admissible samples carry no weight.
    pub fn setup(self, rng: &mut dyn RngCore) -> Result<RedistributedGeometry<G, W>> {
        let Self {
            geometry,
            weight,
            options,
        } = self;

        let normalization = normalize(
            &options,
            weight.max_weight(),
            || geometry.generate_position(rng),
            |p| weight.inside(p),
            |p| weight.weight(p),
        )?;

        Ok(RedistributedGeometry {
            geometry,
            weight,
            norm: normalization.norm,
            envelope: normalization.envelope,
            max_attempts: options.max_attempts,
        })
    }
}

/// A normalized, reweighted geometry sampled by rejection against its base geometry.
///
/// The surface densities are forwarded from the base geometry. They are exact only when the
/// weight is constant along the corresponding axis and an approximation otherwise.
#[derive(Debug, Clone)]
pub struct RedistributedGeometry<G, W> {
    geometry: G,
    weight: W,
    norm: f64,
    envelope: f64,
    max_attempts: Option<usize>,
}

impl<G: Geometry, W: WeightFunction> RedistributedGeometry<G, W> {
    /// The base geometry.
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// The weight function.
    pub fn weight_function(&self) -> &W {
        &self.weight
    }

    /// Normalization constant `n` such that `n ρ w` integrates to one.
    pub fn normalization(&self) -> f64 {
        self.norm
    }

    /// Envelope constant of the rejection test, the weight's supremum.
    pub fn envelope(&self) -> f64 {
        self.envelope
    }

    pub fn inside(&self, position: Position) -> bool {
        self.weight.inside(position)
    }

    /// Draws a position, giving up after `max_attempts` base draws.
    pub fn generate_position_capped(
        &self,
        rng: &mut dyn RngCore,
        max_attempts: usize,
    ) -> Option<Position> {
        self.sample(rng, Some(max_attempts))
    }

    fn sample(&self, rng: &mut dyn RngCore, max_attempts: Option<usize>) -> Option<Position> {
        rejection_sample(
            rng,
            self.envelope,
            max_attempts,
            |rng| self.geometry.generate_position(rng),
            |p| self.weight.inside(p),
            |p| self.weight.weight(p),
        )
    }
}

impl<G: Geometry, W: WeightFunction> Geometry for RedistributedGeometry<G, W> {
    fn dimension(&self) -> u8 {
        self.weight.dimension(self.geometry.dimension())
    }

    fn density(&self, position: Position) -> f64 {
        if !self.weight.inside(position) {
            return 0.0;
        }
        self.norm * self.geometry.density(position) * self.weight.weight(position)
    }

    fn generate_position(&self, rng: &mut dyn RngCore) -> Position {
        if let Some(cap) = self.max_attempts {
            if let Some(p) = self.sample(rng, Some(cap)) {
                return p;
            }
            error!(
                "Rejection sampling drew {} base positions without acceptance.",
                cap
            );
            if cfg!(debug_assertions) {
                panic!("rejection sampling exceeded {cap} attempts");
            }
        }
        loop {
            if let Some(p) = self.sample(rng, None) {
                return p;
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

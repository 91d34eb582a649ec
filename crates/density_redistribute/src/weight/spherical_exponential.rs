//! Exponential weight in spherical radius.
use crate::error::{ensure_positive, Result};
use crate::position::Position;
use crate::weight::{RadialWeight, WeightFunction};

/// Weight `exp(-r/L)`, with envelope 1 at the origin. Keeps the base symmetry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphericalExponential {
    scale: f64,
}

impl SphericalExponential {
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

impl RadialWeight for SphericalExponential {
    fn weight(&self, radius: f64) -> f64 {
        (-radius / self.scale).exp()
    }

    fn max_weight(&self) -> f64 {
        1.0
    }
}

impl WeightFunction for SphericalExponential {
    fn weight(&self, position: Position) -> f64 {
        RadialWeight::weight(self, position.radius())
    }

    fn max_weight(&self) -> f64 {
        RadialWeight::max_weight(self)
    }
}

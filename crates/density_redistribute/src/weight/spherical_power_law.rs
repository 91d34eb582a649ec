//! Spherical power-law weight with a clipped core.
use crate::error::{ensure_positive, Result};
use crate::position::Position;
use crate::weight::{RadialWeight, WeightFunction};

/// Weight `r^-p` for `r ≥ r₀` and zero inside the clipping sphere of radius `r₀`.
///
/// The singularity at the origin is cut out by the clipping sphere, so the envelope is the
/// value on its surface, `r₀^-p`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphericalPowerLaw {
    exponent: f64,
    min_radius: f64,
}

impl SphericalPowerLaw {
    /// Creates a new weight; both `exponent` and `min_radius` must be > 0.
    pub fn try_new(exponent: f64, min_radius: f64) -> Result<Self> {
        ensure_positive("exponent", exponent)?;
        ensure_positive("min_radius", min_radius)?;
        Ok(Self {
            exponent,
            min_radius,
        })
    }

    pub fn new(exponent: f64, min_radius: f64) -> Self {
        debug_assert!(exponent > 0.0, "exponent must be > 0");
        debug_assert!(min_radius > 0.0, "min_radius must be > 0");
        Self {
            exponent,
            min_radius,
        }
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    pub fn min_radius(&self) -> f64 {
        self.min_radius
    }
}

impl RadialWeight for SphericalPowerLaw {
    fn weight(&self, radius: f64) -> f64 {
        if radius < self.min_radius {
            return 0.0;
        }
        radius.powf(-self.exponent)
    }

    fn max_weight(&self) -> f64 {
        RadialWeight::weight(self, self.min_radius)
    }

    fn inside(&self, radius: f64) -> bool {
        radius >= self.min_radius
    }
}

impl WeightFunction for SphericalPowerLaw {
    fn weight(&self, position: Position) -> f64 {
        RadialWeight::weight(self, position.radius())
    }

    fn max_weight(&self) -> f64 {
        RadialWeight::max_weight(self)
    }

    fn inside(&self, position: Position) -> bool {
        RadialWeight::inside(self, position.radius())
    }
}

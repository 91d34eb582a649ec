//! Exponential weight in cylindrical radius and height.
use crate::error::{ensure_positive, Result};
use crate::geometry::DIMENSION_AXIAL;
use crate::position::Position;
use crate::weight::WeightFunction;

/// Weight `exp(-R/L_R - |z|/L_z)`.
///
/// The weight peaks at the origin, so the envelope is 1. Applied to a spherical geometry the
/// result is only axisymmetric.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxialExponential {
    radial_scale: f64,
    vertical_scale: f64,
}

impl AxialExponential {
    /// Creates a new weight with the given radial and vertical scale lengths, both > 0.
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

impl WeightFunction for AxialExponential {
    fn weight(&self, position: Position) -> f64 {
        let r_cyl = position.cyl_radius();
        let z = position.z().abs();
        (-r_cyl / self.radial_scale - z / self.vertical_scale).exp()
    }

    fn max_weight(&self) -> f64 {
        1.0
    }

    fn dimension(&self, base: u8) -> u8 {
        base.max(DIMENSION_AXIAL)
    }
}

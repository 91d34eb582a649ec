//! Power-law weight in cylindrical radius and height, clipped around the axis and midplane.
use crate::error::{ensure_non_negative, Error, Result};
use crate::geometry::DIMENSION_AXIAL;
use crate::position::Position;
use crate::weight::WeightFunction;

/// Weight `R^-p_R |z|^-p_z` outside a clipping cylinder of radius `R₀` and a clipping slab of
/// half-height `z₀`; zero inside them.
///
/// The weight decreases away from both the axis and the midplane, so its supremum over the
/// admissible region sits on the clip edge `(R₀, z₀)`. An exponent of zero removes the need for
/// the corresponding clip, which may then also be zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxialPowerLaw {
    radial_exponent: f64,
    vertical_exponent: f64,
    min_radius: f64,
    min_height: f64,
}

impl AxialPowerLaw {
    pub fn try_new(
        radial_exponent: f64,
        vertical_exponent: f64,
        min_radius: f64,
        min_height: f64,
    ) -> Result<Self> {
        ensure_non_negative("radial_exponent", radial_exponent)?;
        ensure_non_negative("vertical_exponent", vertical_exponent)?;
        ensure_non_negative("min_radius", min_radius)?;
        ensure_non_negative("min_height", min_height)?;
        if radial_exponent > 0.0 && min_radius == 0.0 {
            return Err(Error::InvalidConfig(
                "min_radius must be > 0 when radial_exponent > 0".into(),
            ));
        }
        if vertical_exponent > 0.0 && min_height == 0.0 {
            return Err(Error::InvalidConfig(
                "min_height must be > 0 when vertical_exponent > 0".into(),
            ));
        }
        Ok(Self {
            radial_exponent,
            vertical_exponent,
            min_radius,
            min_height,
        })
    }

    pub fn new(
        radial_exponent: f64,
        vertical_exponent: f64,
        min_radius: f64,
        min_height: f64,
    ) -> Self {
        debug_assert!(
            radial_exponent == 0.0 || min_radius > 0.0,
            "min_radius must be > 0 when radial_exponent > 0"
        );
        debug_assert!(
            vertical_exponent == 0.0 || min_height > 0.0,
            "min_height must be > 0 when vertical_exponent > 0"
        );
        Self {
            radial_exponent,
            vertical_exponent,
            min_radius,
            min_height,
        }
    }

    pub fn radial_exponent(&self) -> f64 {
        self.radial_exponent
    }

    pub fn vertical_exponent(&self) -> f64 {
        self.vertical_exponent
    }

    pub fn min_radius(&self) -> f64 {
        self.min_radius
    }

    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    fn admits(&self, cyl_radius: f64, abs_z: f64) -> bool {
        abs_z >= self.min_height && cyl_radius >= self.min_radius
    }

    fn value(&self, cyl_radius: f64, abs_z: f64) -> f64 {
        if !self.admits(cyl_radius, abs_z) {
            return 0.0;
        }
        cyl_radius.powf(-self.radial_exponent) * abs_z.powf(-self.vertical_exponent)
    }
}

impl WeightFunction for AxialPowerLaw {
    fn weight(&self, position: Position) -> f64 {
        self.value(position.cyl_radius(), position.z().abs())
    }

    fn max_weight(&self) -> f64 {
        self.value(self.min_radius, self.min_height)
    }

    fn inside(&self, position: Position) -> bool {
        self.admits(position.cyl_radius(), position.z().abs())
    }

    /// Promotes a spherical base to axisymmetric even though a dimension-preserving weight would
    /// keep it, since R and z enter separately.
    fn dimension(&self, base: u8) -> u8 {
        base.max(DIMENSION_AXIAL)
    }
}

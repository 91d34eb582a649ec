//! Declarative description of the built-in weight laws.
//!
//! [`WeightLaw`] names every built-in 3D weight by its canonical parameters, so a configuration
//! layer can describe a redistribution as data and turn it into a validated weight with
//! [`WeightLaw::build`]. With the `serde` feature it (de)serializes as an internally tagged enum,
//! e.g. `{ "type": "spherical_power_law", "exponent": 1.0, "min_radius": 0.1 }`.
use crate::error::Result;
use crate::weight::{
    AxialExponential, AxialPowerLaw, Product, SphericalExponential, SphericalPowerLaw,
    WeightFunction,
};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum WeightLaw {
    AxialExponential {
        radial_scale: f64,
        vertical_scale: f64,
    },
    AxialPowerLaw {
        radial_exponent: f64,
        vertical_exponent: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        min_radius: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        min_height: f64,
    },
    SphericalExponential {
        scale: f64,
    },
    SphericalPowerLaw {
        exponent: f64,
        min_radius: f64,
    },
    Product {
        first: Box<WeightLaw>,
        second: Box<WeightLaw>,
    },
}

impl WeightLaw {
    /// Validates the parameters and builds the weight.
    pub fn build(&self) -> Result<Box<dyn WeightFunction>> {
        let weight: Box<dyn WeightFunction> = match self {
            WeightLaw::AxialExponential {
                radial_scale,
                vertical_scale,
            } => Box::new(AxialExponential::try_new(*radial_scale, *vertical_scale)?),
            WeightLaw::AxialPowerLaw {
                radial_exponent,
                vertical_exponent,
                min_radius,
                min_height,
            } => Box::new(AxialPowerLaw::try_new(
                *radial_exponent,
                *vertical_exponent,
                *min_radius,
                *min_height,
            )?),
            WeightLaw::SphericalExponential { scale } => {
                Box::new(SphericalExponential::try_new(*scale)?)
            }
            WeightLaw::SphericalPowerLaw {
                exponent,
                min_radius,
            } => Box::new(SphericalPowerLaw::try_new(*exponent, *min_radius)?),
            WeightLaw::Product { first, second } => {
                Box::new(Product::new(first.build()?, second.build()?))
            }
        };
        Ok(weight)
    }

    /// Checks the parameters without building the weight.
    pub fn validate(&self) -> Result<()> {
        self.build().map(|_| ())
    }

    /// Product of `self` and `other`.
    pub fn times(self, other: WeightLaw) -> WeightLaw {
        WeightLaw::Product {
            first: Box::new(self),
            second: Box::new(other),
        }
    }
}

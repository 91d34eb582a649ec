//! Product of two weights.
use crate::position::Position;
use crate::weight::{RadialWeight, WeightFunction};

/// Multiplies two weights. A position is admissible when both factors admit it.
///
/// The envelope is the product of the two envelopes. It is exact when both suprema are reached
/// at the same point (for instance two laws peaking at the origin) and a valid upper bound
/// otherwise, at the cost of a lower acceptance rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Product<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: WeightFunction, B: WeightFunction> WeightFunction for Product<A, B> {
    fn weight(&self, position: Position) -> f64 {
        self.first.weight(position) * self.second.weight(position)
    }

    fn max_weight(&self) -> f64 {
        self.first.max_weight() * self.second.max_weight()
    }

    fn inside(&self, position: Position) -> bool {
        self.first.inside(position) && self.second.inside(position)
    }

    fn dimension(&self, base: u8) -> u8 {
        self.first.dimension(base).max(self.second.dimension(base))
    }
}

impl<A: RadialWeight, B: RadialWeight> RadialWeight for Product<A, B> {
    fn weight(&self, radius: f64) -> f64 {
        self.first.weight(radius) * self.second.weight(radius)
    }

    fn max_weight(&self) -> f64 {
        self.first.max_weight() * self.second.max_weight()
    }

    fn inside(&self, radius: f64) -> bool {
        self.first.inside(radius) && self.second.inside(radius)
    }
}

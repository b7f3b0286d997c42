use crate::math::Point3;

use super::{LorenzParams, LorenzSystem};

/// Two Lorenz systems whose seeds differ only in the sign of `x`.
///
/// Run side by side, the trajectories track each other at first and then
/// diverge, showing sensitive dependence on initial conditions. Each system
/// owns its own state; only the parameter values are copied into both.
#[derive(Debug, Clone, PartialEq)]
pub struct LorenzPair {
    first: LorenzSystem,
    second: LorenzSystem,
}

impl LorenzPair {
    /// Seed of the first system.
    pub const FIRST_SEED: Point3 = Point3::new(0.01, 0.0, 0.0);
    /// Seed of the second system.
    pub const SECOND_SEED: Point3 = Point3::new(-0.01, 0.0, 0.0);

    #[must_use]
    pub fn new(params: LorenzParams) -> Self {
        Self {
            first: LorenzSystem::new(Self::FIRST_SEED, params),
            second: LorenzSystem::new(Self::SECOND_SEED, params),
        }
    }

    /// Steps both systems once and returns their new states.
    pub fn step(&mut self) -> (Point3, Point3) {
        (self.first.step(), self.second.step())
    }

    /// Resets both systems to their seeds.
    pub fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
    }

    /// Euclidean distance between the two current states.
    #[must_use]
    pub fn separation(&self) -> f64 {
        nalgebra::distance(&self.first.state(), &self.second.state())
    }

    #[must_use]
    pub fn first(&self) -> &LorenzSystem {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> &LorenzSystem {
        &self.second
    }
}

impl Default for LorenzPair {
    fn default() -> Self {
        Self::new(LorenzParams::default())
    }
}

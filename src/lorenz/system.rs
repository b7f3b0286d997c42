use crate::math::Point3;

use super::{euler_step, LorenzParams};

/// A single Lorenz trajectory: current state, its seed, and every point visited.
///
/// The trajectory only grows; [`LorenzSystem::reset`] is the one operation
/// that clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct LorenzSystem {
    seed: Point3,
    state: Point3,
    params: LorenzParams,
    trajectory: Vec<Point3>,
}

impl LorenzSystem {
    /// Creates a system at `seed` with an empty trajectory.
    #[must_use]
    pub fn new(seed: Point3, params: LorenzParams) -> Self {
        Self {
            seed,
            state: seed,
            params,
            trajectory: Vec::new(),
        }
    }

    /// Creates a system at `seed` using [`LorenzParams::default`].
    #[must_use]
    pub fn with_default_params(seed: Point3) -> Self {
        Self::new(seed, LorenzParams::default())
    }

    /// Advances one step, records the new point, and returns it.
    pub fn step(&mut self) -> Point3 {
        self.state = euler_step(&self.state, &self.params);
        self.trajectory.push(self.state);
        tracing::trace!(x = self.state.x, y = self.state.y, z = self.state.z, "lorenz step");
        self.state
    }

    /// Advances `steps` times and returns the final state.
    pub fn advance(&mut self, steps: usize) -> Point3 {
        self.reserve_steps(steps);
        for _ in 0..steps {
            self.step();
        }
        self.state
    }

    /// Pre-allocates room for `steps` more points when the allocator allows it.
    fn reserve_steps(&mut self, steps: usize) {
        if self.trajectory.try_reserve(steps).is_err() {
            tracing::debug!(steps, "trajectory pre-allocation skipped");
        }
    }

    /// Clears the trajectory and returns to the seed.
    pub fn reset(&mut self) {
        tracing::debug!(discarded = self.trajectory.len(), "lorenz system reset");
        self.trajectory.clear();
        self.state = self.seed;
    }

    /// Replaces the integration constants. The trajectory is kept.
    pub fn set_params(&mut self, params: LorenzParams) {
        self.params = params;
    }

    #[must_use]
    pub fn state(&self) -> Point3 {
        self.state
    }

    #[must_use]
    pub fn seed(&self) -> Point3 {
        self.seed
    }

    #[must_use]
    pub fn params(&self) -> &LorenzParams {
        &self.params
    }

    /// Every point produced by [`LorenzSystem::step`] since the last reset, oldest first.
    #[must_use]
    pub fn trajectory(&self) -> &[Point3] {
        &self.trajectory
    }
}

//! Explicit-Euler integration of the Lorenz system.
//!
//! ```text
//! dx/dt = sigma * (y - x)
//! dy/dt = x * (rho - z) - y
//! dz/dt = x * y - beta * z
//! ```
//!
//! Integration uses a fixed step with no error control. The trajectories are
//! meant to show the attractor's shape, not to be numerically accurate.

mod color;
mod pair;
mod system;

pub use color::position_color;
pub use pair::LorenzPair;
pub use system::LorenzSystem;

use crate::error::{IntegrationError, Result};
use crate::math::{Point3, Vector3};

/// Physical constants and time step of the Lorenz system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzParams {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
    pub dt: f64,
}

impl LorenzParams {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::InvalidParameters`] if any value is not
    /// finite or `dt` is not positive.
    pub fn new(sigma: f64, rho: f64, beta: f64, dt: f64) -> Result<Self> {
        for (name, value) in [("sigma", sigma), ("rho", rho), ("beta", beta), ("dt", dt)] {
            if !value.is_finite() {
                return Err(IntegrationError::InvalidParameters(format!(
                    "{name} must be finite, got {value}"
                ))
                .into());
            }
        }
        if dt <= 0.0 {
            return Err(IntegrationError::InvalidParameters(format!(
                "dt must be positive, got {dt}"
            ))
            .into());
        }
        Ok(Self {
            sigma,
            rho,
            beta,
            dt,
        })
    }
}

impl Default for LorenzParams {
    /// The classic chaotic regime: `sigma = 10`, `rho = 28`, `beta = 8/3`, `dt = 0.01`.
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
            dt: 0.01,
        }
    }
}

/// Evaluates the Lorenz vector field at `state`.
#[must_use]
pub fn derivative(state: &Point3, params: &LorenzParams) -> Vector3 {
    let (x, y, z) = (state.x, state.y, state.z);
    Vector3::new(
        params.sigma * (y - x),
        x * (params.rho - z) - y,
        x * y - params.beta * z,
    )
}

/// Advances `state` by one forward-Euler step of size `params.dt`.
#[must_use]
pub fn euler_step(state: &Point3, params: &LorenzParams) -> Point3 {
    state + derivative(state, params) * params.dt
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_params_are_classic() {
        let p = LorenzParams::default();
        assert_abs_diff_eq!(p.sigma, 10.0);
        assert_abs_diff_eq!(p.rho, 28.0);
        assert_abs_diff_eq!(p.beta, 8.0 / 3.0);
        assert_abs_diff_eq!(p.dt, 0.01);
    }

    #[test]
    fn new_validates() {
        assert!(LorenzParams::new(10.0, 28.0, 8.0 / 3.0, 0.01).is_ok());
        assert!(LorenzParams::new(10.0, 28.0, 8.0 / 3.0, 0.0).is_err());
        assert!(LorenzParams::new(10.0, 28.0, 8.0 / 3.0, -0.01).is_err());
        assert!(LorenzParams::new(f64::NAN, 28.0, 8.0 / 3.0, 0.01).is_err());
        assert!(LorenzParams::new(10.0, f64::INFINITY, 8.0 / 3.0, 0.01).is_err());
    }

    #[test]
    fn derivative_at_seed() {
        let d = derivative(&Point3::new(0.01, 0.0, 0.0), &LorenzParams::default());
        assert_abs_diff_eq!(d.x, -0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(d.y, 0.28, epsilon = 1e-12);
        assert_abs_diff_eq!(d.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn origin_is_a_fixed_point() {
        let origin = Point3::origin();
        assert_eq!(euler_step(&origin, &LorenzParams::default()), origin);
    }

    #[test]
    fn euler_step_from_seed() {
        let next = euler_step(&Point3::new(0.01, 0.0, 0.0), &LorenzParams::default());
        assert_abs_diff_eq!(next.x, 0.0099, epsilon = 1e-6);
        assert_abs_diff_eq!(next.y, 0.0028, epsilon = 1e-6);
        assert_abs_diff_eq!(next.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn euler_step_matches_formula_off_axis() {
        let p = LorenzParams::new(10.0, 28.0, 8.0 / 3.0, 0.005).unwrap();
        let s = Point3::new(1.0, 2.0, 3.0);
        let next = euler_step(&s, &p);
        assert_abs_diff_eq!(next.x, 1.0 + 10.0 * (2.0 - 1.0) * 0.005, epsilon = 1e-12);
        assert_abs_diff_eq!(next.y, 2.0 + (1.0 * (28.0 - 3.0) - 2.0) * 0.005, epsilon = 1e-12);
        assert_abs_diff_eq!(next.z, 3.0 + (2.0 - 8.0 / 3.0 * 3.0) * 0.005, epsilon = 1e-12);
    }
}

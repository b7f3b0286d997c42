//! Recursive fractal subdivision.
//!
//! Every subdivider is a pure function of its inputs: identical arguments
//! always yield identical, order-stable output buffers owned by the caller.

mod control;
mod koch;
mod sierpinski;

pub use control::DepthControl;
pub use koch::{koch_snowflake, subdivide_koch, subdivide_koch_toward};
pub use sierpinski::subdivide_sierpinski;

use crate::error::{Result, SubdivisionError};

/// Largest number of leaf primitives a single subdivision may produce.
pub const MAX_LEAVES: usize = 1 << 24;

/// Deepest Koch level within [`MAX_LEAVES`] (`4^12`).
pub const KOCH_MAX_DEPTH: u32 = max_depth(4);

/// Deepest Sierpinski level within [`MAX_LEAVES`] (`3^15`).
pub const SIERPINSKI_MAX_DEPTH: u32 = max_depth(3);

/// Largest recursion depth accepted by every subdivider.
pub const MAX_DEPTH: u32 = if KOCH_MAX_DEPTH < SIERPINSKI_MAX_DEPTH {
    KOCH_MAX_DEPTH
} else {
    SIERPINSKI_MAX_DEPTH
};

/// Deepest level at which `branching^depth` stays within [`MAX_LEAVES`].
#[must_use]
pub const fn max_depth(branching: usize) -> u32 {
    if branching < 2 {
        return u32::MAX;
    }
    let mut depth = 0;
    let mut leaves = 1;
    while leaves <= MAX_LEAVES / branching {
        leaves *= branching;
        depth += 1;
    }
    depth
}

/// Converts a signed, user-driven depth into a validated recursion depth.
///
/// # Errors
///
/// Returns [`SubdivisionError::NegativeDepth`] for negative input and
/// [`SubdivisionError::DepthTooLarge`] above [`MAX_DEPTH`].
pub fn checked_depth(depth: i64) -> Result<u32> {
    if depth < 0 {
        return Err(SubdivisionError::NegativeDepth(depth).into());
    }
    match u32::try_from(depth) {
        Ok(d) if d <= MAX_DEPTH => Ok(d),
        _ => Err(SubdivisionError::DepthTooLarge {
            depth,
            max: MAX_DEPTH,
        }
        .into()),
    }
}

/// Number of leaf primitives produced when each level splits into `branching` parts.
///
/// # Errors
///
/// Returns [`SubdivisionError::DepthTooLarge`] when the count would exceed
/// [`MAX_LEAVES`].
pub(crate) fn leaf_count(branching: usize, depth: u32) -> Result<usize> {
    let max = max_depth(branching);
    match branching.checked_pow(depth) {
        Some(count) if depth <= max => Ok(count),
        _ => Err(SubdivisionError::DepthTooLarge {
            depth: i64::from(depth),
            max,
        }
        .into()),
    }
}

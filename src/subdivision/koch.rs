use crate::error::Result;
use crate::geometry::{Segment2, Side};
use crate::math::polygon_2d::{orientation, Orientation};
use crate::math::{lerp, midpoint, rot90_ccw, Point2};

use super::leaf_count;

/// Height of an equilateral triangle with unit base.
const APEX_HEIGHT: f64 = 0.866_025_403_784_438_6;

/// Subdivides `p1 → p2` into a Koch curve of the given depth.
///
/// Each level replaces the middle third of every segment with the two upper
/// sides of an equilateral triangle whose apex lies to the left of the
/// segment direction. The result holds `4^depth` segments in path order.
///
/// # Errors
///
/// Returns an error if `depth` exceeds [`super::KOCH_MAX_DEPTH`].
pub fn subdivide_koch(p1: Point2, p2: Point2, depth: u32) -> Result<Vec<Segment2>> {
    subdivide_koch_toward(p1, p2, depth, Side::Left)
}

/// Like [`subdivide_koch`], with the apex of every bump placed on `side`.
///
/// # Errors
///
/// Returns an error if `depth` exceeds [`super::KOCH_MAX_DEPTH`].
pub fn subdivide_koch_toward(
    p1: Point2,
    p2: Point2,
    depth: u32,
    side: Side,
) -> Result<Vec<Segment2>> {
    let mut out = Vec::with_capacity(leaf_count(4, depth)?);
    koch_into(&mut out, p1, p2, depth, side.sign());
    tracing::debug!(depth, ?side, segments = out.len(), "koch curve subdivided");
    Ok(out)
}

/// Builds a closed Koch snowflake over the triangle `a → b → c → a`.
///
/// The bump side is picked from the triangle's winding so that every apex
/// points away from the triangle. Output is `3 * 4^depth` segments forming
/// one closed loop that starts and ends at `a`.
///
/// # Errors
///
/// Returns an error if `depth` exceeds [`super::KOCH_MAX_DEPTH`].
pub fn koch_snowflake(a: Point2, b: Point2, c: Point2, depth: u32) -> Result<Vec<Segment2>> {
    // Left of each edge is the interior for counter-clockwise winding.
    let side = match orientation(&a, &b, &c) {
        Orientation::CounterClockwise => Side::Right,
        Orientation::Clockwise | Orientation::Degenerate => Side::Left,
    };
    let mut out = Vec::with_capacity(3 * leaf_count(4, depth)?);
    for (start, end) in [(a, b), (b, c), (c, a)] {
        koch_into(&mut out, start, end, depth, side.sign());
    }
    tracing::debug!(depth, ?side, segments = out.len(), "koch snowflake built");
    Ok(out)
}

fn koch_into(out: &mut Vec<Segment2>, p1: Point2, p2: Point2, depth: u32, sign: f64) {
    if depth == 0 {
        out.push(Segment2::new(p1, p2));
        return;
    }
    let a = lerp(&p1, &p2, 1.0 / 3.0);
    let b = lerp(&p1, &p2, 2.0 / 3.0);
    let apex = midpoint(&a, &b) + rot90_ccw(&(b - a)) * (APEX_HEIGHT * sign);

    koch_into(out, p1, a, depth - 1, sign);
    koch_into(out, a, apex, depth - 1, sign);
    koch_into(out, apex, b, depth - 1, sign);
    koch_into(out, b, p2, depth - 1, sign);
}

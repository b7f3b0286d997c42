use super::{Point2, TOLERANCE};

/// Computes the signed area of the triangle `a, b, c`.
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn triangle_signed_area(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    (ab.x * ac.y - ab.y * ac.x) * 0.5
}

/// Winding order of a 2D triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    /// Zero area within [`TOLERANCE`].
    Degenerate,
}

/// Classifies the winding order of the triangle `a, b, c`.
#[must_use]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> Orientation {
    let area = triangle_signed_area(a, b, c);
    if area > TOLERANCE {
        Orientation::CounterClockwise
    } else if area < -TOLERANCE {
        Orientation::Clockwise
    } else {
        Orientation::Degenerate
    }
}

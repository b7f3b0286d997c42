use crate::math::{Point2, Vector2};

/// Which side of a directed segment a point or offset lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// Counter-clockwise from the segment direction.
    #[default]
    Left,
    /// Clockwise from the segment direction.
    Right,
}

impl Side {
    /// `+1.0` for [`Side::Left`], `-1.0` for [`Side::Right`].
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

/// A directed 2D line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    /// Creates a new segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the vector `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn length_3_4_5() {
        let s = Segment2::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert!((s.length() - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn side_sign() {
        assert!((Side::Left.sign() - 1.0).abs() < f64::EPSILON);
        assert!((Side::Right.sign() + 1.0).abs() < f64::EPSILON);
        assert_eq!(Side::default(), Side::Left);
    }
}

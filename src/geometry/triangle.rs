use crate::math::polygon_2d::triangle_signed_area;
use crate::math::Point2;

/// A 2D triangle with an ordered vertex triple.
///
/// Vertex order is significant: two triangles with the same vertices in a
/// different order are not equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2 {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Triangle2 {
    /// Creates a new triangle.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    /// Signed area, positive for counter-clockwise vertex order.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        triangle_signed_area(&self.a, &self.b, &self.c)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}

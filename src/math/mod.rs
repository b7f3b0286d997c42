pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns the point at parameter `t` along `a → b` (`t = 0` is `a`, `t = 1` is `b`).
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

/// Returns the midpoint of `a` and `b`.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    nalgebra::center(a, b)
}

/// Rotates `v` by +90° (counter-clockwise): `(x, y) → (-y, x)`.
#[must_use]
pub fn rot90_ccw(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lerp_thirds() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 6.0);
        assert_relative_eq!(lerp(&a, &b, 1.0 / 3.0), Point2::new(1.0, 2.0));
        assert_relative_eq!(lerp(&a, &b, 2.0 / 3.0), Point2::new(2.0, 4.0));
    }

    #[test]
    fn midpoint_is_symmetric() {
        let a = Point2::new(-1.0, 4.0);
        let b = Point2::new(3.0, -2.0);
        assert_eq!(midpoint(&a, &b), midpoint(&b, &a));
        assert_relative_eq!(midpoint(&a, &b), Point2::new(1.0, 1.0));
    }

    #[test]
    fn rot90_turns_x_axis_into_y_axis() {
        assert_eq!(rot90_ccw(&Vector2::new(1.0, 0.0)), Vector2::new(-0.0, 1.0));
        assert_eq!(rot90_ccw(&Vector2::new(0.0, 1.0)), Vector2::new(-1.0, 0.0));
    }
}

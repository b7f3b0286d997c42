use crate::error::Result;
use crate::geometry::Triangle2;
use crate::math::{midpoint, Point2};

use super::leaf_count;

/// Subdivides the triangle `a, b, c` into a Sierpinski gasket of the given depth.
///
/// Each level splits a triangle at its edge midpoints and keeps the three
/// corner triangles `(a, m_ab, m_ac)`, `(c, m_ac, m_bc)`, `(b, m_bc, m_ab)`,
/// in that order, dropping the central one. The result holds `3^depth`
/// triangles.
///
/// # Errors
///
/// Returns an error if `depth` exceeds [`super::SIERPINSKI_MAX_DEPTH`].
pub fn subdivide_sierpinski(a: Point2, b: Point2, c: Point2, depth: u32) -> Result<Vec<Triangle2>> {
    let mut out = Vec::with_capacity(leaf_count(3, depth)?);
    sierpinski_into(&mut out, a, b, c, depth);
    tracing::debug!(depth, triangles = out.len(), "sierpinski gasket subdivided");
    Ok(out)
}

fn sierpinski_into(out: &mut Vec<Triangle2>, a: Point2, b: Point2, c: Point2, depth: u32) {
    if depth == 0 {
        out.push(Triangle2::new(a, b, c));
        return;
    }
    let m_ab = midpoint(&a, &b);
    let m_ac = midpoint(&a, &c);
    let m_bc = midpoint(&b, &c);

    sierpinski_into(out, a, m_ab, m_ac, depth - 1);
    sierpinski_into(out, c, m_ac, m_bc, depth - 1);
    sierpinski_into(out, b, m_bc, m_ab, depth - 1);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::subdivision::SIERPINSKI_MAX_DEPTH;
    use crate::math::polygon_2d::triangle_signed_area;
    use approx::assert_relative_eq;

    fn seed() -> (Point2, Point2, Point2) {
        (
            Point2::new(-1.0, -1.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, -1.0),
        )
    }

    #[test]
    fn depth_zero_is_identity() {
        let (a, b, c) = seed();
        let tris = subdivide_sierpinski(a, b, c, 0).unwrap();
        assert_eq!(tris, vec![Triangle2::new(a, b, c)]);
    }

    #[test]
    fn triangle_count_is_power_of_three() {
        let (a, b, c) = seed();
        for d in 0..=7 {
            let tris = subdivide_sierpinski(a, b, c, d).unwrap();
            assert_eq!(tris.len(), 3usize.pow(d), "depth {d}");
        }
    }

    #[test]
    fn depth_one_keeps_corner_order() {
        let (a, b, c) = seed();
        let tris = subdivide_sierpinski(a, b, c, 1).unwrap();
        let m_ab = Point2::new(-0.5, 0.0);
        let m_ac = Point2::new(0.0, -1.0);
        let m_bc = Point2::new(0.5, 0.0);
        assert_eq!(
            tris,
            vec![
                Triangle2::new(a, m_ab, m_ac),
                Triangle2::new(c, m_ac, m_bc),
                Triangle2::new(b, m_bc, m_ab),
            ]
        );
    }

    #[test]
    fn central_hole_removes_a_quarter_per_level() {
        let (a, b, c) = seed();
        let full = Triangle2::new(a, b, c).area();
        for d in 0..=5 {
            let covered: f64 = subdivide_sierpinski(a, b, c, d)
                .unwrap()
                .iter()
                .map(Triangle2::area)
                .sum();
            assert_relative_eq!(covered, full * 0.75_f64.powi(d.try_into().unwrap()), epsilon = 1e-12);
        }
    }

    #[test]
    fn seed_centroid_falls_in_the_hole() {
        let (a, b, c) = seed();
        let center = Point2::from((a.coords + b.coords + c.coords) / 3.0);
        let tris = subdivide_sierpinski(a, b, c, 3).unwrap();
        for t in &tris {
            // Outside a triangle iff some edge has the point strictly on its far side.
            let outside = [(t.a, t.b), (t.b, t.c), (t.c, t.a)].iter().any(|(p, q)| {
                let area = triangle_signed_area(p, q, &center);
                area * t.signed_area() < 0.0
            });
            assert!(outside, "centroid covered by {t:?}");
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let (a, b, c) = seed();
        assert_eq!(
            subdivide_sierpinski(a, b, c, 4).unwrap(),
            subdivide_sierpinski(a, b, c, 4).unwrap()
        );
    }

    #[test]
    fn collinear_input_is_not_an_error() {
        let tris = subdivide_sierpinski(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            3,
        )
        .unwrap();
        assert_eq!(tris.len(), 27);
        assert!(tris.iter().all(|t| t.area() < 1e-12));
    }

    #[test]
    fn depth_above_max_fails() {
        let (a, b, c) = seed();
        assert!(subdivide_sierpinski(a, b, c, SIERPINSKI_MAX_DEPTH + 1).is_err());
    }

    #[test]
    fn accepts_depths_beyond_koch_limit() {
        let tris = subdivide_sierpinski(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            13,
        )
        .unwrap();
        assert_eq!(tris.len(), 3usize.pow(13));
    }
}

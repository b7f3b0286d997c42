use crate::math::Point3;

/// Coordinate magnitude that maps to full channel intensity.
const COLOR_SCALE: f64 = 30.0;

/// Maps a trajectory point to an RGB colour from its coordinate magnitudes.
///
/// Each channel is `|coordinate| / 30`, clamped to `[0, 1]`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn position_color(p: &Point3) -> [f32; 3] {
    let channel = |v: f64| (v.abs() / COLOR_SCALE).clamp(0.0, 1.0) as f32;
    [channel(p.x), channel(p.y), channel(p.z)]
}

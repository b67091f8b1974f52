use super::{Point2, TOLERANCE};

/// Parameter of the closest point to `p` on the infinite line through `a` and `b`.
///
/// `0.0` maps to `a`, `1.0` to `b`; the value is not clamped. Returns `None`
/// when `a` and `b` coincide.
#[must_use]
pub fn closest_parameter(p: &Point2, a: &Point2, b: &Point2) -> Option<f64> {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return None;
    }
    Some((p - a).dot(&ab) / len_sq)
}

/// Returns the minimum distance from `p` to the segment from `a` to `b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    match closest_parameter(p, a, b) {
        Some(t) => {
            let t = t.clamp(0.0, 1.0);
            (p - (a + (b - a) * t)).norm()
        }
        // Degenerate segment (zero length).
        None => (p - a).norm(),
    }
}

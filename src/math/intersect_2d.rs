use super::vector_2d::cross_2d;
use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = cross_2d(d1, d2);
    if cross.abs() < TOLERANCE {
        return None;
    }
    let delta = p2 - p1;
    let t = cross_2d(&delta, d2) / cross;
    let u = cross_2d(&delta, d1) / cross;
    Some((t, u))
}

/// Intersection point of two infinite rays, or `None` if they are parallel.
#[must_use]
pub fn ray_ray_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<Point2> {
    line_line_intersect_2d(p1, d1, p2, d2).map(|(t, _)| point_at(p1, d1, t))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}

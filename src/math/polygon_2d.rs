use super::{Point2, CLOSED_TOLERANCE_SQ};

/// Returns `true` when the first and last points coincide within
/// [`CLOSED_TOLERANCE_SQ`].
#[must_use]
pub fn is_closed(points: &[Point2]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 => {
            (last - first).norm_squared() < CLOSED_TOLERANCE_SQ
        }
        _ => false,
    }
}

/// Returns the polyline in the shape produced by the offset loops.
///
/// Open polylines are copied as-is. For closed polylines the near-duplicate
/// closing point is dropped and the first point repeated exactly.
#[must_use]
pub fn closed_form(points: &[Point2]) -> Vec<Point2> {
    if !is_closed(points) {
        return points.to_vec();
    }
    let mut result = points[..points.len() - 1].to_vec();
    result.push(points[0]);
    result
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. A repeated closing
/// point contributes nothing.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

use crate::error::Result;
use crate::math::vector_2d::{cross_2d, rotate_by, rotate_ccw, rotate_cw, unitize};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A polyline vertex together with the normals of its two adjacent segments.
#[derive(Debug, Clone, Copy)]
pub(super) struct Corner {
    /// Index of the vertex in the input polyline.
    pub index: usize,
    pub vertex: Point2,
    pub n_in: Vector2,
    pub n_out: Vector2,
    /// `n_in · n_out`.
    pub cos: f64,
}

impl Corner {
    pub fn new(index: usize, vertex: Point2, n_in: Vector2, n_out: Vector2) -> Self {
        Self {
            index,
            vertex,
            n_in,
            n_out,
            cos: n_in.dot(&n_out),
        }
    }

    /// `+1.0` for a counter-clockwise turn (or an exact reversal), `-1.0` otherwise.
    pub fn turn_sign(&self) -> f64 {
        if cross_2d(&self.n_in, &self.n_out) < 0.0 {
            -1.0
        } else {
            1.0
        }
    }
}

/// Miter join for a constant distance.
///
/// `cos` is the dot product of the two unit normals. Diverges as `cos`
/// approaches `-1.0`; callers route such corners to the U-turn handling.
#[must_use]
pub fn miter(vertex: &Point2, distance: f64, n_in: &Vector2, n_out: &Vector2, cos: f64) -> Point2 {
    vertex + (n_in + n_out) * (distance / (1.0 + cos))
}

/// Miter join for two different distances.
///
/// Starts from the constant-distance miter for `d_out`, which already lies on
/// the outgoing offset line, and slides it along the outgoing segment
/// direction until it reaches the incoming offset line. The result is the
/// intersection of both offset lines. Diverges for collinear segments, where
/// `cross(n_in, n_out)` vanishes.
#[must_use]
pub fn miter_variable(
    vertex: &Point2,
    d_in: f64,
    d_out: f64,
    n_in: &Vector2,
    n_out: &Vector2,
    cos: f64,
) -> Point2 {
    if (d_in - d_out).abs() <= TOLERANCE {
        return miter(vertex, d_in, n_in, n_out, cos);
    }
    let sin = cross_2d(n_in, n_out);
    let t_out = rotate_cw(n_out);
    vertex + (n_in + n_out) * (d_out / (1.0 + cos)) + t_out * ((d_in - d_out) / sin)
}

/// Normal of the flat cut replacing a U-turn corner.
///
/// Perpendicular to `n_in - n_out`, which stays well defined at an exact
/// reversal, and oriented so that `n_in`, the chamfer normal and `n_out`
/// rotate in the turning direction.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if both normals are equal.
pub(super) fn chamfer_normal(corner: &Corner) -> Result<Vector2> {
    let bisector = rotate_ccw(&unitize(&(corner.n_in - corner.n_out))?);
    Ok(bisector * corner.turn_sign())
}

/// `cos(threshold / 2)` for a threshold given as a cosine.
#[must_use]
pub(super) fn half_angle_cos(threshold_cos: f64) -> f64 {
    ((1.0 + threshold_cos) / 2.0).max(TOLERANCE).sqrt()
}

/// Two normals exactly `2 * acos(cos_half)` apart, symmetric about `chamfer`.
///
/// Used to offset a U-turn corner as if it turned by the threshold angle.
pub(super) fn threshold_normals(
    corner: &Corner,
    chamfer: &Vector2,
    cos_half: f64,
) -> (Vector2, Vector2) {
    let sin_half = (1.0 - cos_half * cos_half).max(0.0).sqrt() * corner.turn_sign();
    (
        rotate_by(chamfer, cos_half, -sin_half),
        rotate_by(chamfer, cos_half, sin_half),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::intersect_2d::ray_ray_intersect_2d;

    fn corner(n_in: Vector2, n_out: Vector2) -> Corner {
        Corner::new(1, Point2::new(10.0, 0.0), n_in, n_out)
    }

    #[test]
    fn right_angle_miter() {
        let c = corner(Vector2::new(0.0, 1.0), Vector2::new(-1.0, 0.0));
        let p = miter(&c.vertex, 1.0, &c.n_in, &c.n_out, c.cos);
        assert_abs_diff_eq!(p, Point2::new(9.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn variable_miter_matches_line_intersection() {
        let n_in = Vector2::new(0.0, 1.0);
        let angle = 50f64.to_radians();
        let n_out = rotate_by(&n_in, angle.cos(), angle.sin());
        let c = corner(n_in, n_out);
        let (d_in, d_out) = (0.7, 1.9);

        let p = miter_variable(&c.vertex, d_in, d_out, &c.n_in, &c.n_out, c.cos);
        let expected = ray_ray_intersect_2d(
            &(c.vertex + n_in * d_in),
            &rotate_cw(&n_in),
            &(c.vertex + n_out * d_out),
            &rotate_cw(&n_out),
        )
        .unwrap();
        assert_abs_diff_eq!(p, expected, epsilon = 1e-12);
        assert_abs_diff_eq!((p - c.vertex).dot(&n_in), d_in, epsilon = 1e-12);
        assert_abs_diff_eq!((p - c.vertex).dot(&n_out), d_out, epsilon = 1e-12);
    }

    #[test]
    fn variable_miter_with_equal_distances_is_constant_miter() {
        let c = corner(Vector2::new(0.0, 1.0), Vector2::new(-1.0, 0.0));
        let a = miter_variable(&c.vertex, 2.0, 2.0, &c.n_in, &c.n_out, c.cos);
        let b = miter(&c.vertex, 2.0, &c.n_in, &c.n_out, c.cos);
        assert_abs_diff_eq!(a, b, epsilon = 1e-15);
    }

    #[test]
    fn chamfer_normal_follows_turn_direction() {
        let n_in = Vector2::new(0.0, 1.0);
        let left = 179f64.to_radians();
        let ccw = corner(n_in, rotate_by(&n_in, left.cos(), left.sin()));
        let cw = corner(n_in, rotate_by(&n_in, left.cos(), -left.sin()));

        let a = chamfer_normal(&ccw).unwrap();
        let b = chamfer_normal(&cw).unwrap();
        assert_abs_diff_eq!(a.norm(), 1.0, epsilon = 1e-12);
        assert!(a.x < -0.99);
        assert!(b.x > 0.99);
        assert!(a.dot(&(ccw.n_in + ccw.n_out)) > 0.0);
    }

    #[test]
    fn exact_reversal_turns_counter_clockwise() {
        let c = corner(Vector2::new(0.0, 1.0), Vector2::new(0.0, -1.0));
        let ch = chamfer_normal(&c).unwrap();
        assert_abs_diff_eq!(ch, Vector2::new(-1.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn threshold_normals_span_threshold_angle() {
        let c = corner(Vector2::new(0.0, 1.0), Vector2::new(0.0, -1.0));
        let ch = chamfer_normal(&c).unwrap();
        let threshold_cos = 170f64.to_radians().cos();
        let (a, b) = threshold_normals(&c, &ch, half_angle_cos(threshold_cos));
        assert_abs_diff_eq!(a.dot(&b), threshold_cos, epsilon = 1e-12);
        assert!(a.dot(&c.n_in) > 0.0);
        assert!(b.dot(&c.n_out) > 0.0);
    }
}

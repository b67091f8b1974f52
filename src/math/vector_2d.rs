use super::{Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Rotates a vector 90° counter-clockwise.
#[must_use]
pub fn rotate_ccw(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Rotates a vector 90° clockwise.
#[must_use]
pub fn rotate_cw(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// 2D cross product (determinant of `[a b]`).
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Rotates a vector by the angle whose cosine and sine are given.
#[must_use]
pub fn rotate_by(v: &Vector2, cos: f64, sin: f64) -> Vector2 {
    Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Returns the unit vector in the direction of `v`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `v` has (near) zero length.
pub fn unitize(v: &Vector2) -> Result<Vector2> {
    v.try_normalize(TOLERANCE)
        .ok_or_else(|| GeometryError::ZeroVector.into())
}

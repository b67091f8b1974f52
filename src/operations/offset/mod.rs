//! Parallel offsetting of polylines.
//!
//! Every corner is joined with a miter. Corners the miter cannot handle are
//! resolved by policy: U-turns (turns sharper than a limit close to 180°)
//! by [`UTurnPolicy`], and, for per-segment distances, near-collinear
//! vertices whose segments disagree on the distance by [`CollinearPolicy`].

mod collinear;
mod constant;
mod corner;
mod deferred;
mod normals;
mod options;
mod polyline_offset_2d;
mod u_turn;
mod variable;

pub use corner::{miter, miter_variable};
pub use normals::segment_normals;
pub use options::{CollinearPolicy, OffsetOptions, UTurnPolicy};
pub use polyline_offset_2d::PolylineOffset2D;

use crate::error::{OffsetError, Result};
use crate::math::{Point2, Vector2};

fn check_size(what: &'static str, expected: usize, actual: usize, ok: bool) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(OffsetError::InvalidInputSize {
            what,
            expected,
            actual,
        }
        .into())
    }
}

/// Offsets a polyline by `distance`, failing on turns sharper than 177.5°.
///
/// # Errors
///
/// See [`PolylineOffset2D::execute`].
pub fn offset(distance: f64, points: &[Point2]) -> Result<Vec<Point2>> {
    PolylineOffset2D::new(points, distance).execute()
}

/// Offsets a polyline by `distance`, applying `policy` to turns sharper
/// than 175°.
///
/// # Errors
///
/// See [`PolylineOffset2D::execute`].
pub fn offset_with_policy(
    policy: UTurnPolicy,
    distance: f64,
    points: &[Point2],
) -> Result<Vec<Point2>> {
    PolylineOffset2D::new(points, distance)
        .with_options(OffsetOptions::with_policies(policy, CollinearPolicy::Fail))
        .execute()
}

/// Fully parameterized constant-distance offset.
///
/// `u_turn_cos` is the cosine of the largest turn angle joined with a miter.
///
/// # Errors
///
/// See [`PolylineOffset2D::execute`].
pub fn offset_with_directions(
    points: &[Point2],
    normals: &[Vector2],
    distance: f64,
    policy: UTurnPolicy,
    u_turn_cos: f64,
) -> Result<Vec<Point2>> {
    let options = OffsetOptions {
        u_turn_policy: policy,
        u_turn_cos,
        ..OffsetOptions::strict()
    };
    PolylineOffset2D::new(points, distance)
        .with_normals(normals)
        .with_options(options)
        .execute()
}

/// Offsets segment `i` by `distances[i]`, failing on U-turns and on
/// collinear segments with unequal distances.
///
/// # Errors
///
/// See [`PolylineOffset2D::execute`].
pub fn offset_variable(distances: &[f64], points: &[Point2]) -> Result<Vec<Point2>> {
    PolylineOffset2D::variable(points, distances).execute()
}

/// Per-segment offset with explicit policies, a 175° U-turn limit and a 2.5°
/// collinearity limit.
///
/// # Errors
///
/// See [`PolylineOffset2D::execute`].
pub fn offset_variable_with_policies(
    u_turn_policy: UTurnPolicy,
    collinear_policy: CollinearPolicy,
    distances: &[f64],
    points: &[Point2],
) -> Result<Vec<Point2>> {
    PolylineOffset2D::variable(points, distances)
        .with_options(OffsetOptions::with_policies(u_turn_policy, collinear_policy))
        .execute()
}

/// Fully parameterized per-segment offset.
///
/// # Errors
///
/// See [`PolylineOffset2D::execute`].
pub fn offset_variable_with_directions(
    points: &[Point2],
    normals: &[Vector2],
    distances: &[f64],
    u_turn_policy: UTurnPolicy,
    u_turn_cos: f64,
    collinear_policy: CollinearPolicy,
    collinear_cos: f64,
) -> Result<Vec<Point2>> {
    let options = OffsetOptions {
        u_turn_policy,
        u_turn_cos,
        collinear_policy,
        collinear_cos,
    };
    PolylineOffset2D::variable(points, distances)
        .with_normals(normals)
        .with_options(options)
        .execute()
}

use tracing::trace;

use super::check_size;
use super::corner::{miter, Corner};
use super::deferred::RawOffset;
use super::options::OffsetOptions;
use super::u_turn;
use crate::error::Result;
use crate::math::polygon_2d::{closed_form, is_closed};
use crate::math::{Point2, Vector2, ZERO_DISTANCE};

/// Offsets a polyline by one distance, given precomputed segment normals.
///
/// Closed polylines (first and last point coinciding) wrap around; the
/// result repeats its first point as the last. Open polylines keep their
/// endpoints shifted straight along the first and last normals.
///
/// # Errors
///
/// - `OffsetError::InvalidInputSize` for fewer than 2 points or a normal
///   count other than `points.len() - 1`
/// - `OffsetError::UTurnExceeded` under [`super::UTurnPolicy::Fail`]
pub fn offset_constant(
    points: &[Point2],
    normals: &[Vector2],
    distance: f64,
    options: &OffsetOptions,
) -> Result<Vec<Point2>> {
    check_size("points", 2, points.len(), points.len() >= 2)?;
    let n = points.len();
    check_size("normals", n - 1, normals.len(), normals.len() == n - 1)?;

    if distance.abs() < ZERO_DISTANCE {
        return Ok(closed_form(points));
    }

    let closed = is_closed(points);
    let mut raw = RawOffset::with_capacity(n + 2);

    if closed {
        let m = n - 1;
        for i in 0..m {
            let prev = if i == 0 { m - 1 } else { i - 1 };
            let corner = Corner::new(i, points[i], normals[prev], normals[i]);
            push_corner(&mut raw, &corner, distance, options)?;
        }
        raw.close();
    } else {
        raw.push(points[0] + normals[0] * distance, 0);
        for i in 1..n - 1 {
            let corner = Corner::new(i, points[i], normals[i - 1], normals[i]);
            push_corner(&mut raw, &corner, distance, options)?;
        }
        raw.push(points[n - 1] + normals[n - 2] * distance, n - 1);
    }

    trace!(input = n, output = raw.points.len(), closed, "constant offset");
    Ok(raw.into_points())
}

fn push_corner(
    raw: &mut RawOffset,
    corner: &Corner,
    distance: f64,
    options: &OffsetOptions,
) -> Result<()> {
    if corner.cos < options.u_turn_cos {
        return u_turn::resolve_constant(raw, corner, distance, options);
    }
    let point = miter(&corner.vertex, distance, &corner.n_in, &corner.n_out, corner.cos);
    raw.push(point, corner.index);
    Ok(())
}

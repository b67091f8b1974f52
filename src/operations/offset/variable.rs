use tracing::trace;

use super::corner::{miter_variable, Corner};
use super::deferred::{self, RawOffset};
use super::options::OffsetOptions;
use super::{check_size, collinear, u_turn};
use crate::error::Result;
use crate::math::polygon_2d::{closed_form, is_closed};
use crate::math::{Point2, Vector2, TOLERANCE, ZERO_DISTANCE};

/// Offsets every segment of a polyline by its own distance, given
/// precomputed segment normals.
///
/// Behaves like [`super::constant::offset_constant`] and additionally
/// resolves near-collinear vertices with unequal distances according to
/// [`OffsetOptions::collinear_policy`].
///
/// # Errors
///
/// - `OffsetError::InvalidInputSize` for fewer than 2 points, or normal or
///   distance counts other than `points.len() - 1`
/// - `OffsetError::UTurnExceeded` under [`super::UTurnPolicy::Fail`]
/// - `OffsetError::CollinearUnequalDistance` under
///   [`super::CollinearPolicy::Fail`]
pub fn offset_variable(
    points: &[Point2],
    normals: &[Vector2],
    distances: &[f64],
    options: &OffsetOptions,
) -> Result<Vec<Point2>> {
    check_size("points", 2, points.len(), points.len() >= 2)?;
    let n = points.len();
    check_size("normals", n - 1, normals.len(), normals.len() == n - 1)?;
    check_size("distances", n - 1, distances.len(), distances.len() == n - 1)?;

    if distances.iter().all(|d| d.abs() < ZERO_DISTANCE) {
        return Ok(closed_form(points));
    }

    let closed = is_closed(points);
    let mut raw = RawOffset::with_capacity(n + 2);

    if closed {
        let m = n - 1;
        for i in 0..m {
            let prev = if i == 0 { m - 1 } else { i - 1 };
            let corner = Corner::new(i, points[i], normals[prev], normals[i]);
            push_corner(&mut raw, &corner, distances[prev], distances[i], options)?;
        }
    } else {
        raw.push(points[0] + normals[0] * distances[0], 0);
        for i in 1..n - 1 {
            let corner = Corner::new(i, points[i], normals[i - 1], normals[i]);
            push_corner(&mut raw, &corner, distances[i - 1], distances[i], options)?;
        }
        raw.push(points[n - 1] + normals[n - 2] * distances[n - 2], n - 1);
    }

    deferred::resolve(&mut raw, points, closed);
    if closed {
        raw.close();
    }

    trace!(input = n, output = raw.points.len(), closed, "variable offset");
    Ok(raw.into_points())
}

fn push_corner(
    raw: &mut RawOffset,
    corner: &Corner,
    d_in: f64,
    d_out: f64,
    options: &OffsetOptions,
) -> Result<()> {
    if corner.cos < options.u_turn_cos {
        return u_turn::resolve_variable(raw, corner, d_in, d_out, options);
    }
    if corner.cos > options.collinear_cos && (d_in - d_out).abs() > TOLERANCE {
        return collinear::resolve(raw, corner, d_in, d_out, options);
    }
    let point = miter_variable(
        &corner.vertex,
        d_in,
        d_out,
        &corner.n_in,
        &corner.n_out,
        corner.cos,
    );
    raw.push(point, corner.index);
    Ok(())
}

//! Corners that turn back on themselves sharper than the configured limit.
//!
//! The miter point of such a corner runs off towards infinity, so it is
//! replaced according to [`UTurnPolicy`].

use tracing::debug;

use super::corner::{chamfer_normal, half_angle_cos, miter, threshold_normals, Corner};
use super::deferred::RawOffset;
use super::options::{OffsetOptions, UTurnPolicy};
use crate::error::{OffsetError, PolyoffsetError, Result};
use crate::math::angle::degrees_of_cos;
use crate::math::intersect_2d::ray_ray_intersect_2d;
use crate::math::vector_2d::rotate_cw;
use crate::math::{Point2, Vector2};

fn exceeded(corner: &Corner, options: &OffsetOptions) -> PolyoffsetError {
    OffsetError::UTurnExceeded {
        index: corner.index,
        angle_deg: degrees_of_cos(corner.cos),
        max_angle_deg: degrees_of_cos(options.u_turn_cos),
    }
    .into()
}

/// Intersection of the offset lines of two normals at `vertex`.
fn offset_lines_meet(
    vertex: &Point2,
    n_a: &Vector2,
    d_a: f64,
    n_b: &Vector2,
    d_b: f64,
) -> Option<Point2> {
    ray_ray_intersect_2d(
        &(vertex + n_a * d_a),
        &rotate_cw(n_a),
        &(vertex + n_b * d_b),
        &rotate_cw(n_b),
    )
}

/// Resolves a U-turn corner for a constant distance.
///
/// # Errors
///
/// Returns `OffsetError::UTurnExceeded` under [`UTurnPolicy::Fail`].
pub(super) fn resolve_constant(
    raw: &mut RawOffset,
    corner: &Corner,
    distance: f64,
    options: &OffsetOptions,
) -> Result<()> {
    match options.u_turn_policy {
        UTurnPolicy::Fail => Err(exceeded(corner, options)),
        UTurnPolicy::Chamfer => {
            let chamfer = chamfer_normal(corner)?;
            let v = &corner.vertex;
            let first = miter(v, distance, &corner.n_in, &chamfer, corner.n_in.dot(&chamfer));
            let second = miter(v, distance, &chamfer, &corner.n_out, chamfer.dot(&corner.n_out));
            debug!(index = corner.index, "chamfering U-turn");
            raw.push(first, corner.index);
            raw.push(second, corner.index);
            Ok(())
        }
        UTurnPolicy::UseThreshold => {
            let chamfer = chamfer_normal(corner)?;
            let cos_half = half_angle_cos(options.u_turn_cos);
            debug!(index = corner.index, "clamping U-turn to threshold angle");
            raw.push(corner.vertex + chamfer * (distance / cos_half), corner.index);
            Ok(())
        }
        UTurnPolicy::Skip => {
            debug!(index = corner.index, "skipping U-turn");
            Ok(())
        }
    }
}

/// Resolves a U-turn corner whose two segments have their own distances.
///
/// Chamfer and threshold points are found by intersecting offset lines
/// since the distances on either side differ.
///
/// # Errors
///
/// Returns `OffsetError::UTurnExceeded` under [`UTurnPolicy::Fail`].
pub(super) fn resolve_variable(
    raw: &mut RawOffset,
    corner: &Corner,
    d_in: f64,
    d_out: f64,
    options: &OffsetOptions,
) -> Result<()> {
    let v = &corner.vertex;
    match options.u_turn_policy {
        UTurnPolicy::Fail => Err(exceeded(corner, options)),
        UTurnPolicy::Chamfer => {
            let chamfer = chamfer_normal(corner)?;
            let d_chamfer = 0.5 * (d_in + d_out);
            let fallback = v + chamfer * d_chamfer;
            let first = offset_lines_meet(v, &corner.n_in, d_in, &chamfer, d_chamfer)
                .unwrap_or(fallback);
            let second = offset_lines_meet(v, &chamfer, d_chamfer, &corner.n_out, d_out)
                .unwrap_or(fallback);
            debug!(index = corner.index, d_in, d_out, "chamfering U-turn");
            raw.push(first, corner.index);
            raw.push(second, corner.index);
            Ok(())
        }
        UTurnPolicy::UseThreshold => {
            let chamfer = chamfer_normal(corner)?;
            let cos_half = half_angle_cos(options.u_turn_cos);
            let (n_a, n_b) = threshold_normals(corner, &chamfer, cos_half);
            let point = offset_lines_meet(v, &n_a, d_in, &n_b, d_out)
                .unwrap_or_else(|| v + chamfer * (0.5 * (d_in + d_out) / cos_half));
            debug!(index = corner.index, d_in, d_out, "clamping U-turn to threshold angle");
            raw.push(point, corner.index);
            Ok(())
        }
        UTurnPolicy::Skip => {
            debug!(index = corner.index, "skipping U-turn");
            Ok(())
        }
    }
}

use tracing::debug;

use super::corner::Corner;
use super::deferred::{DeferredFix, RawOffset};
use super::options::{CollinearPolicy, OffsetOptions};
use crate::error::{OffsetError, Result};

/// Resolves a near-collinear corner whose segments have different distances.
///
/// The two offset lines are (nearly) parallel, so no single miter point
/// exists. `Proportional` and `Project` emit a placeholder that lies on the
/// projection ray `vertex + s * (n_in + n_out)`; it is repositioned by
/// [`super::deferred::resolve`].
///
/// # Errors
///
/// Returns `OffsetError::CollinearUnequalDistance` under
/// [`CollinearPolicy::Fail`].
pub(super) fn resolve(
    raw: &mut RawOffset,
    corner: &Corner,
    d_in: f64,
    d_out: f64,
    options: &OffsetOptions,
) -> Result<()> {
    let direction = corner.n_in + corner.n_out;
    let placeholder = corner.vertex + direction * (0.25 * (d_in + d_out));

    match options.collinear_policy {
        CollinearPolicy::Fail => Err(OffsetError::CollinearUnequalDistance {
            index: corner.index,
            distance_in: d_in,
            distance_out: d_out,
        }
        .into()),
        CollinearPolicy::Skip => {
            debug!(index = corner.index, d_in, d_out, "skipping collinear vertex");
            Ok(())
        }
        CollinearPolicy::Proportional => {
            debug!(index = corner.index, d_in, d_out, "deferring collinear vertex");
            raw.defer(
                placeholder,
                corner.index,
                DeferredFix::Proportional {
                    input: corner.index,
                },
            );
            Ok(())
        }
        CollinearPolicy::Project => {
            debug!(index = corner.index, d_in, d_out, "deferring collinear vertex");
            raw.defer(placeholder, corner.index, DeferredFix::Project { direction });
            Ok(())
        }
        CollinearPolicy::StepWithTwoPoints => {
            debug!(index = corner.index, d_in, d_out, "stepping between offset distances");
            raw.push(corner.vertex + corner.n_in * d_in, corner.index);
            raw.push(corner.vertex + corner.n_out * d_out, corner.index);
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::PolyoffsetError;
    use crate::math::{Point2, Vector2};

    fn straight() -> Corner {
        Corner::new(
            2,
            Point2::new(5.0, 0.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(0.0, 1.0),
        )
    }

    fn run(policy: CollinearPolicy) -> Result<RawOffset> {
        let mut raw = RawOffset::default();
        let opts = OffsetOptions::default().with_collinear_policy(policy);
        resolve(&mut raw, &straight(), 1.0, 2.0, &opts)?;
        Ok(raw)
    }

    #[test]
    fn fail_reports_both_distances() {
        let err = run(CollinearPolicy::Fail).unwrap_err();
        assert!(matches!(
            err,
            PolyoffsetError::Offset(OffsetError::CollinearUnequalDistance { index: 2, .. })
        ));
    }

    #[test]
    fn step_emits_one_point_per_segment() {
        let raw = run(CollinearPolicy::StepWithTwoPoints).unwrap();
        assert_eq!(raw.points, vec![Point2::new(5.0, 1.0), Point2::new(5.0, 2.0)]);
        assert!(raw.deferred.is_empty());
    }

    #[test]
    fn proportional_and_project_defer_a_placeholder() {
        let raw = run(CollinearPolicy::Proportional).unwrap();
        assert_eq!(raw.points.len(), 1);
        assert_abs_diff_eq!(raw.points[0], Point2::new(5.0, 1.5), epsilon = 1e-12);
        assert_eq!(raw.deferred[0].fix, DeferredFix::Proportional { input: 2 });

        let raw = run(CollinearPolicy::Project).unwrap();
        assert_eq!(
            raw.deferred[0].fix,
            DeferredFix::Project {
                direction: Vector2::new(0.0, 2.0)
            }
        );
    }

    #[test]
    fn skip_emits_nothing() {
        let raw = run(CollinearPolicy::Skip).unwrap();
        assert!(raw.points.is_empty());
    }
}

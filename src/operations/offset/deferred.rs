//! Output bookkeeping and the deferred correction pass.
//!
//! Collinear vertices with unequal distances under the `Proportional` and
//! `Project` policies cannot be placed until their resolved neighbors are
//! known. The main loop emits a placeholder and records the output index;
//! [`resolve`] repositions every placeholder once the loop has finished.

use tracing::{debug, warn};

use crate::math::distance_2d::closest_parameter;
use crate::math::intersect_2d::{line_line_intersect_2d, point_at};
use crate::math::{Point2, Vector2};

/// How a placeholder point gets its final position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum DeferredFix {
    /// Interpolate between the anchors at the parameter the input vertex has
    /// between the anchors' input vertices.
    Proportional { input: usize },
    /// Intersect the ray from the placeholder along `direction` with the
    /// line through the anchors.
    Project { direction: Vector2 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct DeferredPoint {
    /// Index into [`RawOffset::points`].
    pub output: usize,
    pub fix: DeferredFix,
}

/// Offset points under construction.
#[derive(Debug, Default)]
pub(super) struct RawOffset {
    pub points: Vec<Point2>,
    /// Input vertex each output point was derived from.
    pub sources: Vec<usize>,
    /// Placeholders awaiting [`resolve`], in ascending output order.
    pub deferred: Vec<DeferredPoint>,
}

impl RawOffset {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            sources: Vec::with_capacity(capacity),
            deferred: Vec::new(),
        }
    }

    pub fn push(&mut self, point: Point2, source: usize) {
        self.points.push(point);
        self.sources.push(source);
    }

    pub fn defer(&mut self, placeholder: Point2, source: usize, fix: DeferredFix) {
        self.deferred.push(DeferredPoint {
            output: self.points.len(),
            fix,
        });
        self.push(placeholder, source);
    }

    /// Repeats the first point as the last one.
    pub fn close(&mut self) {
        if let (Some(&first), Some(&source)) = (self.points.first(), self.sources.first()) {
            self.push(first, source);
        }
    }

    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }
}

/// Groups deferred entries into runs of consecutive output indices.
///
/// Each run holds positions into `deferred`, in ring order. For a closed ring
/// a run touching the last index continues into a run starting at index 0.
fn group_runs(deferred: &[DeferredPoint], len: usize, closed: bool) -> Vec<Vec<usize>> {
    let mut runs: Vec<Vec<usize>> = Vec::new();
    for (pos, entry) in deferred.iter().enumerate() {
        let extends = runs
            .last()
            .and_then(|run| run.last())
            .is_some_and(|&p| deferred[p].output + 1 == entry.output);
        if let (true, Some(run)) = (extends, runs.last_mut()) {
            run.push(pos);
        } else {
            runs.push(vec![pos]);
        }
    }

    if closed && runs.len() > 1 {
        let starts_at_zero = deferred.first().is_some_and(|d| d.output == 0);
        let ends_at_last = deferred.last().is_some_and(|d| d.output + 1 == len);
        if starts_at_zero && ends_at_last {
            let head = runs.remove(0);
            if let Some(tail) = runs.last_mut() {
                tail.extend(head);
            }
        }
    }
    runs
}

/// Resolved output indices immediately before and after a run.
fn anchors(
    first: usize,
    last: usize,
    run_len: usize,
    len: usize,
    closed: bool,
) -> Option<(usize, usize)> {
    if run_len >= len {
        return None;
    }
    let before = match first {
        0 if closed => len - 1,
        0 => return None,
        _ => first - 1,
    };
    let after = if last + 1 == len {
        if closed {
            0
        } else {
            return None;
        }
    } else {
        last + 1
    };
    Some((before, after))
}

/// Repositions every deferred placeholder in `raw`.
///
/// `raw` must not contain the repeated closing point yet: for a closed ring
/// runs wrap around the end of `raw.points`.
pub(super) fn resolve(raw: &mut RawOffset, input: &[Point2], closed: bool) {
    if raw.deferred.is_empty() {
        return;
    }
    let len = raw.points.len();
    let runs = group_runs(&raw.deferred, len, closed);
    debug!(
        deferred = raw.deferred.len(),
        runs = runs.len(),
        "resolving deferred offset points"
    );

    for run in runs {
        let (Some(&head), Some(&tail)) = (run.first(), run.last()) else {
            continue;
        };
        let first = raw.deferred[head].output;
        let last = raw.deferred[tail].output;
        let Some((before, after)) = anchors(first, last, run.len(), len, closed) else {
            warn!(first, last, "deferred run has no resolved neighbors; keeping placeholders");
            continue;
        };

        let a_out = raw.points[before];
        let b_out = raw.points[after];
        let a_in = input[raw.sources[before]];
        let b_in = input[raw.sources[after]];

        for &pos in &run {
            let entry = raw.deferred[pos];
            let placeholder = raw.points[entry.output];
            let fixed = match entry.fix {
                DeferredFix::Proportional { input: vertex } => {
                    closest_parameter(&input[vertex], &a_in, &b_in)
                        .map(|t| a_out + (b_out - a_out) * t)
                }
                DeferredFix::Project { direction } => {
                    line_line_intersect_2d(&placeholder, &direction, &a_out, &(b_out - a_out))
                        .map(|(t, _)| point_at(&placeholder, &direction, t))
                }
            };
            match fixed {
                Some(point) => raw.points[entry.output] = point,
                None => warn!(output = entry.output, "degenerate anchors; keeping placeholder"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn proportional(outputs: &[usize]) -> Vec<DeferredPoint> {
        outputs
            .iter()
            .map(|&output| DeferredPoint {
                output,
                fix: DeferredFix::Proportional { input: output },
            })
            .collect()
    }

    fn outputs(deferred: &[DeferredPoint], runs: &[Vec<usize>]) -> Vec<Vec<usize>> {
        runs.iter()
            .map(|run| run.iter().map(|&p| deferred[p].output).collect())
            .collect()
    }

    #[test]
    fn consecutive_indices_form_runs() {
        let d = proportional(&[1, 2, 5, 7, 8]);
        let runs = group_runs(&d, 10, false);
        assert_eq!(outputs(&d, &runs), vec![vec![1, 2], vec![5], vec![7, 8]]);
    }

    #[test]
    fn closed_ring_merges_wrapping_run() {
        let d = proportional(&[0, 1, 4, 8, 9]);
        let runs = group_runs(&d, 10, true);
        assert_eq!(outputs(&d, &runs), vec![vec![4], vec![8, 9, 0, 1]]);
    }

    #[test]
    fn open_polyline_never_merges() {
        let d = proportional(&[0, 1, 9]);
        let runs = group_runs(&d, 10, false);
        assert_eq!(runs.len(), 2);
    }

    #[test]
    fn anchors_wrap_for_closed_rings() {
        assert_eq!(anchors(8, 1, 4, 10, true), Some((7, 2)));
        assert_eq!(anchors(0, 2, 3, 10, true), Some((9, 3)));
        assert_eq!(anchors(7, 9, 3, 10, true), Some((6, 0)));
        assert_eq!(anchors(0, 2, 3, 10, false), None);
        assert_eq!(anchors(0, 9, 10, 10, true), None);
    }

    #[test]
    fn proportional_run_lands_between_anchors() {
        let input = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(20.0, 0.0),
            Point2::new(30.0, 0.0),
        ];
        let mut raw = RawOffset::with_capacity(4);
        raw.push(Point2::new(0.0, 1.0), 0);
        raw.defer(Point2::new(10.0, 1.5), 1, DeferredFix::Proportional { input: 1 });
        raw.defer(Point2::new(20.0, 2.5), 2, DeferredFix::Proportional { input: 2 });
        raw.push(Point2::new(30.0, 3.0), 3);

        resolve(&mut raw, &input, false);
        assert_abs_diff_eq!(raw.points[1], Point2::new(10.0, 5.0 / 3.0), epsilon = 1e-12);
        assert_abs_diff_eq!(raw.points[2], Point2::new(20.0, 7.0 / 3.0), epsilon = 1e-12);
    }

    #[test]
    fn projection_slides_along_direction() {
        let input = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 0.0),
        ];
        let mut raw = RawOffset::with_capacity(3);
        raw.push(Point2::new(0.0, 1.0), 0);
        raw.defer(
            Point2::new(5.0, 1.0),
            1,
            DeferredFix::Project {
                direction: Vector2::new(1.0, 1.0),
            },
        );
        raw.push(Point2::new(10.0, 3.0), 2);

        resolve(&mut raw, &input, false);
        // Ray (5, 1) + t (1, 1) meets y = 1 + 0.2 x at t = 1.25.
        assert_abs_diff_eq!(raw.points[1], Point2::new(6.25, 2.25), epsilon = 1e-12);
    }

    #[test]
    fn fully_deferred_ring_keeps_placeholders() {
        let input = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        let mut raw = RawOffset::with_capacity(3);
        for (i, p) in input.iter().enumerate() {
            raw.defer(*p, i, DeferredFix::Proportional { input: i });
        }
        resolve(&mut raw, &input, true);
        assert_eq!(raw.points, input);
    }

    #[test]
    fn close_repeats_first_point() {
        let mut raw = RawOffset::with_capacity(3);
        raw.push(Point2::new(1.0, 2.0), 0);
        raw.push(Point2::new(3.0, 4.0), 1);
        raw.close();
        assert_eq!(raw.points.len(), 3);
        assert_eq!(raw.points[2], raw.points[0]);
        assert_eq!(raw.sources[2], 0);

        let mut empty = RawOffset::default();
        empty.close();
        assert!(empty.into_points().is_empty());
    }
}

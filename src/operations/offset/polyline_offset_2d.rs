use super::constant::offset_constant;
use super::normals::segment_normals;
use super::options::OffsetOptions;
use super::variable::offset_variable;
use super::check_size;
use crate::error::Result;
use crate::math::polygon_2d::closed_form;
use crate::math::{Point2, Vector2, ZERO_DISTANCE};

#[derive(Debug, Clone, Copy)]
enum Distance<'a> {
    Constant(f64),
    PerSegment(&'a [f64]),
}

/// Offsets a 2D polyline by a constant or per-segment distance.
///
/// The input is borrowed and never modified; [`execute`](Self::execute)
/// returns a new polyline whose length can differ from the input when
/// chamfer, skip or two-point policies apply.
///
/// # Sign Convention
///
/// - Positive distance: left offset (relative to walking direction), which
///   shrinks a counter-clockwise closed polyline
/// - Negative distance: right offset
#[derive(Debug, Clone)]
pub struct PolylineOffset2D<'a> {
    points: &'a [Point2],
    distance: Distance<'a>,
    normals: Option<&'a [Vector2]>,
    options: OffsetOptions,
}

impl<'a> PolylineOffset2D<'a> {
    /// Creates a constant-distance offset with [`OffsetOptions::strict`].
    #[must_use]
    pub fn new(points: &'a [Point2], distance: f64) -> Self {
        Self {
            points,
            distance: Distance::Constant(distance),
            normals: None,
            options: OffsetOptions::strict(),
        }
    }

    /// Creates a per-segment offset; `distances[i]` applies to the segment
    /// from `points[i]` to `points[i + 1]`.
    #[must_use]
    pub fn variable(points: &'a [Point2], distances: &'a [f64]) -> Self {
        Self {
            points,
            distance: Distance::PerSegment(distances),
            normals: None,
            options: OffsetOptions::strict(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: OffsetOptions) -> Self {
        self.options = options;
        self
    }

    /// Uses precomputed segment normals instead of deriving them from the
    /// points.
    #[must_use]
    pub fn with_normals(mut self, normals: &'a [Vector2]) -> Self {
        self.normals = Some(normals);
        self
    }

    fn is_zero(&self) -> bool {
        match self.distance {
            Distance::Constant(d) => d.abs() < ZERO_DISTANCE,
            Distance::PerSegment(ds) => ds.iter().all(|d| d.abs() < ZERO_DISTANCE),
        }
    }

    /// Executes the offset operation.
    ///
    /// # Errors
    ///
    /// - `OffsetError::InvalidInputSize` if fewer than 2 points are given or
    ///   the normal or distance counts do not match the segment count
    /// - `OffsetError::DegenerateSegment` if a segment is too short to have
    ///   a normal
    /// - `OffsetError::UTurnExceeded` / `OffsetError::CollinearUnequalDistance`
    ///   if a degenerate corner meets a `Fail` policy
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let n = self.points.len();
        check_size("points", 2, n, n >= 2)?;
        if let Some(normals) = self.normals {
            check_size("normals", n - 1, normals.len(), normals.len() == n - 1)?;
        }
        if let Distance::PerSegment(ds) = self.distance {
            check_size("distances", n - 1, ds.len(), ds.len() == n - 1)?;
        }

        if self.is_zero() {
            return Ok(closed_form(self.points));
        }

        let computed;
        let normals = match self.normals {
            Some(normals) => normals,
            None => {
                computed = segment_normals(self.points)?;
                computed.as_slice()
            }
        };

        match self.distance {
            Distance::Constant(d) => offset_constant(self.points, normals, d, &self.options),
            Distance::PerSegment(ds) => offset_variable(self.points, normals, ds, &self.options),
        }
    }
}

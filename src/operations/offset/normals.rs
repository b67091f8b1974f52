use crate::error::{OffsetError, Result};
use crate::math::vector_2d::rotate_ccw;
use crate::math::{Point2, Vector2, MIN_SEGMENT_LENGTH};

/// Computes the left-pointing unit normal of every segment.
///
/// Returns one normal per consecutive point pair. For a counter-clockwise
/// closed polyline the normals point inward.
///
/// # Errors
///
/// Returns `OffsetError::DegenerateSegment` if a segment is shorter than
/// [`MIN_SEGMENT_LENGTH`]. Duplicate points must be removed by the caller.
pub fn segment_normals(points: &[Point2]) -> Result<Vec<Vector2>> {
    points
        .windows(2)
        .enumerate()
        .map(|(index, pair)| -> Result<Vector2> {
            let d = pair[1] - pair[0];
            let length = d.norm();
            if length < MIN_SEGMENT_LENGTH {
                return Err(OffsetError::DegenerateSegment { index, length }.into());
            }
            Ok(rotate_ccw(&(d / length)))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::PolyoffsetError;

    #[test]
    fn ccw_square_normals_point_inward() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
            Point2::new(0.0, 0.0),
        ];
        let normals = segment_normals(&pts).unwrap();
        assert_eq!(normals.len(), 4);
        assert_abs_diff_eq!(normals[0], Vector2::new(0.0, 1.0), epsilon = 1e-15);
        assert_abs_diff_eq!(normals[1], Vector2::new(-1.0, 0.0), epsilon = 1e-15);
        assert_abs_diff_eq!(normals[2], Vector2::new(0.0, -1.0), epsilon = 1e-15);
        assert_abs_diff_eq!(normals[3], Vector2::new(1.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn normals_are_unit_length() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 4.0),
            Point2::new(-1.0, 7.5),
        ];
        for n in segment_normals(&pts).unwrap() {
            assert_abs_diff_eq!(n.norm(), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn duplicate_point_is_degenerate() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1e-7),
        ];
        let err = segment_normals(&pts).unwrap_err();
        assert!(matches!(
            err,
            PolyoffsetError::Offset(OffsetError::DegenerateSegment { index: 1, .. })
        ));
    }
}

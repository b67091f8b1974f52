//! 2D polyline offsetting.
//!
//! Shifts every segment of an open or closed polyline by a constant or
//! per-segment distance and joins the shifted segments with miters. Sharp
//! reversals and near-collinear segments with unequal distances are resolved
//! by explicit [`UTurnPolicy`] and [`CollinearPolicy`] choices.
//!
//! ```
//! use polyoffset::{offset, Point2};
//!
//! let square = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//!     Point2::new(0.0, 0.0),
//! ];
//! let inset = offset(1.0, &square)?;
//! assert_eq!(inset.len(), 5);
//! assert!((inset[0] - Point2::new(1.0, 1.0)).norm() < 1e-12);
//! # Ok::<(), polyoffset::PolyoffsetError>(())
//! ```

pub mod error;
pub mod math;
pub mod operations;

pub use error::{GeometryError, OffsetError, PolyoffsetError, Result};
pub use math::{Point2, Vector2};
pub use operations::offset::{
    offset, offset_variable, offset_variable_with_directions, offset_variable_with_policies,
    offset_with_directions, offset_with_policy, CollinearPolicy, OffsetOptions, PolylineOffset2D,
    UTurnPolicy,
};

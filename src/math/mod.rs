pub mod angle;
pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod vector_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Squared distance between first and last point below which a polyline is closed.
pub const CLOSED_TOLERANCE_SQ: f64 = 1e-12;

/// Segments shorter than this cannot produce a normal.
pub const MIN_SEGMENT_LENGTH: f64 = 1e-6;

/// Offset distances below this magnitude are treated as zero.
pub const ZERO_DISTANCE: f64 = 1e-12;

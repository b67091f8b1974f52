use thiserror::Error;

/// Top-level error type for the polyline offset engine.
#[derive(Debug, Error)]
pub enum PolyoffsetError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Offset(#[from] OffsetError),
}

/// Errors raised by the 2D vector primitives.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised while offsetting a polyline.
#[derive(Debug, Error, PartialEq)]
pub enum OffsetError {
    #[error("invalid input size: expected {expected} {what}, got {actual}")]
    InvalidInputSize {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("degenerate segment {index}: length {length:e} is below the minimum")]
    DegenerateSegment { index: usize, length: f64 },

    #[error(
        "turn angle {angle_deg:.3}° at vertex {index} exceeds the maximum of {max_angle_deg:.3}°"
    )]
    UTurnExceeded {
        index: usize,
        angle_deg: f64,
        max_angle_deg: f64,
    },

    #[error(
        "collinear segments at vertex {index} have unequal offset distances {distance_in} and {distance_out}"
    )]
    CollinearUnequalDistance {
        index: usize,
        distance_in: f64,
        distance_out: f64,
    },
}

/// Convenience type alias for results using [`PolyoffsetError`].
pub type Result<T> = std::result::Result<T, PolyoffsetError>;

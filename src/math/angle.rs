//! Angular thresholds expressed as cosines.
//!
//! The offset engine compares the dot product of two unit normals against
//! these values directly, so no `acos` is evaluated per vertex. The turn angle
//! between two segments equals the angle between their normals: `1.0` means
//! straight, `-1.0` means a full reversal.

/// `cos(175°)`: default U-turn limit when a policy is chosen explicitly.
pub const COS_175_DEG: f64 = -0.996_194_698_091_745_5;

/// `cos(177.5°)`: conservative default U-turn limit for the `Fail` entry points.
pub const COS_177_5_DEG: f64 = -0.999_048_221_581_857_8;

/// `cos(179°)`: hardest U-turn limit accepted by [`crate::OffsetOptions`].
pub const COS_179_DEG: f64 = -0.999_847_695_156_391_3;

/// `cos(2.5°)`: turns flatter than this count as collinear.
pub const COS_2_5_DEG: f64 = 0.999_048_221_581_857_8;

/// Cosine of an angle given in degrees.
#[must_use]
pub fn cos_of_degrees(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Angle in degrees for a cosine, clamped into the `acos` domain.
///
/// Only used for reporting; comparisons stay in cosine space.
#[must_use]
pub fn degrees_of_cos(cos: f64) -> f64 {
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

use crate::math::angle::{cos_of_degrees, COS_175_DEG, COS_177_5_DEG, COS_179_DEG, COS_2_5_DEG};

/// What to do at a vertex whose turn angle exceeds the U-turn limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UTurnPolicy {
    /// Return `OffsetError::UTurnExceeded`.
    #[default]
    Fail,
    /// Replace the corner with a flat cut (two points).
    Chamfer,
    /// Offset the corner as if it turned by exactly the limit angle.
    UseThreshold,
    /// Drop the corner; its neighbors are joined by a straight edge.
    Skip,
}

/// What to do at a near-collinear vertex whose two segments have different
/// offset distances. Only consulted by variable-distance offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollinearPolicy {
    /// Return `OffsetError::CollinearUnequalDistance`.
    #[default]
    Fail,
    /// Drop the vertex.
    Skip,
    /// Place the point between its resolved neighbors at the parameter the
    /// input vertex has between the corresponding input points.
    Proportional,
    /// Slide the point along the sum of both normals onto the line through
    /// its resolved neighbors.
    ///
    /// At shallow angles with very different distances the point may land
    /// outside the span of the original segments.
    Project,
    /// Emit one point per segment, keeping every offset edge parallel.
    StepWithTwoPoints,
}

/// Tolerances and policies for one offset call.
///
/// Angular limits are stored as cosines of the angle between consecutive
/// segment normals, so `u_turn_cos` is close to `-1.0` and `collinear_cos`
/// close to `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetOptions {
    pub u_turn_policy: UTurnPolicy,
    /// Turns with `cos < u_turn_cos` are U-turns.
    pub u_turn_cos: f64,
    pub collinear_policy: CollinearPolicy,
    /// Turns with `cos > collinear_cos` are collinear.
    pub collinear_cos: f64,
}

impl Default for OffsetOptions {
    fn default() -> Self {
        Self::strict()
    }
}

impl OffsetOptions {
    /// `Fail` everywhere with the conservative 177.5° U-turn limit.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            u_turn_policy: UTurnPolicy::Fail,
            u_turn_cos: COS_177_5_DEG,
            collinear_policy: CollinearPolicy::Fail,
            collinear_cos: COS_2_5_DEG,
        }
    }

    /// Explicit policies with the looser 175° U-turn limit.
    #[must_use]
    pub fn with_policies(u_turn_policy: UTurnPolicy, collinear_policy: CollinearPolicy) -> Self {
        Self {
            u_turn_policy,
            u_turn_cos: COS_175_DEG,
            collinear_policy,
            collinear_cos: COS_2_5_DEG,
        }
    }

    #[must_use]
    pub fn with_u_turn_policy(mut self, policy: UTurnPolicy) -> Self {
        self.u_turn_policy = policy;
        self
    }

    #[must_use]
    pub fn with_collinear_policy(mut self, policy: CollinearPolicy) -> Self {
        self.collinear_policy = policy;
        self
    }

    /// Sets the U-turn limit in degrees, capped at 179°.
    #[must_use]
    pub fn with_max_u_turn_angle(mut self, degrees: f64) -> Self {
        self.u_turn_cos = cos_of_degrees(degrees).max(COS_179_DEG);
        self
    }

    /// Sets the angle in degrees below which a turn counts as collinear.
    #[must_use]
    pub fn with_collinear_angle(mut self, degrees: f64) -> Self {
        self.collinear_cos = cos_of_degrees(degrees);
        self
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn default_is_strict() {
        let opts = OffsetOptions::default();
        assert_eq!(opts.u_turn_policy, UTurnPolicy::Fail);
        assert_eq!(opts.collinear_policy, CollinearPolicy::Fail);
        assert_abs_diff_eq!(opts.u_turn_cos, COS_177_5_DEG);
    }

    #[test]
    fn explicit_policies_use_looser_limit() {
        let opts = OffsetOptions::with_policies(UTurnPolicy::Chamfer, CollinearPolicy::Project);
        assert_eq!(opts.u_turn_policy, UTurnPolicy::Chamfer);
        assert_eq!(opts.collinear_policy, CollinearPolicy::Project);
        assert_abs_diff_eq!(opts.u_turn_cos, COS_175_DEG);
    }

    #[test]
    fn u_turn_angle_is_capped() {
        let opts = OffsetOptions::default().with_max_u_turn_angle(179.9);
        assert_abs_diff_eq!(opts.u_turn_cos, COS_179_DEG);
        let opts = OffsetOptions::default().with_max_u_turn_angle(170.0);
        assert_abs_diff_eq!(opts.u_turn_cos, cos_of_degrees(170.0));
    }

    #[test]
    fn collinear_angle_converts_to_cosine() {
        let opts = OffsetOptions::default().with_collinear_angle(5.0);
        assert_abs_diff_eq!(opts.collinear_cos, cos_of_degrees(5.0));
    }
}

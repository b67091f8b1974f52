//! Prints offsets of a few sample polylines under every policy.
//!
//! Run with `RUST_LOG=polyoffset=debug` to see how degenerate corners are
//! resolved.

use polyoffset::{
    offset, offset_variable_with_policies, offset_with_policy, CollinearPolicy, Point2,
    PolyoffsetError, UTurnPolicy,
};

fn format_points(points: &[Point2]) -> String {
    points
        .iter()
        .map(|p| format!("({:.3}, {:.3})", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), PolyoffsetError> {
    // Default: WARN for everything, INFO for polyoffset.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polyoffset=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("offset_report=info".parse().unwrap_or_default())
        .add_directive("polyoffset=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let square = [
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 10.0),
        Point2::new(0.0, 10.0),
        Point2::new(0.0, 0.0),
    ];
    tracing::info!("square inset: {}", format_points(&offset(1.0, &square)?));

    let hairpin = [
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(0.0, 0.2),
    ];
    if let Err(err) = offset(0.5, &hairpin) {
        tracing::info!("hairpin with default policy: {err}");
    }
    for policy in [UTurnPolicy::Chamfer, UTurnPolicy::UseThreshold, UTurnPolicy::Skip] {
        let result = offset_with_policy(policy, 0.5, &hairpin)?;
        tracing::info!("hairpin {policy:?}: {}", format_points(&result));
    }

    let ramp = [
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(20.0, 0.0),
        Point2::new(30.0, 0.0),
        Point2::new(30.0, 10.0),
    ];
    let distances = [1.0, 2.0, 3.0, 1.0];
    for policy in [
        CollinearPolicy::Skip,
        CollinearPolicy::Proportional,
        CollinearPolicy::Project,
        CollinearPolicy::StepWithTwoPoints,
    ] {
        let result =
            offset_variable_with_policies(UTurnPolicy::Fail, policy, &distances, &ramp)?;
        tracing::info!("ramp {policy:?}: {}", format_points(&result));
    }

    Ok(())
}

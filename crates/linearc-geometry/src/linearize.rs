//! Tolerance-bounded conversion of arcs to polylines.

use linearc_core::{LinearcError, LinearizationParams, Result, Validate};
use linearc_math::Point2;
use rayon::prelude::*;

use crate::arc::Arc;

/// Convert an arc to a polyline whose deviation from the true arc stays
/// within the configured tolerance.
///
/// The arc is split into equal-angle sub-arcs sized so that each sub-arc's
/// sagitta (the distance from the chord midpoint to the arc) is within the
/// tolerance the active policy returns for the arc's circle. The first and
/// last output points are the arc's stored endpoints, bit-for-bit, so
/// chained arcs linearize without seams. A full circle closes on its first
/// point.
///
/// # Errors
///
/// `DegenerateArc` if the arc's radius is not finite, `ToleranceTooStrict`
/// if more than `params.max_segments` subdivisions would be required, and
/// `InvalidConfiguration` if the bundle itself is invalid. No partial output
/// is produced on error.
pub fn linearize(arc: &Arc, params: &LinearizationParams) -> Result<Vec<Point2>> {
    params.validate()?;

    let radius = arc.radius();
    if !radius.is_finite() {
        return Err(LinearcError::DegenerateArc(format!(
            "arc radius is not finite: {radius}"
        )));
    }

    let segments = segment_count(arc, params)?;

    let mut points = Vec::with_capacity(segments + 1);
    points.push(arc.start_point());
    let step = arc.sweep() / segments as f64;
    for i in 1..segments {
        points.push(arc.point_at_angle(arc.start_angle() + step * i as f64));
    }
    points.push(arc.end_point());
    Ok(points)
}

/// Linearize many arcs under one parameter bundle, in parallel.
///
/// Output order matches input order. All-or-nothing: any failing arc fails
/// the whole batch.
pub fn linearize_batch(arcs: &[Arc], params: &LinearizationParams) -> Result<Vec<Vec<Point2>>> {
    params.validate()?;
    arcs.par_iter().map(|arc| linearize(arc, params)).collect()
}

/// Number of equal-angle segments keeping every sub-arc's sagitta within
/// tolerance.
///
/// For a sub-arc spanning `theta` on a circle of radius `r`, the sagitta is
/// `r * (1 - cos(theta / 2))`; the widest admissible sub-arc is therefore
/// `theta_max = 2 * acos(1 - eps / r)`. The `acos` argument is clamped
/// against floating-point overshoot when `eps` approaches `2 * r`.
fn segment_count(arc: &Arc, params: &LinearizationParams) -> Result<usize> {
    // A degenerate point-circle and the closed ring both have floors: one
    // chord always suffices for the former, a two-point loop is never
    // emitted for the latter.
    let floor = if arc.is_full_circle() { 2 } else { 1 };

    let radius = arc.radius();
    let eps = params.tolerance.max_deviation(radius);

    let required = if radius <= 0.0 || eps <= 0.0 {
        // Point-circle (or its zero relative tolerance): a single chord is
        // the only sensible output.
        floor
    } else {
        let theta_max = 2.0 * (1.0 - eps / radius).clamp(-1.0, 1.0).acos();
        // theta_max underflows to zero when eps is vanishingly small next
        // to the radius; the resulting infinity saturates to usize::MAX and
        // fails the cap check below.
        (arc.angular_span() / theta_max).ceil().max(1.0) as usize
    };
    let required = required.max(floor);

    if required > params.max_segments {
        return Err(LinearcError::ToleranceTooStrict {
            required,
            cap: params.max_segments,
        });
    }
    Ok(required)
}

//! Circles derived during arc processing.

use linearc_core::{LinearcError, Result};
use serde::{Deserialize, Serialize};

use crate::{Point2, COLLINEAR_EPS};

/// A circle in the plane, given by center and non-negative radius.
///
/// A zero radius is a degenerate circle (a point); tolerance policies and
/// the linearizer handle it without dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Circumscribed circle through three points.
    ///
    /// Solves the perpendicular-bisector intersection relative to `p0` for
    /// numerical stability. Fails when the points are collinear within
    /// [`COLLINEAR_EPS`] or the derived radius is not finite.
    pub fn circumscribed(p0: Point2, p1: Point2, p2: Point2) -> Result<Self> {
        let a = p1 - p0;
        let b = p2 - p0;

        let cross = a.perp_dot(b);
        if cross * cross <= COLLINEAR_EPS * COLLINEAR_EPS * a.length_squared() * b.length_squared()
        {
            return Err(LinearcError::DegenerateArc(format!(
                "points {p0}, {p1}, {p2} are collinear"
            )));
        }

        let d = 2.0 * cross;
        let a_sq = a.length_squared();
        let b_sq = b.length_squared();
        let ux = (b.y * a_sq - a.y * b_sq) / d;
        let uy = (a.x * b_sq - b.x * a_sq) / d;

        let offset = Point2::new(ux, uy);
        let radius = offset.length();
        if !radius.is_finite() {
            return Err(LinearcError::DegenerateArc(format!(
                "points {p0}, {p1}, {p2} yield a non-finite radius"
            )));
        }

        Ok(Self {
            center: p0 + offset,
            radius,
        })
    }

    /// Distance from `point` to the circle's boundary.
    pub fn distance_to_boundary(&self, point: Point2) -> f64 {
        ((point - self.center).length() - self.radius).abs()
    }
}

//! Chained circular arcs sharing endpoints.

use linearc_core::{LinearcError, LinearizationParams, Result, Validate};
use linearc_math::Point2;
use serde::{Deserialize, Serialize};

use crate::arc::Arc;
use crate::linearize::linearize;

/// A sequence of circular arcs where each arc starts at the previous arc's
/// end point.
///
/// Encoded as an odd-length control point list of at least three points:
/// each overlapping triple `(p[2i], p[2i+1], p[2i+2])` defines one arc, with
/// the even-indexed points shared between neighbors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcString {
    points: Vec<Point2>,
}

impl ArcString {
    /// Build an arc string from control points.
    ///
    /// Fails with `DegenerateArc` unless the point count is odd and at
    /// least three.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        let string = Self { points };
        string.validate()?;
        Ok(string)
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn num_arcs(&self) -> usize {
        (self.points.len() - 1) / 2
    }

    /// The component arcs, in order.
    ///
    /// Fails with `DegenerateArc` if any control triple is collinear; the
    /// caller decides whether to fall back to straight segments.
    pub fn arcs(&self) -> Result<Vec<Arc>> {
        self.points
            .windows(3)
            .step_by(2)
            .map(|w| Arc::from_three_points(w[0], w[1], w[2]))
            .collect()
    }

    /// Linearize the whole string into one polyline.
    ///
    /// Component polylines are chained without duplicating the shared seam
    /// points; every control endpoint appears in the output exactly once,
    /// bit-for-bit.
    pub fn linearize(&self, params: &LinearizationParams) -> Result<Vec<Point2>> {
        let mut out = Vec::new();
        for (i, arc) in self.arcs()?.into_iter().enumerate() {
            let polyline = linearize(&arc, params)?;
            if i == 0 {
                out.extend(polyline);
            } else {
                // The seam point was already emitted as the previous arc's
                // exact end point.
                out.extend(polyline.into_iter().skip(1));
            }
        }
        Ok(out)
    }
}

impl Validate for ArcString {
    fn validate(&self) -> Result<()> {
        let n = self.points.len();
        if n < 3 || n % 2 == 0 {
            return Err(LinearcError::DegenerateArc(format!(
                "arc string needs an odd number of control points, at least 3, got {n}"
            )));
        }
        Ok(())
    }
}

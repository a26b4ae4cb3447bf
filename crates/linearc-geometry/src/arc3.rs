//! Planar arcs through three points in space.

use linearc_core::{LinearizationParams, Result};
use linearc_math::{PlaneFrame, Point3};
use serde::{Deserialize, Serialize};

use crate::arc::Arc;
use crate::linearize::linearize;

/// A circular arc through three 3D points.
///
/// The arc lies in the plane spanned by its defining points; it is stored as
/// that plane's frame plus the in-plane 2D arc, and linearization lifts the
/// 2D samples back into space. Exact 3D endpoints are preserved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Arc3 {
    frame: PlaneFrame,
    arc: Arc,
    start: Point3,
    end: Point3,
}

impl Arc3 {
    /// Arc through `start`, a point on the arc, and `end`.
    ///
    /// Fails with `DegenerateArc` when the points are collinear.
    pub fn from_three_points(start: Point3, mid: Point3, end: Point3) -> Result<Self> {
        let frame = PlaneFrame::from_three_points(start, mid, end)?;
        let arc = Arc::from_three_points(
            frame.to_plane(start),
            frame.to_plane(mid),
            frame.to_plane(end),
        )?;
        Ok(Self {
            frame,
            arc,
            start,
            end,
        })
    }

    pub fn start_point(&self) -> Point3 {
        self.start
    }

    pub fn end_point(&self) -> Point3 {
        self.end
    }

    pub fn center(&self) -> Point3 {
        self.frame.to_world(self.arc.center())
    }

    pub fn radius(&self) -> f64 {
        self.arc.radius()
    }

    /// Unit normal of the arc's plane.
    pub fn normal(&self) -> Point3 {
        self.frame.normal
    }

    /// The in-plane 2D arc.
    pub fn planar_arc(&self) -> &Arc {
        &self.arc
    }

    /// Linearize the arc into 3D points within the configured tolerance.
    ///
    /// First and last points are the original 3D endpoints, bit-for-bit.
    pub fn linearize(&self, params: &LinearizationParams) -> Result<Vec<Point3>> {
        let flat = linearize(&self.arc, params)?;
        let mut points: Vec<Point3> = flat.iter().map(|&p| self.frame.to_world(p)).collect();
        points[0] = self.start;
        let last = points.len() - 1;
        points[last] = self.end;
        Ok(points)
    }
}

//! Planar frames for arcs defined by three points in space.

use linearc_core::{LinearcError, Result};
use serde::{Deserialize, Serialize};

use crate::{Point2, Point3, Vector3, COLLINEAR_EPS};

/// Orthonormal frame of the plane spanned by three points.
///
/// `u` points from the origin toward the first defining point; `v` completes
/// a right-handed basis with `normal`. Maps points between world space and
/// in-plane 2D coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlaneFrame {
    pub origin: Point3,
    pub u: Vector3,
    pub v: Vector3,
    pub normal: Vector3,
}

impl PlaneFrame {
    /// Frame of the plane through `p0`, `p1`, `p2`, with `p0` as origin.
    ///
    /// Fails when the points are collinear within [`COLLINEAR_EPS`].
    pub fn from_three_points(p0: Point3, p1: Point3, p2: Point3) -> Result<Self> {
        let a = p1 - p0;
        let b = p2 - p0;
        let n = a.cross(b);
        if n.length_squared() <= COLLINEAR_EPS * COLLINEAR_EPS * a.length_squared() * b.length_squared()
        {
            return Err(LinearcError::DegenerateArc(format!(
                "points {p0}, {p1}, {p2} do not span a plane"
            )));
        }

        let normal = n.normalize();
        let u = a.normalize();
        let v = normal.cross(u);
        Ok(Self {
            origin: p0,
            u,
            v,
            normal,
        })
    }

    /// In-plane 2D coordinates of a world point.
    pub fn to_plane(&self, point: Point3) -> Point2 {
        let d = point - self.origin;
        Point2::new(d.dot(self.u), d.dot(self.v))
    }

    /// World position of in-plane 2D coordinates.
    pub fn to_world(&self, point: Point2) -> Point3 {
        self.origin + self.u * point.x + self.v * point.y
    }

    /// Signed distance from a point to the frame's plane.
    pub fn signed_distance(&self, point: Point3) -> f64 {
        (point - self.origin).dot(self.normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_frame_round_trip() {
        let frame = PlaneFrame::from_three_points(
            dvec3(1.0, 2.0, 3.0),
            dvec3(4.0, 2.0, 7.0),
            dvec3(1.0, 5.0, 3.0),
        )
        .unwrap();

        let p = dvec3(2.0, 3.0, 4.0);
        let projected = frame.to_world(frame.to_plane(p));
        // p is generally off-plane; round-trip must land on its projection
        assert!(frame.signed_distance(projected).abs() < 1e-10);

        let on_plane = frame.to_world(Point2::new(1.5, -2.5));
        let back = frame.to_plane(on_plane);
        assert!((back - Point2::new(1.5, -2.5)).length() < 1e-10);
    }

    #[test]
    fn test_frame_basis_orthonormal() {
        let frame = PlaneFrame::from_three_points(
            dvec3(0.0, 0.0, 0.0),
            dvec3(1.0, 1.0, 0.0),
            dvec3(0.0, 1.0, 1.0),
        )
        .unwrap();

        assert!((frame.u.length() - 1.0).abs() < 1e-12);
        assert!((frame.v.length() - 1.0).abs() < 1e-12);
        assert!((frame.normal.length() - 1.0).abs() < 1e-12);
        assert!(frame.u.dot(frame.v).abs() < 1e-12);
        assert!(frame.u.dot(frame.normal).abs() < 1e-12);
        assert!(frame.v.dot(frame.normal).abs() < 1e-12);
    }

    #[test]
    fn test_frame_collinear_fails() {
        let result = PlaneFrame::from_three_points(
            dvec3(0.0, 0.0, 0.0),
            dvec3(1.0, 1.0, 1.0),
            dvec3(2.0, 2.0, 2.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_defining_points_in_plane() {
        let p0 = dvec3(0.0, 0.0, 1.0);
        let p1 = dvec3(2.0, 0.0, 3.0);
        let p2 = dvec3(0.0, 2.0, 1.0);
        let frame = PlaneFrame::from_three_points(p0, p1, p2).unwrap();

        for p in [p0, p1, p2] {
            assert!(frame.signed_distance(p).abs() < 1e-12);
        }
    }
}

//! Circular arc value type.

use std::f64::consts::TAU;

use linearc_core::{LinearcError, Result};
use linearc_math::{Circle, Point2};
use serde::{Deserialize, Serialize};

/// Direction an arc sweeps around its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

/// An immutable circular arc in the plane.
///
/// The arc stores its exact start and end points alongside the derived
/// circle and angles, so linearized output can reproduce the original
/// endpoints bit-for-bit when arcs are chained into longer curves.
///
/// The sweep is signed: positive is counter-clockwise. Its magnitude lies in
/// `(0, 2*PI]`; a full circle sweeps exactly `2*PI` and has coincident start
/// and end points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    start: Point2,
    end: Point2,
    circle: Circle,
    start_angle: f64,
    sweep: f64,
}

/// Counter-clockwise angular distance from `from` to `to`, in `[0, 2*PI)`.
fn ccw_delta(from: f64, to: f64) -> f64 {
    (to - from).rem_euclid(TAU)
}

fn angle_from(center: Point2, point: Point2) -> f64 {
    let d = point - center;
    d.y.atan2(d.x)
}

impl Arc {
    /// Arc through three points: `start`, a point on the arc, and `end`.
    ///
    /// The mid point selects which of the two arcs between the endpoints is
    /// meant and fixes the orientation. Fails with `DegenerateArc` when the
    /// points are collinear.
    pub fn from_three_points(start: Point2, mid: Point2, end: Point2) -> Result<Self> {
        let circle = Circle::circumscribed(start, mid, end)?;
        let start_angle = angle_from(circle.center, start);
        let to_mid = ccw_delta(start_angle, angle_from(circle.center, mid));
        let to_end = ccw_delta(start_angle, angle_from(circle.center, end));

        // The arc must pass through mid on its way to end; when the
        // counter-clockwise route reaches end first, the arc runs clockwise.
        let sweep = if to_mid <= to_end {
            to_end
        } else {
            to_end - TAU
        };

        Ok(Self {
            start,
            end,
            circle,
            start_angle,
            sweep,
        })
    }

    /// Arc from center, radius, and start/end angles (radians).
    ///
    /// Equal angles describe a full circle in the given orientation. Fails
    /// with `DegenerateArc` on a negative or non-finite radius or non-finite
    /// angles.
    pub fn from_center_radius(
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        orientation: Orientation,
    ) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(LinearcError::DegenerateArc(format!(
                "radius must be finite and non-negative, got {radius}"
            )));
        }
        if !start_angle.is_finite() || !end_angle.is_finite() {
            return Err(LinearcError::DegenerateArc(
                "arc angles must be finite".into(),
            ));
        }

        let delta = ccw_delta(start_angle, end_angle);
        let sweep = match orientation {
            Orientation::CounterClockwise => {
                if delta == 0.0 {
                    TAU
                } else {
                    delta
                }
            }
            Orientation::Clockwise => {
                if delta == 0.0 {
                    -TAU
                } else {
                    delta - TAU
                }
            }
        };

        let circle = Circle::new(center, radius);
        let start = center + radius * Point2::new(start_angle.cos(), start_angle.sin());
        let end = if sweep.abs() >= TAU {
            start
        } else {
            center + radius * Point2::new(end_angle.cos(), end_angle.sin())
        };

        Ok(Self {
            start,
            end,
            circle,
            start_angle,
            sweep,
        })
    }

    /// Full counter-clockwise circle, starting and closing at angle zero.
    pub fn circle(center: Point2, radius: f64) -> Result<Self> {
        Self::from_center_radius(center, radius, 0.0, 0.0, Orientation::CounterClockwise)
    }

    /// Arc from endpoints and a bulge factor.
    ///
    /// Bulge is the tangent of a quarter of the sweep angle: 1 is a
    /// semicircle, values above 1 pass the far side of the circle. Positive
    /// bulge sweeps counter-clockwise. A zero bulge is a straight segment
    /// and fails with `DegenerateArc`, as do coincident endpoints.
    pub fn from_bulge(start: Point2, end: Point2, bulge: f64) -> Result<Self> {
        if !bulge.is_finite() || bulge == 0.0 {
            return Err(LinearcError::DegenerateArc(format!(
                "bulge must be finite and non-zero, got {bulge}"
            )));
        }
        let chord = end - start;
        let chord_len = chord.length();
        if chord_len <= 0.0 {
            return Err(LinearcError::DegenerateArc(
                "bulge arc endpoints coincide".into(),
            ));
        }

        let sagitta = bulge.abs() * chord_len / 2.0;
        let radius = (chord_len * chord_len / 4.0 + sagitta * sagitta) / (2.0 * sagitta);

        // Center sits on the chord's perpendicular bisector. The offset is
        // negative when the arc passes the far side of the circle.
        let apothem = radius - sagitta;
        let left = chord.perp() / chord_len;
        let mid = (start + end) * 0.5;
        let center = if bulge > 0.0 {
            mid + left * apothem
        } else {
            mid - left * apothem
        };

        let circle = Circle::new(center, radius);
        let start_angle = angle_from(center, start);
        let sweep = 4.0 * bulge.atan();

        Ok(Self {
            start,
            end,
            circle,
            start_angle,
            sweep,
        })
    }

    /// Exact start point.
    pub fn start_point(&self) -> Point2 {
        self.start
    }

    /// Exact end point. Equals the start point for a full circle.
    pub fn end_point(&self) -> Point2 {
        self.end
    }

    /// Circle the arc lies on.
    pub fn circle_of(&self) -> Circle {
        self.circle
    }

    pub fn center(&self) -> Point2 {
        self.circle.center
    }

    pub fn radius(&self) -> f64 {
        self.circle.radius
    }

    /// Angle of the start point from the center, in radians.
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Angle of the end point from the center, in radians.
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }

    /// Signed sweep in radians; positive is counter-clockwise.
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    pub fn orientation(&self) -> Orientation {
        if self.sweep >= 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }

    /// Magnitude of the sweep, in `(0, 2*PI]`.
    pub fn angular_span(&self) -> f64 {
        self.sweep.abs()
    }

    pub fn is_full_circle(&self) -> bool {
        self.sweep.abs() >= TAU
    }

    /// Length along the arc.
    pub fn arc_length(&self) -> f64 {
        self.radius() * self.angular_span()
    }

    /// Point on the arc's circle at the given angle.
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        self.circle.center + self.circle.radius * Point2::new(angle.cos(), angle.sin())
    }
}

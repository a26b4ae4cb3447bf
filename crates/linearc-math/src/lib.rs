pub mod circle;
pub mod frame;

pub use glam::{DVec2, DVec3};

pub use circle::Circle;
pub use frame::PlaneFrame;

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;

/// Relative threshold (sine of the spanned angle) below which three points
/// are treated as collinear.
pub const COLLINEAR_EPS: f64 = 1e-12;

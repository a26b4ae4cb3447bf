//! Linearc geometry: circular arcs and tolerance-bounded linearization.

pub mod arc;
pub mod arc3;
pub mod arc_string;
pub mod linearize;

pub use arc::{Arc, Orientation};
pub use arc3::Arc3;
pub use arc_string::ArcString;
pub use linearize::{linearize, linearize_batch};

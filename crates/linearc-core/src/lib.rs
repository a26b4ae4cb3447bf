pub mod error;
pub mod params;
pub mod tolerance;
pub mod traits;

pub use error::{LinearcError, Result};
pub use params::LinearizationParams;
pub use tolerance::ToleranceRule;
pub use traits::Validate;

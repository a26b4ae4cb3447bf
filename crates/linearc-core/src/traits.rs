use crate::error::Result;

/// Validate structural integrity of a configuration or geometry value.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

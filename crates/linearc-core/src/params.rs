//! Session-scoped linearization parameters.

use serde::{Deserialize, Serialize};

use crate::error::{LinearcError, Result};
use crate::tolerance::ToleranceRule;
use crate::traits::Validate;

/// Bundle of linearization settings shared by many linearize calls.
///
/// Constructed once per encoding/decoding session and passed by reference
/// into the linearization routines. Configure before use; the bundle is
/// read-only during processing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinearizationParams {
    /// Active tolerance policy.
    pub tolerance: ToleranceRule,
    /// Upper bound on segments per arc. A tolerance that would require more
    /// segments fails with `ToleranceTooStrict` instead of allocating
    /// unbounded output.
    pub max_segments: usize,
}

impl LinearizationParams {
    pub const DEFAULT_MAX_SEGMENTS: usize = 8192;

    pub fn new(tolerance: ToleranceRule) -> Self {
        Self {
            tolerance,
            max_segments: Self::DEFAULT_MAX_SEGMENTS,
        }
    }

    pub fn with_max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments;
        self
    }
}

impl Validate for LinearizationParams {
    fn validate(&self) -> Result<()> {
        self.tolerance.validate()?;
        if self.max_segments == 0 {
            return Err(LinearcError::InvalidConfiguration(
                "max_segments must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for LinearizationParams {
    fn default() -> Self {
        Self::new(ToleranceRule::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = LinearizationParams::default();
        assert_eq!(params.tolerance, ToleranceRule::RadiusRelative(1e-3));
        assert_eq!(params.max_segments, 8192);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_zero_cap_rejected() {
        let params = LinearizationParams::default().with_max_segments(0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_params_round_trip() {
        let params = LinearizationParams::new(ToleranceRule::Absolute(0.25));
        let json = serde_json::to_string(&params).unwrap();
        let back: LinearizationParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let params: LinearizationParams =
            serde_json::from_str(r#"{"tolerance": {"absolute": 0.1}}"#).unwrap();
        assert_eq!(params.tolerance, ToleranceRule::Absolute(0.1));
        assert_eq!(params.max_segments, LinearizationParams::DEFAULT_MAX_SEGMENTS);
    }
}

//! Tolerance policies bounding the deviation of linearized arcs.

use serde::{Deserialize, Serialize};

use crate::error::{LinearcError, Result};
use crate::traits::Validate;

/// Maximum allowed perpendicular deviation between a circular arc and the
/// chords approximating it, for a circle of a given radius.
///
/// `Absolute` is a fixed distance in model units. `RadiusRelative` scales
/// with the circle, so small and large arcs keep the same relative quality.
/// Serializes as `{"absolute": value}` or `{"radiusRelative": ratio}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToleranceRule {
    /// Fixed deviation in model units.
    Absolute(f64),
    /// Deviation as a fraction of the circle radius.
    RadiusRelative(f64),
}

impl ToleranceRule {
    /// Default ratio for radius-relative linearization.
    pub const DEFAULT_RATIO: f64 = 1e-3;

    /// Fixed-distance tolerance. Fails unless `value` is finite and positive.
    pub fn absolute(value: f64) -> Result<Self> {
        let rule = Self::Absolute(value);
        rule.validate()?;
        Ok(rule)
    }

    /// Radius-fraction tolerance. Fails unless `ratio` is finite and positive.
    pub fn radius_relative(ratio: f64) -> Result<Self> {
        let rule = Self::RadiusRelative(ratio);
        rule.validate()?;
        Ok(rule)
    }

    /// Maximum allowed chord-to-arc deviation for a circle of `radius`.
    ///
    /// A zero radius yields a zero deviation under `RadiusRelative`; callers
    /// must treat that as "a single chord is acceptable" rather than divide
    /// by it.
    pub fn max_deviation(self, radius: f64) -> f64 {
        match self {
            Self::Absolute(value) => value,
            Self::RadiusRelative(ratio) => ratio * radius,
        }
    }
}

impl Validate for ToleranceRule {
    fn validate(&self) -> Result<()> {
        let (name, value) = match *self {
            Self::Absolute(value) => ("absolute tolerance", value),
            Self::RadiusRelative(ratio) => ("radius-relative ratio", ratio),
        };
        if !value.is_finite() || value <= 0.0 {
            return Err(LinearcError::InvalidConfiguration(format!(
                "{name} must be finite and positive, got {value}"
            )));
        }
        Ok(())
    }
}

impl Default for ToleranceRule {
    fn default() -> Self {
        Self::RadiusRelative(Self::DEFAULT_RATIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_ignores_radius() {
        let rule = ToleranceRule::absolute(0.5).unwrap();
        assert_eq!(rule.max_deviation(1.0), 0.5);
        assert_eq!(rule.max_deviation(1000.0), 0.5);
    }

    #[test]
    fn test_radius_relative_scales() {
        let rule = ToleranceRule::radius_relative(0.01).unwrap();
        assert_eq!(rule.max_deviation(10.0), 0.1);
        assert_eq!(rule.max_deviation(0.0), 0.0);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(ToleranceRule::absolute(0.0).is_err());
        assert!(ToleranceRule::absolute(-1.0).is_err());
        assert!(ToleranceRule::radius_relative(0.0).is_err());
        assert!(ToleranceRule::radius_relative(f64::NAN).is_err());
        assert!(ToleranceRule::absolute(f64::INFINITY).is_err());
    }

    #[test]
    fn test_default_is_radius_relative() {
        let rule = ToleranceRule::default();
        assert_eq!(rule, ToleranceRule::RadiusRelative(1e-3));
    }

    #[test]
    fn test_config_surface() {
        let rule: ToleranceRule = serde_json::from_str(r#"{"absolute": 0.5}"#).unwrap();
        assert_eq!(rule, ToleranceRule::Absolute(0.5));

        let rule: ToleranceRule =
            serde_json::from_str(r#"{"radiusRelative": 0.001}"#).unwrap();
        assert_eq!(rule, ToleranceRule::RadiusRelative(0.001));

        let json = serde_json::to_string(&ToleranceRule::Absolute(2.0)).unwrap();
        assert_eq!(json, r#"{"absolute":2.0}"#);
    }
}

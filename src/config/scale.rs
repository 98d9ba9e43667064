//! Ordinal judgment scale configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::OrdinalScale;

/// Saaty values the two non-neutral preference steps map to
#[derive(Debug, Clone, Deserialize)]
pub struct ScaleConfig {
    /// Value for "better" / "worse"
    #[serde(default = "default_moderate")]
    pub moderate: i32,

    /// Value for "much better" / "much worse"
    #[serde(default = "default_strong")]
    pub strong: i32,
}

impl ScaleConfig {
    /// Build the scale drivers pass to `judge_preference`
    pub fn to_scale(&self) -> Result<OrdinalScale, ValidationError> {
        Ok(OrdinalScale::new(self.moderate, self.strong)?)
    }

    /// Validate scale configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_scale().map(|_| ())
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            moderate: default_moderate(),
            strong: default_strong(),
        }
    }
}

fn default_moderate() -> i32 {
    3
}

fn default_strong() -> i32 {
    9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_config_defaults_match_ordinal_scale() {
        let scale = ScaleConfig::default().to_scale().unwrap();
        assert_eq!(scale, OrdinalScale::default());
    }

    #[test]
    fn test_out_of_range_step_is_rejected() {
        let config = ScaleConfig {
            moderate: 0,
            strong: 9,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidScale(_))
        ));
    }

    #[test]
    fn test_inverted_steps_are_rejected() {
        let config = ScaleConfig {
            moderate: 7,
            strong: 5,
        };
        assert!(config.validate().is_err());
    }
}

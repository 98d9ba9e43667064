//! Engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::DerivationMethod;

/// Computation settings applied when a report is produced
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Method used to derive weights from every matrix
    #[serde(default)]
    pub derivation_method: DerivationMethod,

    /// Koczkodaj index above which a criterion is flagged
    #[serde(default = "default_inconsistency_threshold")]
    pub inconsistency_threshold: f64,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.inconsistency_threshold.is_finite() || self.inconsistency_threshold <= 0.0 {
            return Err(ValidationError::InvalidThreshold(self.inconsistency_threshold));
        }
        if self.derivation_method.strategy().is_none() {
            return Err(ValidationError::UnusableMethod(
                self.derivation_method.to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            derivation_method: DerivationMethod::default(),
            inconsistency_threshold: default_inconsistency_threshold(),
        }
    }
}

fn default_inconsistency_threshold() -> f64 {
    1.0 / 3.0
}

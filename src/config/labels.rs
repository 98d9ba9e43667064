//! Label file configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::FileLabelSource;

/// Where the label listings live
#[derive(Debug, Clone, Deserialize)]
pub struct LabelsConfig {
    /// One alternative per line
    #[serde(default = "default_alternatives_path")]
    pub alternatives_path: PathBuf,

    /// One criterion per line, indented lines are sub-criteria
    #[serde(default = "default_criteria_path")]
    pub criteria_path: PathBuf,
}

impl LabelsConfig {
    /// File source over the configured paths
    pub fn source(&self) -> FileLabelSource {
        FileLabelSource::new(&self.alternatives_path, &self.criteria_path)
    }

    /// Validate label configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.alternatives_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("labels.alternatives_path"));
        }
        if self.criteria_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("labels.criteria_path"));
        }
        Ok(())
    }
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            alternatives_path: default_alternatives_path(),
            criteria_path: default_criteria_path(),
        }
    }
}

fn default_alternatives_path() -> PathBuf {
    PathBuf::from("data/alternatives.txt")
}

fn default_criteria_path() -> PathBuf {
    PathBuf::from("data/criteria.txt")
}

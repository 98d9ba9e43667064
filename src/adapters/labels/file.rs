//! File-based Label Source Adapter
//!
//! Reads the alternatives and criteria listings from two text files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::parse_hierarchy;
use crate::domain::ahp::DecisionHierarchy;
use crate::ports::{LabelSource, LabelSourceError};

/// Label source backed by two plain-text files
#[derive(Debug, Clone)]
pub struct FileLabelSource {
    alternatives_path: PathBuf,
    criteria_path: PathBuf,
}

impl FileLabelSource {
    /// Create a source over the two listings
    ///
    /// # Example
    /// ```ignore
    /// let source = FileLabelSource::new("data/alternatives.txt", "data/criteria.txt");
    /// ```
    pub fn new<A: AsRef<Path>, C: AsRef<Path>>(alternatives_path: A, criteria_path: C) -> Self {
        Self {
            alternatives_path: alternatives_path.as_ref().to_path_buf(),
            criteria_path: criteria_path.as_ref().to_path_buf(),
        }
    }

    pub fn alternatives_path(&self) -> &Path {
        &self.alternatives_path
    }

    pub fn criteria_path(&self) -> &Path {
        &self.criteria_path
    }

    fn read(path: &Path) -> Result<String, LabelSourceError> {
        fs::read_to_string(path).map_err(|source| LabelSourceError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl LabelSource for FileLabelSource {
    fn load(&self) -> Result<DecisionHierarchy, LabelSourceError> {
        let alternatives = Self::read(&self.alternatives_path)?;
        let criteria = Self::read(&self.criteria_path)?;
        let hierarchy = parse_hierarchy(&alternatives, &criteria)?;

        debug!(
            alternatives = hierarchy.alternatives().len(),
            criteria = hierarchy.criteria().len(),
            comparable = hierarchy.comparable_count(),
            "Loaded labels from files"
        );
        Ok(hierarchy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_listings(dir: &TempDir, alternatives: &str, criteria: &str) -> FileLabelSource {
        let alternatives_path = dir.path().join("alternatives.txt");
        let criteria_path = dir.path().join("criteria.txt");
        fs::write(&alternatives_path, alternatives).unwrap();
        fs::write(&criteria_path, criteria).unwrap();
        FileLabelSource::new(alternatives_path, criteria_path)
    }

    #[test]
    fn test_file_source_loads_hierarchy() {
        let temp_dir = TempDir::new().unwrap();
        let source = write_listings(&temp_dir, "Tom\nDick\nHarry\n", "Experience\nAge\n  Health\n  Energy\n");

        let hierarchy = source.load().unwrap();
        assert_eq!(hierarchy.alternatives(), &["Tom", "Dick", "Harry"]);
        assert_eq!(hierarchy.comparable_criteria(), vec!["Experience", "Health", "Energy"]);
    }

    #[test]
    fn test_file_source_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileLabelSource::new(
            temp_dir.path().join("missing.txt"),
            temp_dir.path().join("criteria.txt"),
        );

        match source.load().unwrap_err() {
            LabelSourceError::Io { path, .. } => assert!(path.ends_with("missing.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }
}

//! Label Source Port - Interface for loading the labels a session compares.
//!
//! The engine itself never reads files. A driver asks a `LabelSource` for a
//! validated `DecisionHierarchy` and starts a session over it.

use std::path::PathBuf;

use crate::domain::ahp::DecisionHierarchy;
use crate::domain::foundation::AhpError;

/// Errors that can occur while loading labels
#[derive(Debug, thiserror::Error)]
pub enum LabelSourceError {
    #[error("Failed to read labels from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Sub-criterion on line {line} has no criterion above it")]
    OrphanSubCriterion { line: usize },

    #[error(transparent)]
    Hierarchy(#[from] AhpError),
}

/// Port for loading alternatives and criteria
pub trait LabelSource {
    /// Load and validate the full hierarchy.
    ///
    /// # Errors
    /// `Io` when the backing store cannot be read, `OrphanSubCriterion` for a
    /// malformed criteria listing, `Hierarchy` when the labels do not form a
    /// valid hierarchy (duplicates, empty sets).
    fn load(&self) -> Result<DecisionHierarchy, LabelSourceError>;
}

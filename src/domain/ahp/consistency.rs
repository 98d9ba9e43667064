//! Consistency diagnostic - Koczkodaj triad inconsistency index.

use serde::{Deserialize, Serialize};

use super::{ComparisonMatrix, CompleteModel};
use crate::domain::foundation::AhpError;

/// Smallest matrix the triad index is defined on.
pub const MIN_CONSISTENCY_SIZE: usize = 3;

/// Consistency of the alternatives comparison under one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyEntry {
    pub criterion: String,
    /// None when the matrix has fewer than three labels.
    pub index: Option<f64>,
    pub within_threshold: bool,
}

/// Consistency analysis functions.
pub struct ConsistencyAnalyzer;

impl ConsistencyAnalyzer {
    /// Computes the Koczkodaj index: the worst triad error of the matrix.
    ///
    /// # Algorithm
    /// For every index triple `i < j < k`:
    /// - `e1 = |1 - c(i,k) * c(k,j) / c(i,j)|`
    /// - `e2 = |1 - c(i,j) * c(i,k) / c(k,j)|`
    /// - triad error = `min(e1, e2)`
    ///
    /// The index is the maximum triad error. 0 means fully consistent.
    ///
    /// # Errors
    /// `UndersizedMatrix` for fewer than three labels.
    pub fn koczkodaj_index(matrix: &ComparisonMatrix) -> Result<f64, AhpError> {
        let n = matrix.size();
        if n < MIN_CONSISTENCY_SIZE {
            return Err(AhpError::UndersizedMatrix { size: n });
        }

        let mut worst: f64 = 0.0;
        for i in 0..n {
            for j in i + 1..n {
                for k in j + 1..n {
                    worst = worst.max(Self::triad_error(matrix, i, j, k));
                }
            }
        }
        Ok(worst)
    }

    fn triad_error(matrix: &ComparisonMatrix, i: usize, j: usize, k: usize) -> f64 {
        let c = |a: usize, b: usize| matrix.entry(a, b);
        let e1 = (1.0 - c(i, k) * c(k, j) / c(i, j)).abs();
        let e2 = (1.0 - c(i, j) * c(i, k) / c(k, j)).abs();
        e1.min(e2)
    }

    /// Index of every comparable criterion checked against `threshold`.
    ///
    /// The threshold only labels entries; nothing is rejected.
    pub fn report(model: &CompleteModel, threshold: f64) -> Vec<ConsistencyEntry> {
        model
            .hierarchy()
            .comparable_criteria()
            .into_iter()
            .map(|criterion| {
                let index = model.consistency(criterion).ok();
                ConsistencyEntry {
                    criterion: criterion.to_string(),
                    index,
                    within_threshold: index.map_or(true, |value| value <= threshold),
                }
            })
            .collect()
    }
}

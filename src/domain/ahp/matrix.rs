//! Pairwise comparison matrices.
//!
//! `PairwiseMatrix` accumulates judgments for one fixed label set.
//! `ComparisonMatrix` is the finished, immutable form that priority
//! derivation and the consistency diagnostic operate on.

use std::collections::HashSet;

use crate::domain::foundation::{AhpError, Judgment, MAX_JUDGMENT};

/// Marker for an off-diagonal entry nobody has judged yet.
const UNSET: f64 = -1.0;

/// Allowed drift when checking `m[a][b] * m[b][a] == 1` on supplied rows.
const RECIPROCITY_TOLERANCE: f64 = 1e-9;

fn validate_labels(labels: &[String]) -> Result<(), AhpError> {
    if labels.is_empty() {
        return Err(AhpError::structural("a comparison needs at least one label"));
    }
    let mut seen = HashSet::with_capacity(labels.len());
    for label in labels {
        if label.trim().is_empty() {
            return Err(AhpError::structural("labels cannot be blank"));
        }
        if !seen.insert(label.as_str()) {
            return Err(AhpError::structural(format!("duplicate label '{}'", label)));
        }
    }
    Ok(())
}

/// Reciprocal matrix under construction.
///
/// The diagonal is seeded with 1 and every off-diagonal entry starts unset.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseMatrix {
    labels: Vec<String>,
    entries: Vec<f64>,
}

impl PairwiseMatrix {
    /// Creates an empty matrix over a non-empty, duplicate-free label set.
    pub fn new(labels: Vec<String>) -> Result<Self, AhpError> {
        validate_labels(&labels)?;
        Ok(Self::seeded(labels))
    }

    /// Seeds a matrix over labels the caller has already validated.
    pub(super) fn seeded(labels: Vec<String>) -> Self {
        let n = labels.len();
        let mut entries = vec![UNSET; n * n];
        for i in 0..n {
            entries[i * n + i] = 1.0;
        }
        Self { labels, entries }
    }

    /// Ordered labels of this matrix.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Position of a label in the ordering, if present.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Returns the entry for `(row, col)`, or `None` when unknown or unset.
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.index_of(row)?;
        let j = self.index_of(col)?;
        let value = self.entries[i * self.size() + j];
        (value != UNSET).then_some(value)
    }

    /// Records that `first` is preferred over `second` by `judgment`.
    ///
    /// Overwrites any earlier judgment on the same pair in both directions.
    pub fn set(&mut self, first: &str, second: &str, judgment: Judgment) -> Result<(), AhpError> {
        if first == second {
            return Err(AhpError::SelfComparison {
                label: first.to_string(),
            });
        }
        let i = self.index_of(first).ok_or_else(|| AhpError::UnknownLabel {
            label: first.to_string(),
        })?;
        let j = self.index_of(second).ok_or_else(|| AhpError::UnknownLabel {
            label: second.to_string(),
        })?;

        let n = self.size();
        self.entries[i * n + j] = judgment.ratio();
        self.entries[j * n + i] = judgment.reciprocal();
        Ok(())
    }

    /// Number of unordered pairs still waiting for a judgment.
    pub fn unset_pair_count(&self) -> usize {
        let n = self.size();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.entries[i * n + j] == UNSET)
            .count()
    }

    /// First unset pair in row-major order.
    pub fn next_unset_pair(&self) -> Option<(&str, &str)> {
        let n = self.size();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .find(|&(i, j)| self.entries[i * n + j] == UNSET)
            .map(|(i, j)| (self.labels[i].as_str(), self.labels[j].as_str()))
    }

    /// True once every entry, diagonal included, holds a value.
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|&v| v != UNSET)
    }

    /// Freezes a complete matrix, handing the matrix back if pairs are missing.
    pub fn into_complete(self) -> Result<ComparisonMatrix, PairwiseMatrix> {
        if self.is_complete() {
            Ok(ComparisonMatrix {
                labels: self.labels,
                entries: self.entries,
            })
        } else {
            Err(self)
        }
    }
}

/// Finished reciprocal matrix over a fixed label set.
///
/// Every entry lies in `[1/9, 9]`, the diagonal is 1 and
/// `m[a][b] == 1 / m[b][a]` holds for every pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrix {
    labels: Vec<String>,
    entries: Vec<f64>,
}

impl ComparisonMatrix {
    /// Builds a matrix from explicit rows, validating every invariant.
    pub fn from_rows(labels: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, AhpError> {
        validate_labels(&labels)?;
        let n = labels.len();
        if rows.len() != n || rows.iter().any(|row| row.len() != n) {
            return Err(AhpError::malformed(format!("expected a {}x{} matrix", n, n)));
        }

        let max = f64::from(MAX_JUDGMENT);
        let min = 1.0 / max;
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value < min - RECIPROCITY_TOLERANCE || value > max + RECIPROCITY_TOLERANCE {
                    return Err(AhpError::malformed(format!(
                        "entry ({}, {}) = {} is outside [1/9, 9]",
                        labels[i], labels[j], value
                    )));
                }
                if i == j && (value - 1.0).abs() > RECIPROCITY_TOLERANCE {
                    return Err(AhpError::malformed(format!(
                        "diagonal entry for '{}' must be 1",
                        labels[i]
                    )));
                }
                if (value * rows[j][i] - 1.0).abs() > RECIPROCITY_TOLERANCE {
                    return Err(AhpError::malformed(format!(
                        "entries ({0}, {1}) and ({1}, {0}) are not reciprocal",
                        labels[i], labels[j]
                    )));
                }
            }
        }

        Ok(Self {
            labels,
            entries: rows.into_iter().flatten().collect(),
        })
    }

    /// Ordered labels of this matrix.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Entry by index pair.
    ///
    /// # Panics
    /// Panics when either index is out of bounds.
    pub fn entry(&self, row: usize, col: usize) -> f64 {
        self.entries[row * self.size() + col]
    }

    /// Entry by label pair.
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == row)?;
        let j = self.labels.iter().position(|l| l == col)?;
        Some(self.entry(i, j))
    }

    /// One row of the matrix.
    pub fn row(&self, index: usize) -> &[f64] {
        let n = self.size();
        &self.entries[index * n..(index + 1) * n]
    }
}

//! Priority derivation - turns one comparison matrix into normalized weights.
//!
//! Each method is a pure function with the same signature, selected through
//! [`DerivationMethod`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ComparisonMatrix;
use crate::domain::foundation::AhpError;

/// Power iteration stops once successive vectors differ by at most this (L1).
const EIGENVECTOR_TOLERANCE: f64 = 1e-12;

/// Power iteration cap.
const EIGENVECTOR_MAX_ITERATIONS: usize = 1_000;

/// Ordered label -> weight mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Priorities {
    entries: Vec<(String, f64)>,
}

impl Priorities {
    /// Pairs labels with weights, keeping the label order.
    pub fn new(labels: &[String], weights: Vec<f64>) -> Self {
        Self {
            entries: labels.iter().cloned().zip(weights).collect(),
        }
    }

    /// Weight of a label.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, w)| *w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, w)| (l.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    /// Labels by descending weight; ties keep their original order.
    pub fn ranking(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Highest weighted label. Returns None if empty or on a tie for first.
    pub fn top(&self) -> Option<&str> {
        let ranked = self.ranking();
        match ranked.as_slice() {
            [] => None,
            [(label, _)] => Some(*label),
            [(label, first), (_, second), ..] if first > second => Some(*label),
            _ => None,
        }
    }
}

/// Strategy used to derive weights from a matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivationMethod {
    /// Normalized geometric mean of each row.
    #[default]
    GeometricMean,
    /// Principal right eigenvector, normalized to sum 1.
    Eigenvector,
    /// Columns normalized by their sums, then averaged per row.
    SimpleColumn,
    /// Named by the method family but without a defined formula.
    SimpleScaledColumn,
}

impl DerivationMethod {
    pub const ALL: [DerivationMethod; 4] = [
        DerivationMethod::GeometricMean,
        DerivationMethod::Eigenvector,
        DerivationMethod::SimpleColumn,
        DerivationMethod::SimpleScaledColumn,
    ];

    /// Stable snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            DerivationMethod::GeometricMean => "geometric_mean",
            DerivationMethod::Eigenvector => "eigenvector",
            DerivationMethod::SimpleColumn => "simple_column",
            DerivationMethod::SimpleScaledColumn => "simple_scaled_column",
        }
    }

    /// The derivation function, if this method has one.
    pub fn strategy(&self) -> Option<fn(&ComparisonMatrix) -> Priorities> {
        match self {
            DerivationMethod::GeometricMean => Some(geometric_mean),
            DerivationMethod::Eigenvector => Some(eigenvector),
            DerivationMethod::SimpleColumn => Some(simple_column),
            DerivationMethod::SimpleScaledColumn => None,
        }
    }

    /// Derives weights for every label of `matrix`.
    ///
    /// # Errors
    ///
    /// `MethodNotSpecified` for a method without a defined formula.
    pub fn derive(&self, matrix: &ComparisonMatrix) -> Result<Priorities, AhpError> {
        let strategy = self.strategy().ok_or_else(|| AhpError::MethodNotSpecified {
            method: self.name().to_string(),
        })?;
        Ok(strategy(matrix))
    }
}

impl fmt::Display for DerivationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DerivationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "geometric_mean" | "gmm" => Ok(DerivationMethod::GeometricMean),
            "eigenvector" | "evm" => Ok(DerivationMethod::Eigenvector),
            "simple_column" => Ok(DerivationMethod::SimpleColumn),
            "simple_scaled_column" => Ok(DerivationMethod::SimpleScaledColumn),
            _ => Err(format!("unknown derivation method '{}'", s)),
        }
    }
}

fn normalize(mut values: Vec<f64>) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    for value in &mut values {
        *value /= total;
    }
    values
}

/// Geometric mean method.
///
/// # Algorithm
/// For each row: `gm = (Π row)^(1/n)`; weight = `gm / Σ gm`.
pub fn geometric_mean(matrix: &ComparisonMatrix) -> Priorities {
    let n = matrix.size();
    let exponent = 1.0 / n as f64;
    let row_means = (0..n)
        .map(|i| matrix.row(i).iter().product::<f64>().powf(exponent))
        .collect();
    Priorities::new(matrix.labels(), normalize(row_means))
}

/// Simple column method.
///
/// # Algorithm
/// Divide each column by its sum, then average each row across columns.
pub fn simple_column(matrix: &ComparisonMatrix) -> Priorities {
    let n = matrix.size();
    let column_sums: Vec<f64> = (0..n)
        .map(|j| (0..n).map(|i| matrix.entry(i, j)).sum::<f64>())
        .collect();
    let weights = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| matrix.entry(i, j) / column_sums[j])
                .sum::<f64>()
                / n as f64
        })
        .collect();
    Priorities::new(matrix.labels(), weights)
}

/// Eigenvector method.
///
/// Saaty's principal right eigenvector: the weights are the dominant
/// eigenvector of the matrix, normalized to sum 1. The stopping tolerance and
/// iteration cap are local choices, not part of the method.
///
/// # Algorithm
/// Power iteration from the uniform vector, renormalized to sum 1 each step.
/// A positive reciprocal matrix has a unique positive principal eigenvector,
/// so the iteration converges.
pub fn eigenvector(matrix: &ComparisonMatrix) -> Priorities {
    let n = matrix.size();
    let mut v = vec![1.0 / n as f64; n];

    for _ in 0..EIGENVECTOR_MAX_ITERATIONS {
        let next = normalize(
            (0..n)
                .map(|i| matrix.row(i).iter().zip(&v).map(|(a, x)| a * x).sum::<f64>())
                .collect(),
        );
        let l1_delta: f64 = next.iter().zip(&v).map(|(a, b)| (a - b).abs()).sum();
        v = next;
        if l1_delta <= EIGENVECTOR_TOLERANCE {
            break;
        }
    }

    Priorities::new(matrix.labels(), v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    /// p = 2q, q = 3r: perfectly consistent.
    fn consistent() -> ComparisonMatrix {
        ComparisonMatrix::from_rows(
            labels(&["p", "q", "r"]),
            vec![
                vec![1.0, 2.0, 6.0],
                vec![0.5, 1.0, 3.0],
                vec![1.0 / 6.0, 1.0 / 3.0, 1.0],
            ],
        )
        .unwrap()
    }

    fn inconsistent() -> ComparisonMatrix {
        ComparisonMatrix::from_rows(
            labels(&["p", "q", "r"]),
            vec![
                vec![1.0, 2.0, 2.0],
                vec![0.5, 1.0, 3.0],
                vec![0.5, 1.0 / 3.0, 1.0],
            ],
        )
        .unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn every_defined_method_recovers_consistent_ratios() {
        for method in [
            DerivationMethod::GeometricMean,
            DerivationMethod::Eigenvector,
            DerivationMethod::SimpleColumn,
        ] {
            let weights = method.derive(&consistent()).unwrap();
            assert_close(weights.get("p").unwrap(), 0.6);
            assert_close(weights.get("q").unwrap(), 0.3);
            assert_close(weights.get("r").unwrap(), 0.1);
        }
    }

    #[test]
    fn weights_sum_to_one_on_inconsistent_matrix() {
        for method in [
            DerivationMethod::GeometricMean,
            DerivationMethod::Eigenvector,
            DerivationMethod::SimpleColumn,
        ] {
            assert_close(method.derive(&inconsistent()).unwrap().sum(), 1.0);
        }
    }

    #[test]
    fn geometric_mean_of_two_labels() {
        let matrix = ComparisonMatrix::from_rows(
            labels(&["A", "B"]),
            vec![vec![1.0, 9.0], vec![1.0 / 9.0, 1.0]],
        )
        .unwrap();
        let weights = geometric_mean(&matrix);

        assert_close(weights.get("A").unwrap(), 0.9);
        assert_close(weights.get("B").unwrap(), 0.1);
    }

    #[test]
    fn single_label_gets_full_weight() {
        let matrix = ComparisonMatrix::from_rows(labels(&["Only"]), vec![vec![1.0]]).unwrap();
        assert_eq!(geometric_mean(&matrix).get("Only"), Some(1.0));
    }

    #[test]
    fn scaled_column_has_no_formula() {
        let result = DerivationMethod::SimpleScaledColumn.derive(&consistent());
        assert_eq!(
            result,
            Err(AhpError::MethodNotSpecified {
                method: "simple_scaled_column".into()
            })
        );
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let priorities = Priorities::new(&labels(&["a", "b", "c"]), vec![0.25, 0.5, 0.25]);
        let ranked: Vec<&str> = priorities.ranking().into_iter().map(|(l, _)| l).collect();

        assert_eq!(ranked, vec!["b", "a", "c"]);
        assert_eq!(priorities.top(), Some("b"));
    }

    #[test]
    fn top_is_none_on_tie() {
        let priorities = Priorities::new(&labels(&["a", "b"]), vec![0.5, 0.5]);
        assert_eq!(priorities.top(), None);
        assert_eq!(Priorities::default().top(), None);
    }

    #[test]
    fn method_parses_from_config_strings() {
        assert_eq!("gmm".parse::<DerivationMethod>(), Ok(DerivationMethod::GeometricMean));
        assert_eq!("Eigenvector".parse::<DerivationMethod>(), Ok(DerivationMethod::Eigenvector));
        assert_eq!("simple-column".parse::<DerivationMethod>(), Ok(DerivationMethod::SimpleColumn));
        assert!("median".parse::<DerivationMethod>().is_err());
    }

    #[test]
    fn method_names_round_trip() {
        for method in DerivationMethod::ALL {
            assert_eq!(method.name().parse::<DerivationMethod>(), Ok(method));
            assert_eq!(
                serde_json::to_string(&method).unwrap(),
                format!("\"{}\"", method.name())
            );
        }
    }
}

//! Result summary for a finished comparison session.

use serde::{Deserialize, Serialize};

use super::{CompleteModel, ConsistencyEntry, DerivationMethod};
use crate::domain::foundation::{AhpError, SessionId, Timestamp};

/// One alternative with its final score and rank (1 = best).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub rank: usize,
    pub alternative: String,
    pub score: f64,
}

/// Global weight of one comparable criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub criterion: String,
    /// Set for sub-criteria.
    pub parent: Option<String>,
    pub weight: f64,
}

/// Everything a driver shows once all judgments are in.
///
/// Contains computed results only, not the raw matrices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AhpReport {
    /// The session the judgments were collected in.
    pub session_id: SessionId,
    /// Method used for every matrix.
    pub method: DerivationMethod,
    /// Alternatives by descending score.
    pub ranking: Vec<RankedAlternative>,
    /// Effective weight of each leaf criterion and sub-criterion.
    pub criterion_weights: Vec<CriterionWeight>,
    /// Koczkodaj index per comparable criterion.
    pub consistency: Vec<ConsistencyEntry>,
    /// Threshold the consistency entries were checked against.
    pub inconsistency_threshold: f64,
    /// When the report was computed.
    pub computed_at: Timestamp,
}

impl AhpReport {
    /// Computes a report for a complete model.
    pub fn compute(
        session_id: SessionId,
        model: &CompleteModel,
        method: DerivationMethod,
        inconsistency_threshold: f64,
    ) -> Result<Self, AhpError> {
        let scores = model.aggregate_with(method)?;
        let ranking = scores
            .ranking()
            .into_iter()
            .enumerate()
            .map(|(i, (alternative, score))| RankedAlternative {
                rank: i + 1,
                alternative: alternative.to_string(),
                score,
            })
            .collect();

        let hierarchy = model.hierarchy();
        let criterion_weights = model
            .effective_weights(method)?
            .iter()
            .map(|(criterion, weight)| CriterionWeight {
                criterion: criterion.to_string(),
                parent: hierarchy.parent_of(criterion).map(str::to_string),
                weight,
            })
            .collect();

        Ok(Self {
            session_id,
            method,
            ranking,
            criterion_weights,
            consistency: model.consistency_report(inconsistency_threshold),
            inconsistency_threshold,
            computed_at: Timestamp::now(),
        })
    }

    /// Best alternative, if it is strictly ahead of the runner-up.
    pub fn winner(&self) -> Option<&str> {
        match self.ranking.as_slice() {
            [] => None,
            [only] => Some(only.alternative.as_str()),
            [first, second, ..] if first.score > second.score => Some(first.alternative.as_str()),
            _ => None,
        }
    }

    /// Criteria whose judgments exceed the inconsistency threshold.
    pub fn inconsistent_criteria(&self) -> Vec<&str> {
        self.consistency
            .iter()
            .filter(|entry| !entry.within_threshold)
            .map(|entry| entry.criterion.as_str())
            .collect()
    }
}

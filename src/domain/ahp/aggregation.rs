//! Aggregation - combines local weights across the hierarchy into final scores.

use super::{CompleteModel, DerivationMethod, Priorities};
use crate::domain::foundation::AhpError;

/// Hierarchical weight composition.
pub struct PriorityAggregator;

impl PriorityAggregator {
    /// Global weight of every comparable criterion.
    ///
    /// # Algorithm
    /// - Leaf criterion: its weight in the criteria matrix.
    /// - Sub-criterion: parent's weight in the criteria matrix times its
    ///   weight in the parent's sub-criteria matrix.
    ///
    /// Weights come out in comparable-criteria order and sum to 1.
    pub fn effective_weights(
        model: &CompleteModel,
        method: DerivationMethod,
    ) -> Result<Priorities, AhpError> {
        let hierarchy = model.hierarchy();
        let criteria_weights = method.derive(model.criteria_matrix())?;

        let mut labels = Vec::with_capacity(hierarchy.comparable_count());
        let mut weights = Vec::with_capacity(hierarchy.comparable_count());

        for criterion in hierarchy.criteria() {
            let criterion_weight = criteria_weights.get(criterion).unwrap_or(0.0);

            match hierarchy.sub_criteria_of(criterion) {
                Some(subs) => {
                    let sub_weights = method.derive(model.sub_criteria_matrix(criterion)?)?;
                    for sub in subs {
                        labels.push(sub.clone());
                        weights.push(criterion_weight * sub_weights.get(sub).unwrap_or(0.0));
                    }
                }
                None => {
                    labels.push(criterion.clone());
                    weights.push(criterion_weight);
                }
            }
        }

        Ok(Priorities::new(&labels, weights))
    }

    /// Final score of every alternative.
    ///
    /// # Algorithm
    /// For each alternative: score = Σ over comparable criteria of
    /// (alternative's weight under the criterion) × (criterion's effective weight).
    pub fn aggregate(model: &CompleteModel, method: DerivationMethod) -> Result<Priorities, AhpError> {
        let alternatives = model.hierarchy().alternatives();
        let mut scores = vec![0.0; alternatives.len()];

        for (criterion, weight) in Self::effective_weights(model, method)?.iter() {
            let local = method.derive(model.alternatives_matrix(criterion)?)?;
            for (score, alternative) in scores.iter_mut().zip(alternatives) {
                *score += local.get(alternative).unwrap_or(0.0) * weight;
            }
        }

        Ok(Priorities::new(alternatives, scores))
    }
}

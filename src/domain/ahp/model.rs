//! Hierarchy model and complete model.
//!
//! `HierarchyModel` collects finished matrices and hands out builders for the
//! ones still missing. Once every required matrix is present it turns into a
//! `CompleteModel`, the read-only value that priorities, consistency and
//! aggregation are computed on.

use std::collections::HashMap;

use tracing::debug;

use super::{
    BuildStep, ComparisonBuilder, ComparisonMatrix, ConsistencyAnalyzer, ConsistencyEntry,
    DecisionHierarchy, DerivationMethod, MatrixTarget, PairwiseMatrix, Priorities,
    PriorityAggregator,
};
use crate::domain::foundation::{AhpError, Rejection};

/// A hierarchy whose comparison matrices are being filled in.
#[derive(Debug, Clone)]
pub struct HierarchyModel {
    hierarchy: DecisionHierarchy,
    alternatives_matrices: HashMap<String, ComparisonMatrix>,
    criteria_matrix: Option<ComparisonMatrix>,
    sub_criteria_matrices: HashMap<String, ComparisonMatrix>,
}

impl HierarchyModel {
    /// Creates a model with no matrices filled.
    pub fn new(hierarchy: DecisionHierarchy) -> Self {
        Self {
            hierarchy,
            alternatives_matrices: HashMap::new(),
            criteria_matrix: None,
            sub_criteria_matrices: HashMap::new(),
        }
    }

    pub fn hierarchy(&self) -> &DecisionHierarchy {
        &self.hierarchy
    }

    /// Number of matrices already folded in.
    pub fn completed_count(&self) -> usize {
        self.alternatives_matrices.len()
            + usize::from(self.criteria_matrix.is_some())
            + self.sub_criteria_matrices.len()
    }

    /// Number of matrices a complete model holds.
    pub fn required_count(&self) -> usize {
        self.hierarchy.comparable_count() + 1 + self.hierarchy.parent_count()
    }

    /// Builder for the alternatives matrix under a leaf criterion or sub-criterion.
    ///
    /// # Errors
    ///
    /// `InvalidCriterion` when `criterion` has sub-criteria or is not part of
    /// the hierarchy.
    pub fn alternatives_builder(self, criterion: &str) -> Result<ComparisonBuilder, Rejection<Self>> {
        self.builder_for(MatrixTarget::alternatives(criterion))
    }

    /// Builder for the top-level criteria matrix.
    pub fn criteria_builder(self) -> ComparisonBuilder {
        let labels = self.hierarchy.criteria().to_vec();
        self.open(MatrixTarget::Criteria, labels)
    }

    /// Builder for the sub-criteria matrix of `parent`.
    ///
    /// # Errors
    ///
    /// `InvalidCriterion` when `parent` declared no sub-criteria.
    pub fn sub_criteria_builder(self, parent: &str) -> Result<ComparisonBuilder, Rejection<Self>> {
        self.builder_for(MatrixTarget::sub_criteria(parent))
    }

    /// Builder for any matrix of the hierarchy.
    pub fn builder_for(self, target: MatrixTarget) -> Result<ComparisonBuilder, Rejection<Self>> {
        match self.labels_for(&target) {
            Ok(labels) => Ok(self.open(target, labels)),
            Err(error) => Err(Rejection::new(error, self)),
        }
    }

    /// Matrices still missing, in the order a driver fills them: alternatives
    /// per comparable criterion, then criteria, then sub-criteria per parent.
    pub fn pending_targets(&self) -> Vec<MatrixTarget> {
        let mut pending: Vec<MatrixTarget> = self
            .hierarchy
            .comparable_criteria()
            .into_iter()
            .filter(|c| !self.alternatives_matrices.contains_key(*c))
            .map(MatrixTarget::alternatives)
            .collect();

        if self.criteria_matrix.is_none() {
            pending.push(MatrixTarget::Criteria);
        }

        pending.extend(
            self.hierarchy
                .parents()
                .filter(|p| !self.sub_criteria_matrices.contains_key(*p))
                .map(MatrixTarget::sub_criteria),
        );
        pending
    }

    /// Builder for the first pending matrix.
    pub fn next_builder(self) -> ComparisonBuilder {
        match self.pending_targets().into_iter().next() {
            Some(target) => match self.labels_for(&target) {
                Ok(labels) => self.open(target, labels),
                Err(_) => self.criteria_builder(),
            },
            // A model with nothing pending has already become complete.
            None => self.criteria_builder(),
        }
    }

    fn labels_for(&self, target: &MatrixTarget) -> Result<Vec<String>, AhpError> {
        match target {
            MatrixTarget::Alternatives { criterion } => {
                if self.hierarchy.has_sub_criteria(criterion) {
                    return Err(AhpError::invalid_criterion(
                        criterion.as_str(),
                        "has sub-criteria; compare alternatives under its sub-criteria",
                    ));
                }
                if !self.hierarchy.is_comparable(criterion) {
                    return Err(AhpError::invalid_criterion(
                        criterion.as_str(),
                        "is not part of this hierarchy",
                    ));
                }
                Ok(self.hierarchy.alternatives().to_vec())
            }
            MatrixTarget::Criteria => Ok(self.hierarchy.criteria().to_vec()),
            MatrixTarget::SubCriteria { parent } => match self.hierarchy.sub_criteria_of(parent) {
                Some(subs) => Ok(subs.to_vec()),
                None if self.hierarchy.criteria().contains(parent) => Err(
                    AhpError::invalid_criterion(parent.as_str(), "declared no sub-criteria"),
                ),
                None => Err(AhpError::invalid_criterion(
                    parent.as_str(),
                    "is not a top-level criterion",
                )),
            },
        }
    }

    fn open(self, target: MatrixTarget, labels: Vec<String>) -> ComparisonBuilder {
        // Hierarchy label sets are non-empty and unique once built.
        ComparisonBuilder::new(self, target, PairwiseMatrix::seeded(labels))
    }

    /// Stores a finished matrix and re-evaluates completion.
    pub(super) fn add_matrix(mut self, target: MatrixTarget, matrix: ComparisonMatrix) -> BuildStep {
        match target {
            MatrixTarget::Alternatives { criterion } => {
                self.alternatives_matrices.insert(criterion, matrix);
            }
            MatrixTarget::Criteria => self.criteria_matrix = Some(matrix),
            MatrixTarget::SubCriteria { parent } => {
                self.sub_criteria_matrices.insert(parent, matrix);
            }
        }

        match CompleteModel::try_from_model(self) {
            Ok(complete) => {
                debug!("Hierarchy model complete");
                BuildStep::Complete(complete)
            }
            Err(model) => {
                debug!(
                    completed = model.completed_count(),
                    required = model.required_count(),
                    "Hierarchy model advanced"
                );
                BuildStep::Advanced(model)
            }
        }
    }

    fn is_finished(&self) -> bool {
        self.criteria_matrix.is_some()
            && self.alternatives_matrices.len() == self.hierarchy.comparable_count()
            && self.sub_criteria_matrices.len() == self.hierarchy.parent_count()
    }
}

/// A hierarchy with every required matrix filled.
#[derive(Debug, Clone)]
pub struct CompleteModel {
    hierarchy: DecisionHierarchy,
    alternatives_matrices: HashMap<String, ComparisonMatrix>,
    criteria_matrix: ComparisonMatrix,
    sub_criteria_matrices: HashMap<String, ComparisonMatrix>,
}

impl CompleteModel {
    fn try_from_model(mut model: HierarchyModel) -> Result<Self, HierarchyModel> {
        if !model.is_finished() {
            return Err(model);
        }
        match model.criteria_matrix.take() {
            Some(criteria_matrix) => Ok(Self {
                hierarchy: model.hierarchy,
                alternatives_matrices: model.alternatives_matrices,
                criteria_matrix,
                sub_criteria_matrices: model.sub_criteria_matrices,
            }),
            None => Err(model),
        }
    }

    pub fn hierarchy(&self) -> &DecisionHierarchy {
        &self.hierarchy
    }

    /// Alternatives matrix under a leaf criterion or sub-criterion.
    pub fn alternatives_matrix(&self, criterion: &str) -> Result<&ComparisonMatrix, AhpError> {
        self.alternatives_matrices.get(criterion).ok_or_else(|| {
            AhpError::invalid_criterion(criterion, "has no alternatives comparison")
        })
    }

    pub fn criteria_matrix(&self) -> &ComparisonMatrix {
        &self.criteria_matrix
    }

    /// Sub-criteria matrix of a parent criterion.
    pub fn sub_criteria_matrix(&self, parent: &str) -> Result<&ComparisonMatrix, AhpError> {
        self.sub_criteria_matrices
            .get(parent)
            .ok_or_else(|| AhpError::invalid_criterion(parent, "declared no sub-criteria"))
    }

    /// Any matrix of the hierarchy.
    pub fn matrix(&self, target: &MatrixTarget) -> Result<&ComparisonMatrix, AhpError> {
        match target {
            MatrixTarget::Alternatives { criterion } => self.alternatives_matrix(criterion),
            MatrixTarget::Criteria => Ok(self.criteria_matrix()),
            MatrixTarget::SubCriteria { parent } => self.sub_criteria_matrix(parent),
        }
    }

    /// Weights derived from one matrix with the given method.
    pub fn derive_priorities(
        &self,
        target: &MatrixTarget,
        method: DerivationMethod,
    ) -> Result<Priorities, AhpError> {
        method.derive(self.matrix(target)?)
    }

    /// Koczkodaj index of the alternatives matrix under `criterion`.
    pub fn consistency(&self, criterion: &str) -> Result<f64, AhpError> {
        ConsistencyAnalyzer::koczkodaj_index(self.alternatives_matrix(criterion)?)
    }

    /// Koczkodaj index for every comparable criterion against `threshold`.
    pub fn consistency_report(&self, threshold: f64) -> Vec<ConsistencyEntry> {
        ConsistencyAnalyzer::report(self, threshold)
    }

    /// Final alternative scores using the geometric mean method.
    pub fn aggregate(&self) -> Result<Priorities, AhpError> {
        self.aggregate_with(DerivationMethod::GeometricMean)
    }

    /// Final alternative scores using `method` for every matrix.
    pub fn aggregate_with(&self, method: DerivationMethod) -> Result<Priorities, AhpError> {
        PriorityAggregator::aggregate(self, method)
    }

    /// Global weight of each comparable criterion.
    pub fn effective_weights(&self, method: DerivationMethod) -> Result<Priorities, AhpError> {
        PriorityAggregator::effective_weights(self, method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn nested_model() -> HierarchyModel {
        HierarchyModel::new(
            DecisionHierarchy::builder()
                .alternatives(vec!["A", "B"])
                .criteria(vec!["X", "Y"])
                .add_sub_criterion("X", "X1")
                .add_sub_criterion("X", "X2")
                .build()
                .unwrap(),
        )
    }

    fn fill(model: HierarchyModel, target: MatrixTarget, judgments: &[(&str, &str, i32)]) -> BuildStep {
        let mut step = BuildStep::Building(model.builder_for(target).unwrap());
        for &(first, second, value) in judgments {
            let builder = step.into_builder().expect("matrix completed early");
            step = builder.compare(first, second, value).unwrap();
        }
        step
    }

    #[test]
    fn pending_targets_follow_canonical_order() {
        let model = nested_model();
        assert_eq!(
            model.pending_targets(),
            vec![
                MatrixTarget::alternatives("X1"),
                MatrixTarget::alternatives("X2"),
                MatrixTarget::alternatives("Y"),
                MatrixTarget::Criteria,
                MatrixTarget::sub_criteria("X"),
            ]
        );
        assert_eq!(model.required_count(), 5);
    }

    #[test]
    fn alternatives_builder_rejects_parent_criterion() {
        let rejection = nested_model().alternatives_builder("X").unwrap_err();
        assert_eq!(rejection.error.code(), ErrorCode::InvalidCriterion);
        assert_eq!(rejection.inner.completed_count(), 0);
    }

    #[test]
    fn alternatives_builder_rejects_unknown_label() {
        let rejection = nested_model().alternatives_builder("Z").unwrap_err();
        assert_eq!(rejection.error.code(), ErrorCode::InvalidCriterion);
    }

    #[test]
    fn sub_criteria_builder_rejects_leaf_criterion() {
        let rejection = nested_model().sub_criteria_builder("Y").unwrap_err();
        assert_eq!(
            rejection.error,
            AhpError::invalid_criterion("Y", "declared no sub-criteria")
        );
    }

    #[test]
    fn builder_labels_match_target() {
        let builder = nested_model().sub_criteria_builder("X").unwrap();
        assert_eq!(builder.matrix().labels(), &["X1".to_string(), "X2".to_string()]);

        let builder = builder.abandon().criteria_builder();
        assert_eq!(builder.matrix().labels(), &["X".to_string(), "Y".to_string()]);
    }

    #[test]
    fn model_completes_only_after_every_matrix() {
        let model = fill(nested_model(), MatrixTarget::Criteria, &[("X", "Y", 3)])
            .into_model()
            .unwrap();
        let model = fill(model, MatrixTarget::alternatives("X1"), &[("A", "B", 2)])
            .into_model()
            .unwrap();
        let model = fill(model, MatrixTarget::alternatives("X2"), &[("B", "A", 2)])
            .into_model()
            .unwrap();
        let model = fill(model, MatrixTarget::alternatives("Y"), &[("A", "B", 5)])
            .into_model()
            .unwrap();
        assert_eq!(model.pending_targets(), vec![MatrixTarget::sub_criteria("X")]);

        let complete = fill(model, MatrixTarget::sub_criteria("X"), &[("X1", "X2", 1)])
            .into_complete()
            .unwrap();
        assert_eq!(complete.criteria_matrix().get("X", "Y"), Some(3.0));
        assert!(complete.alternatives_matrix("X").is_err());
    }

    #[test]
    fn refilling_a_matrix_overwrites_it() {
        let model = fill(nested_model(), MatrixTarget::alternatives("Y"), &[("A", "B", 5)])
            .into_model()
            .unwrap();
        let model = fill(model, MatrixTarget::alternatives("Y"), &[("B", "A", 3)])
            .into_model()
            .unwrap();

        assert_eq!(model.completed_count(), 1);
    }

    #[test]
    fn next_builder_walks_pending_targets() {
        let builder = nested_model().next_builder();
        assert_eq!(builder.target(), &MatrixTarget::alternatives("X1"));

        let model = builder.compare("A", "B", 4).unwrap().into_model().unwrap();
        assert_eq!(model.next_builder().target(), &MatrixTarget::alternatives("X2"));
    }
}

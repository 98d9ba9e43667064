//! Comparison builder - fills one matrix of a hierarchy model.
//!
//! A builder owns the model it was requested from. Each judgment either
//! leaves the builder in place (more pairs are missing) or, on the call that
//! fills the last pair, folds the finished matrix into the model and returns
//! the next stage. The stage is carried by [`BuildStep`], so the driver loop
//! matches on it instead of inspecting the builder.

use tracing::debug;

use super::{CompleteModel, HierarchyModel, MatrixTarget, PairwiseMatrix};
use crate::domain::foundation::{AhpError, Judgment, JudgmentScale, Preference, Rejection};

/// What a judgment (or a fold) produced.
#[derive(Debug)]
pub enum BuildStep {
    /// The matrix still has unset pairs.
    Building(ComparisonBuilder),
    /// The matrix was folded in; other matrices are still missing.
    Advanced(HierarchyModel),
    /// The matrix was the last one required.
    Complete(CompleteModel),
}

impl BuildStep {
    pub fn is_building(&self) -> bool {
        matches!(self, BuildStep::Building(_))
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, BuildStep::Complete(_))
    }

    pub fn into_builder(self) -> Option<ComparisonBuilder> {
        match self {
            BuildStep::Building(builder) => Some(builder),
            _ => None,
        }
    }

    pub fn into_model(self) -> Option<HierarchyModel> {
        match self {
            BuildStep::Advanced(model) => Some(model),
            _ => None,
        }
    }

    pub fn into_complete(self) -> Option<CompleteModel> {
        match self {
            BuildStep::Complete(model) => Some(model),
            _ => None,
        }
    }
}

/// Accumulates judgments for one matrix of a [`HierarchyModel`].
#[derive(Debug)]
pub struct ComparisonBuilder {
    model: HierarchyModel,
    target: MatrixTarget,
    matrix: PairwiseMatrix,
}

impl ComparisonBuilder {
    pub(super) fn new(model: HierarchyModel, target: MatrixTarget, matrix: PairwiseMatrix) -> Self {
        Self {
            model,
            target,
            matrix,
        }
    }

    /// The matrix this builder fills.
    pub fn target(&self) -> &MatrixTarget {
        &self.target
    }

    /// Judgments recorded so far.
    pub fn matrix(&self) -> &PairwiseMatrix {
        &self.matrix
    }

    /// The model the finished matrix will be folded into.
    pub fn model(&self) -> &HierarchyModel {
        &self.model
    }

    /// First pair still waiting for a judgment.
    pub fn next_unset_pair(&self) -> Option<(&str, &str)> {
        self.matrix.next_unset_pair()
    }

    pub fn unset_pair_count(&self) -> usize {
        self.matrix.unset_pair_count()
    }

    /// Records that `first` is preferred over `second` by `value` (1-9).
    ///
    /// Re-comparing a pair replaces the earlier judgment in both directions.
    ///
    /// # Errors
    ///
    /// `JudgmentOutOfRange`, `SelfComparison` or `UnknownLabel`; the builder
    /// is handed back unchanged inside the rejection.
    pub fn compare(mut self, first: &str, second: &str, value: i32) -> Result<BuildStep, Rejection<Self>> {
        let judgment = match Judgment::try_new(value) {
            Ok(judgment) => judgment,
            Err(error) => return Err(Rejection::new(error, self)),
        };
        if let Err(error) = self.matrix.set(first, second, judgment) {
            return Err(Rejection::new(error, self));
        }
        Ok(self.advance())
    }

    /// Records a signed judgment: positive favors `first`, negative favors
    /// `second` by the absolute value.
    pub fn compare_signed(self, first: &str, second: &str, signed: i32) -> Result<BuildStep, Rejection<Self>> {
        if signed >= 0 {
            self.compare(first, second, signed)
        } else {
            let value = signed.checked_neg().unwrap_or(i32::MAX);
            self.compare(second, first, value)
        }
    }

    /// Records an ordinal preference of `first` over `second`, translated
    /// through `scale`.
    pub fn compare_preference(
        self,
        first: &str,
        second: &str,
        preference: Preference,
        scale: &dyn JudgmentScale,
    ) -> Result<BuildStep, Rejection<Self>> {
        let signed = scale.to_signed(preference);
        self.compare_signed(first, second, signed)
    }

    /// Folds a matrix that needs no further judgments.
    ///
    /// Only a single-label matrix is complete before any `compare` call.
    pub fn finish(self) -> Result<BuildStep, Rejection<Self>> {
        if self.matrix.is_complete() {
            Ok(self.advance())
        } else {
            let unset = self.matrix.unset_pair_count();
            Err(Rejection::new(AhpError::IncompleteMatrix { unset }, self))
        }
    }

    /// Drops the judgments recorded so far and returns the untouched model.
    pub fn abandon(self) -> HierarchyModel {
        debug!(target_matrix = %self.target, "Abandoned comparison builder");
        self.model
    }

    fn advance(self) -> BuildStep {
        let Self {
            model,
            target,
            matrix,
        } = self;

        match matrix.into_complete() {
            Ok(matrix) => {
                debug!(target_matrix = %target, size = matrix.size(), "Comparison matrix complete");
                model.add_matrix(target, matrix)
            }
            Err(matrix) => BuildStep::Building(Self {
                model,
                target,
                matrix,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::DecisionHierarchy;
    use crate::domain::foundation::OrdinalScale;

    fn three_alternatives_two_criteria() -> HierarchyModel {
        HierarchyModel::new(
            DecisionHierarchy::builder()
                .alternatives(vec!["A", "B", "C"])
                .criteria(vec!["X", "Y"])
                .build()
                .unwrap(),
        )
    }

    fn alternatives_under_x() -> ComparisonBuilder {
        three_alternatives_two_criteria().alternatives_builder("X").unwrap()
    }

    #[test]
    fn builder_returns_itself_until_last_pair() {
        let step = alternatives_under_x().compare("A", "B", 3).unwrap();
        assert!(step.is_building());

        let step = step.into_builder().unwrap().compare("A", "C", 5).unwrap();
        assert!(step.is_building());

        let step = step.into_builder().unwrap().compare("B", "C", 2).unwrap();
        let model = step.into_model().expect("last pair folds the matrix");
        assert_eq!(model.completed_count(), 1);
    }

    #[test]
    fn recompare_does_not_complete_early() {
        let builder = alternatives_under_x()
            .compare("A", "B", 3)
            .unwrap()
            .into_builder()
            .unwrap();
        let builder = builder.compare("B", "A", 7).unwrap().into_builder().unwrap();

        assert_eq!(builder.unset_pair_count(), 2);
        assert_eq!(builder.matrix().get("B", "A"), Some(7.0));
        assert_eq!(builder.matrix().get("A", "B"), Some(1.0 / 7.0));
    }

    #[test]
    fn rejected_judgment_returns_builder_unchanged() {
        let builder = alternatives_under_x()
            .compare("A", "B", 3)
            .unwrap()
            .into_builder()
            .unwrap();

        for (first, second, value, expected) in [
            ("A", "C", 10, AhpError::JudgmentOutOfRange { value: 10 }),
            ("A", "C", 0, AhpError::JudgmentOutOfRange { value: 0 }),
            ("A", "A", 3, AhpError::SelfComparison { label: "A".into() }),
            ("A", "Z", 3, AhpError::UnknownLabel { label: "Z".into() }),
        ] {
            let before = builder.matrix().clone();
            let rejection = builder_clone(&builder).compare(first, second, value).unwrap_err();
            assert_eq!(rejection.error, expected);
            assert_eq!(rejection.inner.matrix(), &before);
        }
    }

    fn builder_clone(builder: &ComparisonBuilder) -> ComparisonBuilder {
        ComparisonBuilder::new(
            builder.model().clone(),
            builder.target().clone(),
            builder.matrix().clone(),
        )
    }

    #[test]
    fn signed_judgment_picks_preferred_side() {
        let builder = alternatives_under_x()
            .compare_signed("A", "B", -4)
            .unwrap()
            .into_builder()
            .unwrap();

        assert_eq!(builder.matrix().get("B", "A"), Some(4.0));
        assert_eq!(builder.matrix().get("A", "B"), Some(0.25));

        let rejection = builder.compare_signed("A", "C", 0).unwrap_err();
        assert_eq!(rejection.error, AhpError::JudgmentOutOfRange { value: 0 });
    }

    #[test]
    fn preference_is_mapped_through_scale() {
        let scale = OrdinalScale::default();
        let builder = alternatives_under_x()
            .compare_preference("A", "B", Preference::MuchWorse, &scale)
            .unwrap()
            .into_builder()
            .unwrap();
        let builder = builder
            .compare_preference("A", "C", Preference::Same, &scale)
            .unwrap()
            .into_builder()
            .unwrap();

        assert_eq!(builder.matrix().get("B", "A"), Some(9.0));
        assert_eq!(builder.matrix().get("A", "C"), Some(1.0));
    }

    #[test]
    fn finish_rejects_incomplete_matrix() {
        let rejection = alternatives_under_x().finish().unwrap_err();
        assert_eq!(rejection.error, AhpError::IncompleteMatrix { unset: 3 });
    }

    #[test]
    fn finish_folds_single_label_matrix() {
        let model = HierarchyModel::new(
            DecisionHierarchy::builder()
                .add_alternative("Only")
                .criteria(vec!["X", "Y"])
                .build()
                .unwrap(),
        );

        let step = model.alternatives_builder("X").unwrap().finish().unwrap();
        let model = step.into_model().unwrap();
        assert_eq!(model.completed_count(), 1);
    }

    #[test]
    fn abandon_leaves_model_untouched() {
        let model = alternatives_under_x()
            .compare("A", "B", 3)
            .unwrap()
            .into_builder()
            .unwrap()
            .abandon();

        assert_eq!(model.completed_count(), 0);
        assert_eq!(model.pending_targets().len(), 3);
    }
}

//! Comparison session - the caller-owned driver state for one hierarchy.
//!
//! A session keeps exactly one stage: the builder currently collecting
//! judgments, or the complete model. Each judgment moves the stage forward;
//! `reset` starts over from a fresh model over the same labels.

use tracing::{debug, info};

use super::{
    AhpReport, BuildStep, ComparisonBuilder, CompleteModel, DecisionHierarchy, DerivationMethod,
    HierarchyModel, MatrixTarget,
};
use crate::domain::foundation::{
    AhpError, JudgmentScale, Preference, Rejection, SessionId, Timestamp,
};

#[derive(Debug)]
enum Stage {
    Collecting(ComparisonBuilder),
    Complete(CompleteModel),
}

/// What a single judgment did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionProgress {
    /// The current matrix still has unset pairs.
    InProgress,
    /// The current matrix was completed; the session moved to the next one.
    MatrixCompleted(MatrixTarget),
    /// The last required matrix was completed.
    Complete,
}

/// Caller-owned comparison session.
#[derive(Debug)]
pub struct AhpSession {
    id: SessionId,
    hierarchy: DecisionHierarchy,
    started_at: Timestamp,
    // Only None while a call is moving the stage.
    stage: Option<Stage>,
}

impl AhpSession {
    /// Starts collecting judgments for `hierarchy`.
    pub fn start(hierarchy: DecisionHierarchy) -> Self {
        let id = SessionId::new();
        let stage = settle(HierarchyModel::new(hierarchy.clone()).next_builder());
        info!(
            session_id = %id,
            alternatives = hierarchy.alternatives().len(),
            comparable_criteria = hierarchy.comparable_count(),
            "Started comparison session"
        );

        Self {
            id,
            hierarchy,
            started_at: Timestamp::now(),
            stage: Some(stage),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn hierarchy(&self) -> &DecisionHierarchy {
        &self.hierarchy
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.stage, Some(Stage::Complete(_)))
    }

    /// The complete model, once every matrix is filled.
    pub fn complete_model(&self) -> Option<&CompleteModel> {
        match &self.stage {
            Some(Stage::Complete(model)) => Some(model),
            _ => None,
        }
    }

    /// The builder collecting judgments right now.
    pub fn current_builder(&self) -> Option<&ComparisonBuilder> {
        match &self.stage {
            Some(Stage::Collecting(builder)) => Some(builder),
            _ => None,
        }
    }

    /// The matrix currently being filled.
    pub fn current_target(&self) -> Option<&MatrixTarget> {
        self.current_builder().map(ComparisonBuilder::target)
    }

    /// The next pair a driver should ask about.
    pub fn next_pair(&self) -> Option<(&str, &str)> {
        self.current_builder()?.next_unset_pair()
    }

    /// Matrices not yet completed, the current one included.
    pub fn pending_targets(&self) -> Vec<MatrixTarget> {
        self.current_builder()
            .map(|builder| builder.model().pending_targets())
            .unwrap_or_default()
    }

    /// Records `first` preferred over `second` by `value` in the current matrix.
    pub fn judge(&mut self, first: &str, second: &str, value: i32) -> Result<SessionProgress, AhpError> {
        self.advance(|builder| builder.compare(first, second, value))
    }

    /// Records a signed judgment in the current matrix.
    pub fn judge_signed(&mut self, first: &str, second: &str, signed: i32) -> Result<SessionProgress, AhpError> {
        self.advance(|builder| builder.compare_signed(first, second, signed))
    }

    /// Records an ordinal preference in the current matrix.
    pub fn judge_preference(
        &mut self,
        first: &str,
        second: &str,
        preference: Preference,
        scale: &dyn JudgmentScale,
    ) -> Result<SessionProgress, AhpError> {
        self.advance(|builder| builder.compare_preference(first, second, preference, scale))
    }

    /// Switches to another pending matrix, discarding judgments on the current one.
    ///
    /// A rejected target leaves the current matrix and its judgments in place.
    pub fn switch_to(&mut self, target: MatrixTarget) -> Result<(), AhpError> {
        match self.stage.take() {
            Some(Stage::Collecting(builder)) => match builder.model().clone().builder_for(target) {
                Ok(next) => {
                    builder.abandon();
                    self.stage = Some(settle(next));
                    Ok(())
                }
                Err(rejection) => {
                    debug!(session_id = %self.id, error = %rejection.error, "Rejected matrix switch");
                    self.stage = Some(Stage::Collecting(builder));
                    Err(rejection.error)
                }
            },
            other => {
                self.stage = other;
                Err(AhpError::SessionComplete)
            }
        }
    }

    /// Drops every judgment and starts over with the same labels.
    pub fn reset(&mut self) {
        self.stage = Some(settle(HierarchyModel::new(self.hierarchy.clone()).next_builder()));
        self.started_at = Timestamp::now();
        info!(session_id = %self.id, "Reset comparison session");
    }

    /// Computes the final report.
    ///
    /// # Errors
    ///
    /// `SessionIncomplete` while matrices are missing, or any derivation error.
    pub fn report(&self, method: DerivationMethod, inconsistency_threshold: f64) -> Result<AhpReport, AhpError> {
        let model = self.complete_model().ok_or_else(|| AhpError::SessionIncomplete {
            pending: self.pending_targets().len(),
        })?;
        let report = AhpReport::compute(self.id, model, method, inconsistency_threshold)?;
        info!(
            session_id = %self.id,
            method = %method,
            winner = report.winner().unwrap_or("tie"),
            elapsed_ms = report.computed_at.millis_since(&self.started_at),
            "Computed comparison report"
        );
        Ok(report)
    }

    fn advance<F>(&mut self, judge: F) -> Result<SessionProgress, AhpError>
    where
        F: FnOnce(ComparisonBuilder) -> Result<BuildStep, Rejection<ComparisonBuilder>>,
    {
        let builder = match self.stage.take() {
            Some(Stage::Collecting(builder)) => builder,
            other => {
                self.stage = other;
                return Err(AhpError::SessionComplete);
            }
        };
        let target = builder.target().clone();

        match judge(builder) {
            Ok(BuildStep::Building(builder)) => {
                self.stage = Some(Stage::Collecting(builder));
                Ok(SessionProgress::InProgress)
            }
            Ok(BuildStep::Advanced(model)) => {
                let stage = settle(model.next_builder());
                let progress = match stage {
                    Stage::Complete(_) => SessionProgress::Complete,
                    Stage::Collecting(_) => SessionProgress::MatrixCompleted(target),
                };
                self.stage = Some(stage);
                Ok(progress)
            }
            Ok(BuildStep::Complete(model)) => {
                info!(session_id = %self.id, "All comparison matrices complete");
                self.stage = Some(Stage::Complete(model));
                Ok(SessionProgress::Complete)
            }
            Err(rejection) => {
                debug!(session_id = %self.id, error = %rejection.error, "Rejected judgment");
                let error = rejection.error.clone();
                self.stage = Some(Stage::Collecting(rejection.into_inner()));
                Err(error)
            }
        }
    }
}

/// Folds matrices that need no judgments (single-label sets) until a
/// builder with open pairs, or the complete model, is reached.
fn settle(mut builder: ComparisonBuilder) -> Stage {
    loop {
        if !builder.matrix().is_complete() {
            return Stage::Collecting(builder);
        }
        match builder.finish() {
            Ok(BuildStep::Building(next)) => builder = next,
            Ok(BuildStep::Advanced(model)) => builder = model.next_builder(),
            Ok(BuildStep::Complete(model)) => return Stage::Complete(model),
            Err(rejection) => return Stage::Collecting(rejection.into_inner()),
        }
    }
}

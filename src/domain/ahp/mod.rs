//! AHP Module - Pairwise comparison, priority derivation, and aggregation.
//!
//! # Components
//!
//! - `DecisionHierarchy` - Alternatives, criteria, and one level of sub-criteria
//! - `PairwiseMatrix` / `ComparisonMatrix` - Reciprocal matrices, partial and complete
//! - `ComparisonBuilder` - Fills one matrix; advances the model via `BuildStep`
//! - `HierarchyModel` / `CompleteModel` - Matrices collected so far, then all of them
//! - `DerivationMethod` - Weights from one matrix (GMM, column sums, eigenvector)
//! - `ConsistencyAnalyzer` - Koczkodaj triad inconsistency index
//! - `PriorityAggregator` - Hierarchical composition into final scores
//! - `AhpSession` - Caller-owned driver state over the whole protocol
//!
//! # Design Philosophy
//!
//! Everything here is synchronous and pure apart from `tracing` events.
//! Builders and models are moved through the protocol, so a stage that is
//! no longer valid cannot be used by mistake.

mod aggregation;
mod builder;
mod consistency;
mod hierarchy;
mod matrix;
mod model;
mod priority;
mod report;
mod session;

pub use aggregation::PriorityAggregator;
pub use builder::{BuildStep, ComparisonBuilder};
pub use consistency::{ConsistencyAnalyzer, ConsistencyEntry, MIN_CONSISTENCY_SIZE};
pub use hierarchy::{DecisionHierarchy, HierarchyBuilder, MatrixTarget};
pub use matrix::{ComparisonMatrix, PairwiseMatrix};
pub use model::{CompleteModel, HierarchyModel};
pub use priority::{eigenvector, geometric_mean, simple_column, DerivationMethod, Priorities};
pub use report::{AhpReport, CriterionWeight, RankedAlternative};
pub use session::{AhpSession, SessionProgress};

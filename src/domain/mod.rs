//! Domain layer containing the comparison engine and its value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (judgments, IDs, timestamps, errors)
//! - `ahp` - Hierarchy, matrices, builders, derivation, consistency, aggregation

pub mod ahp;
pub mod foundation;

//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the comparison engine.

mod errors;
mod ids;
mod judgment;
mod preference;
mod timestamp;

pub use errors::{AhpError, ErrorCode, Rejection, ValidationError};
pub use ids::SessionId;
pub use judgment::{Judgment, MAX_JUDGMENT, MIN_JUDGMENT};
pub use preference::{JudgmentScale, OrdinalScale, Preference};
pub use timestamp::Timestamp;

//! Error types for the domain layer.

use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Caller errors on a single judgment
    InvalidJudgment,

    // Requests against the wrong part of the hierarchy
    InvalidCriterion,

    // Construction errors
    StructuralPrecondition,
    MalformedMatrix,

    // Computation errors
    UndersizedMatrix,
    IncompleteMatrix,
    MethodNotSpecified,

    // Session errors
    InvalidSessionState,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidJudgment => "INVALID_JUDGMENT",
            ErrorCode::InvalidCriterion => "INVALID_CRITERION",
            ErrorCode::StructuralPrecondition => "STRUCTURAL_PRECONDITION",
            ErrorCode::MalformedMatrix => "MALFORMED_MATRIX",
            ErrorCode::UndersizedMatrix => "UNDERSIZED_MATRIX",
            ErrorCode::IncompleteMatrix => "INCOMPLETE_MATRIX",
            ErrorCode::MethodNotSpecified => "METHOD_NOT_SPECIFIED",
            ErrorCode::InvalidSessionState => "INVALID_SESSION_STATE",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised by the comparison engine.
///
/// Every variant is a local, non-retryable caller error. Nothing in the
/// engine recovers from one silently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error("Judgment {value} is outside the scale 1..=9")]
    JudgmentOutOfRange { value: i32 },

    #[error("Label '{label}' cannot be compared with itself")]
    SelfComparison { label: String },

    #[error("Label '{label}' is not part of this comparison")]
    UnknownLabel { label: String },

    #[error("Criterion '{criterion}' {reason}")]
    InvalidCriterion { criterion: String, reason: String },

    #[error("Hierarchy is not usable: {reason}")]
    StructuralPrecondition { reason: String },

    #[error("Consistency needs at least 3 labels, matrix has {size}")]
    UndersizedMatrix { size: usize },

    #[error("Matrix still has {unset} unset pairs")]
    IncompleteMatrix { unset: usize },

    #[error("Derivation method '{method}' has no defined formula")]
    MethodNotSpecified { method: String },

    #[error("Matrix is malformed: {reason}")]
    MalformedMatrix { reason: String },

    #[error("Session is complete; reset it to collect new judgments")]
    SessionComplete,

    #[error("Session still needs {pending} comparison matrices")]
    SessionIncomplete { pending: usize },
}

impl AhpError {
    /// Creates an invalid criterion error.
    pub fn invalid_criterion(criterion: impl Into<String>, reason: impl Into<String>) -> Self {
        AhpError::InvalidCriterion {
            criterion: criterion.into(),
            reason: reason.into(),
        }
    }

    /// Creates a structural precondition error.
    pub fn structural(reason: impl Into<String>) -> Self {
        AhpError::StructuralPrecondition {
            reason: reason.into(),
        }
    }

    /// Creates a malformed matrix error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        AhpError::MalformedMatrix {
            reason: reason.into(),
        }
    }

    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AhpError::JudgmentOutOfRange { .. }
            | AhpError::SelfComparison { .. }
            | AhpError::UnknownLabel { .. } => ErrorCode::InvalidJudgment,
            AhpError::InvalidCriterion { .. } => ErrorCode::InvalidCriterion,
            AhpError::StructuralPrecondition { .. } => ErrorCode::StructuralPrecondition,
            AhpError::UndersizedMatrix { .. } => ErrorCode::UndersizedMatrix,
            AhpError::IncompleteMatrix { .. } => ErrorCode::IncompleteMatrix,
            AhpError::MethodNotSpecified { .. } => ErrorCode::MethodNotSpecified,
            AhpError::MalformedMatrix { .. } => ErrorCode::MalformedMatrix,
            AhpError::SessionComplete | AhpError::SessionIncomplete { .. } => {
                ErrorCode::InvalidSessionState
            }
        }
    }
}

/// A rejected call on a consuming operation.
///
/// Builders and models are moved into the calls that advance them. When
/// such a call fails the value comes back untouched in `inner`, so the
/// caller can fix its input and retry without losing judgments.
pub struct Rejection<T> {
    pub error: AhpError,
    pub inner: Box<T>,
}

impl<T> Rejection<T> {
    /// Wraps an error together with the value it was raised against.
    pub fn new(error: AhpError, inner: T) -> Self {
        Self {
            error,
            inner: Box::new(inner),
        }
    }

    /// Takes the value back, dropping the error.
    pub fn into_inner(self) -> T {
        *self.inner
    }
}

impl<T> fmt::Debug for Rejection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejection")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Rejection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error.code(), self.error)
    }
}

impl<T> Error for Rejection<T> {}

impl<T> From<Rejection<T>> for AhpError {
    fn from(rejection: Rejection<T>) -> Self {
        rejection.error
    }
}

//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing subscriber already installed: {0}")]
    TracingInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Inconsistency threshold must be a positive finite number, got {0}")]
    InvalidThreshold(f64),

    #[error("Derivation method '{0}' cannot be used for computation")]
    UnusableMethod(String),

    #[error("Invalid judgment scale: {0}")]
    InvalidScale(#[from] crate::domain::foundation::ValidationError),

    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },
}

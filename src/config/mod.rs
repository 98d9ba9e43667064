//! Engine configuration
//!
//! Settings come from `AHP__*` environment variables (a `.env` file is
//! honored in development) and are read through the `config` crate into the
//! typed sections below.
//!
//! # Example
//!
//! ```no_run
//! use ahp_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("configuration should load");
//! config.validate().expect("configuration should be valid");
//!
//! println!("Deriving weights with {}", config.engine.derivation_method);
//! ```

mod engine;
mod error;
mod labels;
mod logging;
mod scale;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use labels::LabelsConfig;
pub use logging::LoggingConfig;
pub use scale::ScaleConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Derivation method and consistency threshold
    #[serde(default)]
    pub engine: EngineConfig,

    /// Ordinal preference scale
    #[serde(default)]
    pub scale: ScaleConfig,

    /// Label listing paths
    #[serde(default)]
    pub labels: LabelsConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reads `.env` (if any) and the process environment.
    ///
    /// Keys are `AHP__<SECTION>__<FIELD>`:
    ///
    /// - `AHP__ENGINE__DERIVATION_METHOD=eigenvector` -> `engine.derivation_method`
    /// - `AHP__LABELS__CRITERIA_PATH=...` -> `labels.criteria_path`
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when a value does not parse into its field.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env is normal outside development.
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("AHP").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section; the first invalid one is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.scale.validate()?;
        self.labels.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

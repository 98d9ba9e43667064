//! AHP Engine - comparison planner
//!
//! Loads configuration and labels, opens a comparison session, and logs the
//! matrices a driver will have to fill. Judgments are collected by an
//! interactive layer built on top of `AhpSession`.

use thiserror::Error;
use tracing::{error, info};

use ahp_engine::config::{AppConfig, ConfigError};
use ahp_engine::domain::ahp::{AhpSession, MatrixTarget};
use ahp_engine::ports::{LabelSource, LabelSourceError};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Labels(#[from] LabelSourceError),
}

fn main() -> std::process::ExitCode {
    match run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            // The subscriber may not be installed yet.
            eprintln!("ahp-engine: {e}");
            error!(error = %e, "Startup failed");
            std::process::ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    config.logging.init_tracing()?;

    info!(
        method = %config.engine.derivation_method,
        threshold = config.engine.inconsistency_threshold,
        "Configuration loaded"
    );

    let hierarchy = config.labels.source().load()?;
    let session = AhpSession::start(hierarchy);
    let hierarchy = session.hierarchy();

    let mut total_pairs = 0;
    for target in session.pending_targets() {
        let size = match &target {
            MatrixTarget::Alternatives { .. } => hierarchy.alternatives().len(),
            MatrixTarget::Criteria => hierarchy.criteria().len(),
            MatrixTarget::SubCriteria { parent } => {
                hierarchy.sub_criteria_of(parent).map_or(0, <[String]>::len)
            }
        };
        let pairs = size * size.saturating_sub(1) / 2;
        total_pairs += pairs;
        info!(target_matrix = %target, labels = size, pairs, "Planned comparison matrix");
    }

    info!(
        session_id = %session.id(),
        matrices = session.pending_targets().len(),
        pairs = total_pairs,
        complete = session.is_complete(),
        "Comparison plan ready"
    );
    Ok(())
}

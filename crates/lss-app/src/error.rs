//! Error types for the lss-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// gives front ends a single error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Project(String),

    #[error("Failed to load {name} table from {}", path.display())]
    Load {
        name: String,
        path: PathBuf,
        source: lss_table::TableError,
    },

    #[error("Invalid table format: {0}")]
    TableFormat(String),

    #[error("Invalid model: {0}")]
    Model(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Results error: {0}")]
    Results(String),
}

/// Result type for lss-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<lss_project::ProjectError> for AppError {
    fn from(err: lss_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<lss_sim::SimError> for AppError {
    fn from(err: lss_sim::SimError) -> Self {
        match err {
            lss_sim::SimError::InvalidModel { .. } => AppError::Model(err.to_string()),
            lss_sim::SimError::Core(_) => AppError::Simulation(err.to_string()),
        }
    }
}

impl From<lss_results::ResultsError> for AppError {
    fn from(err: lss_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}

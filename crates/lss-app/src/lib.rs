//! Shared application service layer for lss.
//!
//! Front ends go through this crate to load a model, run a simulation,
//! persist the trajectories and inspect completed runs.

pub mod error;
pub mod model_service;
pub mod progress;
pub mod query;
pub mod run_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use model_service::{load_inputs, load_system, table_format};
pub use progress::{RunProgressEvent, RunStage};
pub use query::{RunSummary, get_run_summary};
pub use run_service::{
    RunRequest, RunResponse, RunTimingSummary, SOLVER_VERSION, ValidationSummary, load_run, run,
    run_with_progress, validate_run,
};

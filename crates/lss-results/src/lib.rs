//! lss-results: run manifests and trajectory storage.

pub mod hash;
pub mod store;
pub mod types;

pub use hash::compute_run_id;
pub use store::{MANIFEST_FILE, OUTPUTS_FILE, RunStore, STATES_FILE};
pub use types::*;

use std::path::PathBuf;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Table error: {0}")]
    Table(#[from] lss_table::TableError),

    #[error("No completed run in {}", dir.display())]
    RunNotFound { dir: PathBuf },

    #[error("Run data does not match manifest: {what}")]
    Corrupt { what: String },
}

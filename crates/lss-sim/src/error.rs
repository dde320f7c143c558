//! Error types for simulation operations.

use lss_core::{CoreError, Dims};
use thiserror::Error;

/// Errors encountered while building a model or simulating it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("Invalid model: {matrix} is {found}, {requirement}")]
    InvalidModel {
        matrix: &'static str,
        found: Dims,
        requirement: &'static str,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;

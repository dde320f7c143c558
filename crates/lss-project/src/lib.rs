//! lss-project: run configuration file format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_config};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Load and validate a run configuration.
///
/// Relative paths inside the file are resolved against the directory that
/// contains it.
pub fn load_yaml(path: &Path) -> ProjectResult<RunConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: RunConfig = serde_yaml::from_str(&content)?;
    validate_config(&config)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.resolved(base))
}

pub fn save_yaml(path: &Path, config: &RunConfig) -> ProjectResult<()> {
    validate_config(config)?;
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

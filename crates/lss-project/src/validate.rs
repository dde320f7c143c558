//! Run configuration validation.

use std::path::Path;

use crate::schema::{LATEST_VERSION, RunConfig};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Empty path for {field}")]
    EmptyPath { field: &'static str },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

pub fn validate_config(config: &RunConfig) -> Result<(), ValidationError> {
    if config.version == 0 || config.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    for (name, path) in config.model.entries() {
        non_empty(path, name)?;
    }
    non_empty(&config.inputs, "inputs")?;
    non_empty(&config.output_dir, "output_dir")?;

    let delimiter = config.table.delimiter;
    if !delimiter.is_ascii() || matches!(delimiter, '"' | '\n' | '\r') {
        return Err(ValidationError::InvalidValue {
            field: "table.delimiter",
            value: format!("{delimiter:?}"),
            reason: "must be an ASCII character other than quote or newline",
        });
    }
    if config.table.precision > 17 {
        return Err(ValidationError::InvalidValue {
            field: "table.precision",
            value: config.table.precision.to_string(),
            reason: "must be at most 17",
        });
    }

    Ok(())
}

fn non_empty(path: &Path, field: &'static str) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        Err(ValidationError::EmptyPath { field })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config() -> RunConfig {
        RunConfig::from_model_dir(Path::new("model"), Path::new("results"))
    }

    #[test]
    fn default_layout_is_valid() {
        validate_config(&config()).unwrap();
    }

    #[test]
    fn rejects_future_version() {
        let mut cfg = config();
        cfg.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_config(&cfg),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn rejects_empty_model_path() {
        let mut cfg = config();
        cfg.model.c = PathBuf::new();
        assert!(matches!(
            validate_config(&cfg),
            Err(ValidationError::EmptyPath { field: "C" })
        ));
    }

    #[test]
    fn rejects_bad_delimiter_and_precision() {
        let mut cfg = config();
        cfg.table.delimiter = 'é';
        assert!(validate_config(&cfg).is_err());

        let mut cfg = config();
        cfg.table.precision = 30;
        assert!(validate_config(&cfg).is_err());
    }
}

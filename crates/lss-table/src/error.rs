//! Error types for table I/O.

use std::path::PathBuf;

/// Errors from loading or saving a numeric table.
///
/// Row and column indices are 0-based record/field positions.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("table is empty")]
    Empty,

    #[error("failed to parse value {value:?} at row {row}, column {col}")]
    Parse {
        row: usize,
        col: usize,
        value: String,
    },

    #[error("row {row} has {found} columns, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid table shape: {0}")]
    Shape(#[from] lss_core::CoreError),

    #[error("invalid table format: {what}")]
    InvalidFormat { what: &'static str },
}

pub type TableResult<T> = Result<T, TableError>;

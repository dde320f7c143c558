//! Delimiter and precision settings shared by reader and writer.

use crate::error::{TableError, TableResult};

/// Layout of a numeric table on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableFormat {
    /// Field separator (single ASCII byte).
    pub delimiter: u8,
    /// Digits written after the decimal point.
    pub precision: usize,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            delimiter: b',',
            precision: 6,
        }
    }
}

impl TableFormat {
    /// Largest precision that still changes the rendered `f64`.
    pub const MAX_PRECISION: usize = 17;

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn validate(&self) -> TableResult<()> {
        if !self.delimiter.is_ascii() || matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            return Err(TableError::InvalidFormat {
                what: "delimiter must be an ASCII character other than quote or newline",
            });
        }
        if self.precision > Self::MAX_PRECISION {
            return Err(TableError::InvalidFormat {
                what: "precision must be at most 17",
            });
        }
        Ok(())
    }
}

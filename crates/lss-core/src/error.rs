use core::fmt;
use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Shape error: {what}")]
    Shape { what: &'static str },

    #[error("Shape error: row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Dimension mismatch in {op}: left is {lhs}, right is {rhs}")]
    DimensionMismatch {
        op: &'static str,
        lhs: Dims,
        rhs: Dims,
    },
}

/// Matrix shape as carried by errors, displayed as `rowsxcols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl From<(usize, usize)> for Dims {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_operation_and_shapes() {
        let err = CoreError::DimensionMismatch {
            op: "multiply",
            lhs: (2, 3).into(),
            rhs: (2, 1).into(),
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch in multiply: left is 2x3, right is 2x1"
        );
    }
}

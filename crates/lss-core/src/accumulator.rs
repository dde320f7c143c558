//! Column-growing trajectory buffer.

use crate::error::{CoreError, CoreResult};
use crate::matrix::Matrix;
use crate::numeric::Real;

/// Growable buffer with a fixed row count that gains one column per append.
///
/// Each appended column is a snapshot of a vector at one time step. Columns
/// are stored contiguously, so [`Accumulator::finalize`] hands them out as the
/// rows of a time-major matrix without copying.
#[derive(Clone, Debug)]
pub struct Accumulator {
    rows: usize,
    cols: usize,
    columns: Vec<Real>,
}

impl Accumulator {
    /// Empty accumulator (`rows` x 0).
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            cols: 0,
            columns: Vec::new(),
        }
    }

    /// Empty accumulator with room for `cols` columns.
    pub fn with_capacity(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols: 0,
            columns: Vec::with_capacity(rows * cols),
        }
    }

    /// Accumulator whose first column(s) are a copy of `seed`.
    pub fn seeded(seed: &Matrix) -> Self {
        let mut acc = Self::new(seed.rows());
        for j in 0..seed.cols() {
            acc.push_unchecked(&seed.col(j));
        }
        acc
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns appended so far.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Append `column` as the new rightmost column.
    ///
    /// `column` must be `rows` x 1. Earlier columns are never touched.
    pub fn append_column(&mut self, column: &Matrix) -> CoreResult<()> {
        if column.rows() != self.rows || column.cols() != 1 {
            return Err(CoreError::DimensionMismatch {
                op: "append_column",
                lhs: (self.rows, self.cols).into(),
                rhs: column.shape().into(),
            });
        }
        self.push_unchecked(column);
        Ok(())
    }

    fn push_unchecked(&mut self, column: &Matrix) {
        self.columns.extend_from_slice(column.as_slice());
        self.cols += 1;
    }

    /// Current contents in accumulation layout (`rows` x `cols`).
    pub fn to_matrix(&self) -> Matrix {
        Matrix::from_row_major(self.cols, self.rows, self.columns.clone()).transpose()
    }

    /// Consume the buffer and return it transposed: one row per appended
    /// column (`cols` x `rows`, time-major).
    pub fn finalize(self) -> Matrix {
        Matrix::from_row_major(self.cols, self.rows, self.columns)
    }
}

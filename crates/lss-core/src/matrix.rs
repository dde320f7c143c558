//! Dense row-major matrix.

use core::fmt;
use core::ops::Index;

use crate::error::{CoreError, CoreResult};
use crate::numeric::{Real, Tolerances, nearly_equal};

/// Fixed-shape two-dimensional container of real numbers.
///
/// Matrices are values: `add`, `multiply` and `transpose` return new matrices
/// and leave both operands untouched. Column-by-column growth goes through
/// [`crate::Accumulator`] instead.
///
/// Row and column extraction use unchecked-index semantics: an index outside
/// the matrix is a programming error and panics.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Real>,
}

impl Matrix {
    /// All-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build a matrix from a sequence of equally long rows.
    ///
    /// Fails with [`CoreError::Shape`] when there are no rows and with
    /// [`CoreError::RaggedRow`] when a row's length differs from the first.
    pub fn from_rows<R: AsRef<[Real]>>(rows: &[R]) -> CoreResult<Self> {
        let first = rows.first().ok_or(CoreError::Shape {
            what: "matrix must have at least one row",
        })?;
        let cols = first.as_ref().len();

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(CoreError::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Column vector (n x 1) holding `values`.
    pub fn from_column(values: &[Real]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    /// Wrap row-major storage. `data.len()` must equal `rows * cols`.
    pub(crate) fn from_row_major(rows: usize, cols: usize, data: Vec<Real>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major view of every element.
    pub fn as_slice(&self) -> &[Real] {
        &self.data
    }

    pub fn get(&self, i: usize, j: usize) -> Real {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[i * self.cols + j]
    }

    /// Borrow row `i` as a slice.
    pub fn row_slice(&self, i: usize) -> &[Real] {
        assert!(
            i < self.rows,
            "row {i} out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Real]> + '_ {
        (0..self.rows).map(move |i| self.row_slice(i))
    }

    /// Row `i` as a new 1 x cols matrix.
    pub fn row(&self, i: usize) -> Matrix {
        Self {
            rows: 1,
            cols: self.cols,
            data: self.row_slice(i).to_vec(),
        }
    }

    /// Column `j` as a new rows x 1 matrix.
    pub fn col(&self, j: usize) -> Matrix {
        assert!(
            j < self.cols,
            "column {j} out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        let data = (0..self.rows)
            .map(|i| self.data[i * self.cols + j])
            .collect();
        Self {
            rows: self.rows,
            cols: 1,
            data,
        }
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Element-wise sum. Both operands must have the same shape.
    pub fn add(&self, other: &Matrix) -> CoreResult<Matrix> {
        if self.shape() != other.shape() {
            return Err(self.mismatch("add", other));
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Matrix product `self * other`.
    ///
    /// Each entry is a running sum over `k` in ascending order,
    /// `result[i][j] = sum_k self[i][k] * other[k][j]`, so results are
    /// reproducible bit for bit across runs.
    pub fn multiply(&self, other: &Matrix) -> CoreResult<Matrix> {
        if self.cols != other.rows {
            return Err(self.mismatch("multiply", other));
        }

        let mut data = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            let lhs_row = &self.data[i * self.cols..(i + 1) * self.cols];
            for j in 0..other.cols {
                let mut sum = 0.0;
                for (k, a) in lhs_row.iter().enumerate() {
                    sum += a * other.data[k * other.cols + j];
                }
                data.push(sum);
            }
        }

        Ok(Self {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    /// Same shape and every element pair within `tol`.
    pub fn approx_eq(&self, other: &Matrix, tol: Tolerances) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| nearly_equal(*a, *b, tol))
    }

    fn mismatch(&self, op: &'static str, other: &Matrix) -> CoreError {
        CoreError::DimensionMismatch {
            op,
            lhs: self.shape().into(),
            rhs: other.shape().into(),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Real;

    fn index(&self, (i, j): (usize, usize)) -> &Real {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:.6}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[Real]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn from_rows_rejects_empty() {
        let rows: [&[Real]; 0] = [];
        let err = Matrix::from_rows(&rows).unwrap_err();
        assert!(matches!(err, CoreError::Shape { .. }));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]]).unwrap_err();
        assert_eq!(
            err,
            CoreError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn row_and_col_extraction() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);

        let r = a.row(1);
        assert_eq!(r.shape(), (1, 3));
        assert_eq!(r.as_slice(), &[4.0, 5.0, 6.0]);

        let c = a.col(2);
        assert_eq!(c.shape(), (2, 1));
        assert_eq!(c.as_slice(), &[3.0, 6.0]);
    }

    #[test]
    fn get_matches_index() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(a.get(0, 2), 3.0);
        assert_eq!(a.get(1, 0), 4.0);
        assert_eq!(a.get(1, 1), a[(1, 1)]);
    }

    #[test]
    #[should_panic]
    fn get_out_of_range_panics() {
        let a = m(&[&[1.0, 2.0]]);
        let _ = a.get(0, 2);
    }

    #[test]
    #[should_panic]
    fn row_out_of_range_panics() {
        let a = m(&[&[1.0, 2.0]]);
        let _ = a.row(1);
    }

    #[test]
    #[should_panic]
    fn col_out_of_range_panics() {
        let a = m(&[&[1.0, 2.0]]);
        let _ = a.col(2);
    }

    #[test]
    fn transpose_swaps_shape_and_entries() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t[(0, 1)], 4.0);
        assert_eq!(t[(2, 0)], 3.0);
        assert_eq!(a.shape(), (2, 3), "transpose must not touch the receiver");
    }

    #[test]
    fn multiply_known_product() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        let b = m(&[&[7.0, 8.0, 9.0], &[10.0, 11.0, 12.0]]);
        let p = a.multiply(&b).unwrap();
        assert_eq!(p.shape(), (3, 3));
        assert_eq!(
            p,
            m(&[
                &[27.0, 30.0, 33.0],
                &[61.0, 68.0, 75.0],
                &[95.0, 106.0, 117.0]
            ])
        );
    }

    #[test]
    fn multiply_mismatch_leaves_operands_untouched() {
        let a = m(&[&[1.0, 2.0, 3.0]]);
        let b = m(&[&[1.0], &[2.0]]);
        let (a0, b0) = (a.clone(), b.clone());

        let err = a.multiply(&b).unwrap_err();
        assert_eq!(
            err,
            CoreError::DimensionMismatch {
                op: "multiply",
                lhs: (1, 3).into(),
                rhs: (2, 1).into(),
            }
        );
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn add_mismatch() {
        let a = m(&[&[1.0, 2.0]]);
        let b = m(&[&[1.0], &[2.0]]);
        let err = a.add(&b).unwrap_err();
        assert!(matches!(err, CoreError::DimensionMismatch { op: "add", .. }));
    }

    #[test]
    fn add_elementwise() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[0.5, -2.0], &[1.0, 0.0]]);
        assert_eq!(a.add(&b).unwrap(), m(&[&[1.5, 0.0], &[4.0, 4.0]]));
    }

    #[test]
    fn zero_width_rows_are_consistent() {
        let a = Matrix::zeros(3, 0);
        assert_eq!(a.iter_rows().count(), 3);
        assert_eq!(a.transpose().shape(), (0, 3));
    }

    #[test]
    fn display_uses_fixed_point() {
        let a = m(&[&[1.0, -0.5], &[2.25, 3.0]]);
        assert_eq!(
            a.to_string(),
            "[1.000000 -0.500000]\n[2.250000 3.000000]\n"
        );
    }
}

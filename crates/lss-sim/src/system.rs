//! Validated model built once at startup.

use lss_core::Matrix;

use crate::error::{SimError, SimResult};
use crate::model::StateSpaceModel;
use crate::sim::{Trajectories, simulate};

/// The four model matrices and the initial state.
///
/// Shapes are checked once in [`System::new`]; the matrices are read-only
/// afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct System {
    a: Matrix,
    b: Matrix,
    c: Matrix,
    d: Matrix,
    x0: Matrix,
}

impl System {
    pub fn new(a: Matrix, b: Matrix, c: Matrix, d: Matrix, x0: Matrix) -> SimResult<Self> {
        let n = a.rows();
        check(&a, "A", a.cols() == n, "must be square")?;
        check(&b, "B", b.rows() == n, "must have as many rows as A")?;
        check(&c, "C", c.cols() == n, "must have as many columns as A")?;
        check(&d, "D", d.rows() == c.rows(), "must have as many rows as C")?;
        check(&d, "D", d.cols() == b.cols(), "must have as many columns as B")?;
        check(
            &x0,
            "x0",
            x0.rows() == n && x0.cols() == 1,
            "must be a single column with as many rows as A",
        )?;

        Ok(Self { a, b, c, d, x0 })
    }

    /// Run the recurrence over `inputs` (steps x m).
    pub fn simulate(&self, inputs: &Matrix) -> SimResult<Trajectories> {
        simulate(self, inputs)
    }
}

fn check(
    matrix: &Matrix,
    name: &'static str,
    ok: bool,
    requirement: &'static str,
) -> SimResult<()> {
    if ok {
        Ok(())
    } else {
        Err(SimError::InvalidModel {
            matrix: name,
            found: matrix.shape().into(),
            requirement,
        })
    }
}

impl StateSpaceModel for System {
    fn mat_a(&self) -> &Matrix {
        &self.a
    }

    fn mat_b(&self) -> &Matrix {
        &self.b
    }

    fn mat_c(&self) -> &Matrix {
        &self.c
    }

    fn mat_d(&self) -> &Matrix {
        &self.d
    }

    fn initial_state(&self) -> &Matrix {
        &self.x0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones(rows: usize, cols: usize) -> Matrix {
        Matrix::from_rows(vec![vec![1.0; cols]; rows].as_slice()).unwrap()
    }

    #[test]
    fn accepts_consistent_shapes() {
        let sys = System::new(ones(3, 3), ones(3, 2), ones(1, 3), ones(1, 2), ones(3, 1)).unwrap();
        assert_eq!(sys.state_dim(), 3);
        assert_eq!(sys.input_dim(), 2);
        assert_eq!(sys.output_dim(), 1);
    }

    #[test]
    fn rejects_non_square_a() {
        let err = System::new(ones(3, 2), ones(3, 1), ones(1, 3), ones(1, 1), ones(3, 1))
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidModel { matrix: "A", .. }));
    }

    #[test]
    fn rejects_d_with_wrong_width() {
        let err = System::new(ones(2, 2), ones(2, 1), ones(1, 2), ones(1, 3), ones(2, 1))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid model: D is 1x3, must have as many columns as B"
        );
    }

    #[test]
    fn rejects_row_vector_initial_state() {
        let err = System::new(ones(2, 2), ones(2, 1), ones(1, 2), ones(1, 1), ones(1, 2))
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidModel { matrix: "x0", .. }));
    }
}

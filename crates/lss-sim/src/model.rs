//! StateSpaceModel trait for pluggable linear systems.

use lss_core::Matrix;

/// Discrete-time linear model `x[k+1] = A x[k] + B u[k]`, `y = C x + D u`.
///
/// Shapes: A is n x n, B is n x m, C is p x n, D is p x m and the initial
/// state is n x 1.
pub trait StateSpaceModel {
    fn mat_a(&self) -> &Matrix;
    fn mat_b(&self) -> &Matrix;
    fn mat_c(&self) -> &Matrix;
    fn mat_d(&self) -> &Matrix;

    /// Initial state x0 (n x 1).
    fn initial_state(&self) -> &Matrix;

    /// n
    fn state_dim(&self) -> usize {
        self.mat_a().rows()
    }

    /// m
    fn input_dim(&self) -> usize {
        self.mat_b().cols()
    }

    /// p
    fn output_dim(&self) -> usize {
        self.mat_c().rows()
    }
}

//! Content-based hashing for run IDs.

use lss_core::Matrix;
use lss_sim::StateSpaceModel;
use sha2::{Digest, Sha256};

/// SHA-256 over the model matrices, the input sequence and the solver
/// version. Identical inputs always give the same id.
pub fn compute_run_id<M: StateSpaceModel + ?Sized>(
    model: &M,
    inputs: &Matrix,
    solver_version: &str,
) -> String {
    let mut hasher = Sha256::new();

    for matrix in [
        model.mat_a(),
        model.mat_b(),
        model.mat_c(),
        model.mat_d(),
        model.initial_state(),
        inputs,
    ] {
        hash_matrix(&mut hasher, matrix);
    }
    hasher.update(solver_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

fn hash_matrix(hasher: &mut Sha256, matrix: &Matrix) {
    hasher.update((matrix.rows() as u64).to_le_bytes());
    hasher.update((matrix.cols() as u64).to_le_bytes());
    for value in matrix.as_slice() {
        hasher.update(value.to_le_bytes());
    }
}

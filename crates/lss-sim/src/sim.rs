//! Fixed-step simulation runner.

use lss_core::{Accumulator, Matrix};
use tracing::{debug, trace};

use crate::error::SimResult;
use crate::model::StateSpaceModel;

/// Progress report emitted after each completed step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimProgress {
    /// Steps completed so far (1-based).
    pub step: usize,
    /// Total steps in the run.
    pub steps: usize,
}

impl SimProgress {
    pub fn fraction_complete(&self) -> f64 {
        if self.steps == 0 {
            1.0
        } else {
            self.step as f64 / self.steps as f64
        }
    }
}

/// Time-major simulation result.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectories {
    /// (steps + 1) x n; row 0 is the initial state.
    pub states: Matrix,
    /// steps x p; row k is the output computed at step k.
    pub outputs: Matrix,
}

impl Trajectories {
    pub fn steps(&self) -> usize {
        self.outputs.rows()
    }
}

/// Run the model over `inputs`, one row per time step.
pub fn simulate<M: StateSpaceModel + ?Sized>(model: &M, inputs: &Matrix) -> SimResult<Trajectories> {
    simulate_with_progress(model, inputs, None)
}

/// Run the model over `inputs` and report progress after every step.
///
/// For each row `u` of `inputs`, in order:
///
/// ```text
/// x <- A x + B u
/// y  = C x + D u
/// ```
///
/// The output at step k is computed from the already-updated state
/// x[k+1]. The state trajectory therefore has one more row than the output
/// trajectory: it starts with x0, the outputs do not.
///
/// Any shape mismatch aborts the whole run; no partial trajectory is returned.
pub fn simulate_with_progress<M: StateSpaceModel + ?Sized>(
    model: &M,
    inputs: &Matrix,
    mut progress: Option<&mut dyn FnMut(SimProgress)>,
) -> SimResult<Trajectories> {
    let steps = inputs.rows();
    debug!(
        states = model.state_dim(),
        inputs = model.input_dim(),
        outputs = model.output_dim(),
        steps,
        "starting simulation"
    );

    let mut x = model.initial_state().clone();
    let mut x_results = Accumulator::seeded(&x);
    let mut y_results = Accumulator::with_capacity(model.output_dim(), steps);

    for i in 0..steps {
        let u = inputs.row(i).transpose();

        x = model.mat_a().multiply(&x)?.add(&model.mat_b().multiply(&u)?)?;
        x_results.append_column(&x)?;

        let y = model.mat_c().multiply(&x)?.add(&model.mat_d().multiply(&u)?)?;
        y_results.append_column(&y)?;

        trace!(step = i, "advanced state");
        if let Some(cb) = progress.as_deref_mut() {
            cb(SimProgress { step: i + 1, steps });
        }
    }

    debug!(steps, "simulation finished");
    Ok(Trajectories {
        states: x_results.finalize(),
        outputs: y_results.finalize(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::System;

    fn scalar(v: f64) -> Matrix {
        Matrix::from_rows(&[[v]]).unwrap()
    }

    #[test]
    fn progress_fraction() {
        let p = SimProgress { step: 1, steps: 4 };
        assert_eq!(p.fraction_complete(), 0.25);
        assert_eq!(SimProgress { step: 0, steps: 0 }.fraction_complete(), 1.0);
    }

    #[test]
    fn zero_steps_returns_initial_state_only() {
        let sys = System::new(scalar(1.0), scalar(1.0), scalar(1.0), scalar(0.0), scalar(5.0))
            .unwrap();
        let traj = simulate(&sys, &Matrix::zeros(0, 1)).unwrap();
        assert_eq!(traj.states.shape(), (1, 1));
        assert_eq!(traj.states[(0, 0)], 5.0);
        assert_eq!(traj.outputs.shape(), (0, 1));
        assert_eq!(traj.steps(), 0);
    }

    #[test]
    fn reports_every_step() {
        let sys = System::new(scalar(0.5), scalar(1.0), scalar(2.0), scalar(1.0), scalar(0.0))
            .unwrap();
        let inputs = Matrix::from_column(&[1.0, 1.0, 1.0]);

        let mut seen = Vec::new();
        let mut cb = |p: SimProgress| seen.push(p.step);
        simulate_with_progress(&sys, &inputs, Some(&mut cb)).unwrap();
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn input_width_mismatch_aborts() {
        let sys = System::new(scalar(1.0), scalar(1.0), scalar(1.0), scalar(0.0), scalar(0.0))
            .unwrap();
        let inputs = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
        let err = simulate(&sys, &inputs).unwrap_err();
        assert!(matches!(
            err,
            crate::SimError::Core(lss_core::CoreError::DimensionMismatch { op: "multiply", .. })
        ));
    }
}

//! Query helpers for inspecting completed runs.

use lss_core::Real;
use lss_results::RunManifest;
use lss_sim::Trajectories;

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub run_id: String,
    pub timestamp: String,
    pub steps: usize,
    pub state_dim: usize,
    pub input_dim: usize,
    pub output_dim: usize,
    pub final_state: Vec<Real>,
    /// `None` for a zero-step run.
    pub final_output: Option<Vec<Real>>,
}

pub fn get_run_summary(manifest: &RunManifest, trajectories: &Trajectories) -> RunSummary {
    let last_row = |m: &lss_core::Matrix| {
        m.rows()
            .checked_sub(1)
            .map(|i| m.row_slice(i).to_vec())
    };

    RunSummary {
        run_id: manifest.run_id.clone(),
        timestamp: manifest.timestamp.clone(),
        steps: manifest.steps,
        state_dim: manifest.state_dim,
        input_dim: manifest.input_dim,
        output_dim: manifest.output_dim,
        final_state: last_row(&trajectories.states).unwrap_or_default(),
        final_output: last_row(&trajectories.outputs),
    }
}

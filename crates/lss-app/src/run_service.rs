//! Run execution service.

use std::path::{Path, PathBuf};
use std::time::Instant;

use lss_project::RunConfig;
use lss_results::{RunManifest, RunStore, compute_run_id};
use lss_sim::{SimProgress, StateSpaceModel, Trajectories, simulate_with_progress};
use tracing::info;

use crate::error::AppResult;
use crate::model_service::{load_inputs, load_system, table_format};
use crate::progress::{RunProgressEvent, RunStage};

/// Version recorded in run manifests and mixed into run ids.
pub const SOLVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub config: &'a RunConfig,
}

/// Concise timing and execution summary for a run.
#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub load_time_s: f64,
    pub simulate_time_s: f64,
    pub save_time_s: f64,
    pub total_time_s: f64,
    pub steps: usize,
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub manifest: RunManifest,
    pub output_dir: PathBuf,
    pub timing: RunTimingSummary,
}

/// Dimensions found by [`validate_run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSummary {
    pub state_dim: usize,
    pub input_dim: usize,
    pub output_dim: usize,
    pub steps: usize,
}

fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>,
    stage: RunStage,
    started: Instant,
    message: Option<String>,
    sim: Option<SimProgress>,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(RunProgressEvent {
            stage,
            elapsed_wall_s: started.elapsed().as_secs_f64(),
            message,
            sim,
        });
    }
}

/// Load, simulate and save.
pub fn run(request: &RunRequest) -> AppResult<RunResponse> {
    run_with_progress(request, None)
}

/// Load, simulate and save, streaming progress events.
///
/// Nothing is written until the simulation has completed.
pub fn run_with_progress(
    request: &RunRequest,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<RunResponse> {
    let started = Instant::now();
    let config = request.config;
    let format = table_format(&config.table)?;

    emit_progress(&mut progress_cb, RunStage::LoadingModel, started, None, None);
    let system = load_system(config)?;

    emit_progress(&mut progress_cb, RunStage::LoadingInputs, started, None, None);
    let inputs = load_inputs(config, &system)?;
    let load_time_s = started.elapsed().as_secs_f64();

    let sim_started = Instant::now();
    emit_progress(
        &mut progress_cb,
        RunStage::Simulating,
        started,
        Some(format!("{} steps", inputs.rows())),
        None,
    );
    let trajectories = {
        let mut on_step = |p: SimProgress| {
            emit_progress(&mut progress_cb, RunStage::Simulating, started, None, Some(p));
        };
        simulate_with_progress(&system, &inputs, Some(&mut on_step))?
    };
    let simulate_time_s = sim_started.elapsed().as_secs_f64();

    let save_started = Instant::now();
    emit_progress(&mut progress_cb, RunStage::SavingResults, started, None, None);
    let run_id = compute_run_id(&system, &inputs, SOLVER_VERSION);
    let manifest = RunManifest::new(
        run_id.clone(),
        &system,
        trajectories.steps(),
        &format,
        SOLVER_VERSION,
    );
    let store = RunStore::new(config.output_dir.clone())?;
    store.save_run(&manifest, &trajectories)?;
    let save_time_s = save_started.elapsed().as_secs_f64();

    let timing = RunTimingSummary {
        load_time_s,
        simulate_time_s,
        save_time_s,
        total_time_s: started.elapsed().as_secs_f64(),
        steps: trajectories.steps(),
    };
    info!(
        run_id = %run_id,
        steps = timing.steps,
        total_time_s = timing.total_time_s,
        "run completed"
    );
    emit_progress(&mut progress_cb, RunStage::Completed, started, None, None);

    Ok(RunResponse {
        run_id,
        manifest,
        output_dir: config.output_dir.clone(),
        timing,
    })
}

/// Load model and inputs and check every shape without simulating.
pub fn validate_run(config: &RunConfig) -> AppResult<ValidationSummary> {
    let system = load_system(config)?;
    let inputs = load_inputs(config, &system)?;
    Ok(ValidationSummary {
        state_dim: system.state_dim(),
        input_dim: system.input_dim(),
        output_dim: system.output_dim(),
        steps: inputs.rows(),
    })
}

/// Load a completed run from its output directory.
pub fn load_run(output_dir: &Path) -> AppResult<(RunManifest, Trajectories)> {
    let store = RunStore::open(output_dir.to_path_buf());
    Ok(store.load_run()?)
}

use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use lss_app::{AppResult, RunProgressEvent, RunRequest, RunStage, get_run_summary, run_service};
use lss_project::RunConfig;
use tracing::debug;

mod logging;

#[derive(Parser)]
#[command(name = "lss")]
#[command(about = "Discrete-time linear state-space simulator", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a model over an input sequence and save the trajectories
    Run {
        #[command(flatten)]
        source: ModelSource,
        /// Output directory (overrides the config file)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Load model and inputs and check dimensions without simulating
    Validate {
        #[command(flatten)]
        source: ModelSource,
    },
    /// Show details of a completed run
    ShowRun {
        /// Output directory of the run
        dir: PathBuf,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Run { .. } => "run",
            Commands::Validate { .. } => "validate",
            Commands::ShowRun { .. } => "show-run",
        }
    }
}

#[derive(Args)]
struct ModelSource {
    /// Path to a run configuration YAML file
    #[arg(long, conflicts_with = "model_dir")]
    config: Option<PathBuf>,
    /// Directory holding A.csv, B.csv, C.csv, D.csv, x0.csv and u_ident.csv
    #[arg(long)]
    model_dir: Option<PathBuf>,
}

const DEFAULT_MODEL_DIR: &str = "model";
const DEFAULT_OUTPUT_DIR: &str = "results";

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = dispatch(cli.command) {
        debug!(error = ?e, "command failed");
        clear_progress_line();
        eprint!("{}", error_report(&e));
        process::exit(1);
    }
}

/// `Error: <message>` followed by one `caused by:` line per source.
fn error_report(e: &dyn Error) -> String {
    let mut report = format!("Error: {e}\n");
    let mut source = e.source();
    while let Some(cause) = source {
        report.push_str(&format!("  caused by: {cause}\n"));
        source = cause.source();
    }
    report
}

fn dispatch(command: Commands) -> AppResult<()> {
    debug!(command = command.name(), "dispatching");
    match command {
        Commands::Run { source, output_dir } => cmd_run(&source, output_dir),
        Commands::Validate { source } => cmd_validate(&source),
        Commands::ShowRun { dir } => cmd_show_run(&dir),
    }
}

fn load_config(source: &ModelSource, output_dir: Option<PathBuf>) -> AppResult<RunConfig> {
    let mut config = match &source.config {
        Some(path) => lss_project::load_yaml(path)?,
        None => {
            let model_dir = source
                .model_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_DIR));
            RunConfig::from_model_dir(&model_dir, Path::new(DEFAULT_OUTPUT_DIR))
        }
    };
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }
    Ok(config)
}

fn cmd_run(source: &ModelSource, output_dir: Option<PathBuf>) -> AppResult<()> {
    let config = load_config(source, output_dir)?;
    println!("Running simulation into: {}", config.output_dir.display());

    let request = RunRequest { config: &config };

    let mut last_emit = Instant::now();
    let mut last_stage: Option<RunStage> = None;
    let response = run_service::run_with_progress(
        &request,
        Some(&mut |event: RunProgressEvent| {
            let emit_now =
                last_stage != Some(event.stage) || last_emit.elapsed().as_millis() >= 100;
            if emit_now {
                render_cli_progress(&event);
                last_stage = Some(event.stage);
                last_emit = Instant::now();
            }
        }),
    )?;
    clear_progress_line();

    println!("✓ Simulation completed: {}", response.run_id);
    println!(
        "  States:  {} x {}",
        response.timing.steps + 1,
        response.manifest.state_dim
    );
    println!(
        "  Outputs: {} x {}",
        response.timing.steps, response.manifest.output_dim
    );
    print_timing_summary(&response.timing);

    Ok(())
}

fn cmd_validate(source: &ModelSource) -> AppResult<()> {
    let config = load_config(source, None)?;
    println!("Validating model: {}", config.model.a.display());

    let summary = run_service::validate_run(&config)?;
    println!("✓ Model is valid");
    println!("  States:  {}", summary.state_dim);
    println!("  Inputs:  {}", summary.input_dim);
    println!("  Outputs: {}", summary.output_dim);
    println!("  Steps:   {}", summary.steps);
    Ok(())
}

fn cmd_show_run(dir: &Path) -> AppResult<()> {
    println!("Loading run: {}", dir.display());

    let (manifest, trajectories) = run_service::load_run(dir)?;
    let summary = get_run_summary(&manifest, &trajectories);

    println!("\nRun Summary:");
    println!("  Run id:    {}", summary.run_id);
    println!("  Timestamp: {}", summary.timestamp);
    println!("  Solver:    {}", manifest.solver_version);
    println!("  Steps:     {}", summary.steps);
    println!(
        "  Dimensions: {} states, {} inputs, {} outputs",
        summary.state_dim, summary.input_dim, summary.output_dim
    );
    println!(
        "  States table:  {} ({} x {})",
        manifest.states_file,
        trajectories.states.rows(),
        trajectories.states.cols()
    );
    println!(
        "  Outputs table: {} ({} x {})",
        manifest.outputs_file,
        trajectories.outputs.rows(),
        trajectories.outputs.cols()
    );
    println!("  Final state:  {}", format_vector(&summary.final_state));
    match &summary.final_output {
        Some(y) => println!("  Final output: {}", format_vector(y)),
        None => println!("  Final output: (none)"),
    }

    Ok(())
}

fn format_vector(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:.6}")).collect();
    format!("[{}]", parts.join(", "))
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(100));
    let _ = io::stdout().flush();
}

fn render_cli_progress(event: &RunProgressEvent) {
    match (&event.stage, &event.sim) {
        (RunStage::Simulating, Some(p)) => {
            let fraction = p.fraction_complete();
            let width = 28usize;
            let filled = ((fraction * width as f64).round() as usize).min(width);
            let bar = format!(
                "{}{}",
                "#".repeat(filled),
                "-".repeat(width.saturating_sub(filled))
            );
            print!(
                "\r[{}] {:>6.2}%  step={}/{}  elapsed={:.1}s",
                bar,
                fraction * 100.0,
                p.step,
                p.steps,
                event.elapsed_wall_s
            );
        }
        _ => {
            let spinner = ['|', '/', '-', '\\'];
            let spin_idx = ((event.elapsed_wall_s * 10.0) as usize) % spinner.len();
            let mut line = format!(
                "\r{} {}  elapsed={:.2}s",
                spinner[spin_idx],
                event.stage.label(),
                event.elapsed_wall_s
            );
            if let Some(msg) = &event.message {
                line.push_str(&format!("  {}", msg));
            }
            print!("{}", line);
        }
    }
    let _ = io::stdout().flush();
}

fn print_timing_summary(timing: &lss_app::RunTimingSummary) {
    let total = timing.total_time_s.max(1.0e-12);
    let load_pct = 100.0 * timing.load_time_s / total;
    let simulate_pct = 100.0 * timing.simulate_time_s / total;
    let save_pct = 100.0 * timing.save_time_s / total;

    println!("\nTiming summary:");
    println!("  Load:     {:.3}s ({:.1}%)", timing.load_time_s, load_pct);
    println!(
        "  Simulate: {:.3}s ({:.1}%)",
        timing.simulate_time_s, simulate_pct
    );
    println!("  Save:     {:.3}s ({:.1}%)", timing.save_time_s, save_pct);
    println!("  Total:    {:.3}s", timing.total_time_s);
}

//! Output directory storage API.

use std::fs;
use std::path::{Path, PathBuf};

use lss_core::Matrix;
use lss_sim::Trajectories;
use lss_table::{load_table_with, save_table_with};
use tracing::debug;

use crate::types::RunManifest;
use crate::{ResultsError, ResultsResult};

pub const STATES_FILE: &str = "x_results.csv";
pub const OUTPUTS_FILE: &str = "y_results.csv";
pub const MANIFEST_FILE: &str = "manifest.json";

/// One output directory holding the trajectories of a single run.
#[derive(Clone, Debug)]
pub struct RunStore {
    dir: PathBuf,
}

impl RunStore {
    /// Open `dir`, creating it if needed.
    pub fn new(dir: PathBuf) -> ResultsResult<Self> {
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    /// Open an existing directory without creating anything.
    pub fn open(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn manifest_path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE)
    }

    /// A run is complete once its manifest exists.
    pub fn is_complete(&self) -> bool {
        self.manifest_path().exists()
    }

    /// Write both trajectories, then the manifest.
    ///
    /// Any existing manifest is removed first, so an interrupted save leaves
    /// the directory marked incomplete.
    pub fn save_run(&self, manifest: &RunManifest, trajectories: &Trajectories) -> ResultsResult<()> {
        let manifest_path = self.manifest_path();
        if manifest_path.exists() {
            fs::remove_file(&manifest_path)?;
        }

        let format = manifest.table_format()?;
        save_table_with(
            &trajectories.states,
            &self.dir.join(&manifest.states_file),
            &format,
        )?;
        save_table_with(
            &trajectories.outputs,
            &self.dir.join(&manifest.outputs_file),
            &format,
        )?;

        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(&manifest_path, manifest_json)?;
        debug!(dir = %self.dir.display(), run_id = %manifest.run_id, "saved run");

        Ok(())
    }

    pub fn load_manifest(&self) -> ResultsResult<RunManifest> {
        let manifest_path = self.manifest_path();

        if !manifest_path.exists() {
            return Err(ResultsError::RunNotFound {
                dir: self.dir.clone(),
            });
        }

        let content = fs::read_to_string(manifest_path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    /// Load a completed run and check the tables against its manifest.
    pub fn load_run(&self) -> ResultsResult<(RunManifest, Trajectories)> {
        let manifest = self.load_manifest()?;
        let format = manifest.table_format()?;

        let states = load_table_with(&self.dir.join(&manifest.states_file), &format)?;
        // A zero-step run writes an empty outputs table, which the loader rejects.
        let outputs = if manifest.steps == 0 {
            Matrix::zeros(0, manifest.output_dim)
        } else {
            load_table_with(&self.dir.join(&manifest.outputs_file), &format)?
        };

        expect_shape(
            "states",
            &states,
            (manifest.steps + 1, manifest.state_dim),
        )?;
        expect_shape("outputs", &outputs, (manifest.steps, manifest.output_dim))?;

        Ok((manifest, Trajectories { states, outputs }))
    }
}

fn expect_shape(name: &str, matrix: &Matrix, expected: (usize, usize)) -> ResultsResult<()> {
    if matrix.shape() == expected {
        Ok(())
    } else {
        Err(ResultsError::Corrupt {
            what: format!(
                "{name} table is {}x{}, expected {}x{}",
                matrix.rows(),
                matrix.cols(),
                expected.0,
                expected.1
            ),
        })
    }
}

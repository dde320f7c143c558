//! Result data types.

use lss_sim::StateSpaceModel;
use lss_table::TableFormat;
use serde::{Deserialize, Serialize};

use crate::{ResultsError, ResultsResult};

pub type RunId = String;

/// Written last into an output directory; its presence marks the run as
/// complete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub run_id: RunId,
    pub timestamp: String,
    pub solver_version: String,
    pub steps: usize,
    pub state_dim: usize,
    pub input_dim: usize,
    pub output_dim: usize,
    pub states_file: String,
    pub outputs_file: String,
    pub delimiter: char,
    pub precision: usize,
}

impl RunManifest {
    pub fn new<M: StateSpaceModel + ?Sized>(
        run_id: RunId,
        model: &M,
        steps: usize,
        format: &TableFormat,
        solver_version: &str,
    ) -> Self {
        Self {
            run_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
            solver_version: solver_version.to_string(),
            steps,
            state_dim: model.state_dim(),
            input_dim: model.input_dim(),
            output_dim: model.output_dim(),
            states_file: crate::STATES_FILE.to_string(),
            outputs_file: crate::OUTPUTS_FILE.to_string(),
            delimiter: char::from(format.delimiter),
            precision: format.precision,
        }
    }

    /// Table layout the trajectories were written with.
    pub fn table_format(&self) -> ResultsResult<TableFormat> {
        let delimiter = u8::try_from(self.delimiter).map_err(|_| ResultsError::Corrupt {
            what: format!("delimiter {:?} is not a single byte", self.delimiter),
        })?;
        Ok(TableFormat {
            delimiter,
            precision: self.precision,
        })
    }
}

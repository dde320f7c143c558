//! Loading the model and input tables named by a run configuration.

use std::path::Path;

use lss_core::Matrix;
use lss_project::{RunConfig, TableDef};
use lss_sim::{StateSpaceModel, System};
use lss_table::{TableFormat, load_table_with};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// Convert the configured table layout into a reader/writer format.
pub fn table_format(def: &TableDef) -> AppResult<TableFormat> {
    let delimiter = u8::try_from(def.delimiter).map_err(|_| {
        AppError::TableFormat(format!("delimiter {:?} is not a single byte", def.delimiter))
    })?;
    let format = TableFormat {
        delimiter,
        precision: def.precision,
    };
    format
        .validate()
        .map_err(|e| AppError::TableFormat(e.to_string()))?;
    Ok(format)
}

fn load_matrix(name: &str, path: &Path, format: &TableFormat) -> AppResult<Matrix> {
    let matrix = load_table_with(path, format).map_err(|source| AppError::Load {
        name: name.to_string(),
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        name,
        path = %path.display(),
        rows = matrix.rows(),
        cols = matrix.cols(),
        "loaded table"
    );
    Ok(matrix)
}

/// Load A, B, C, D and x0 and check their shapes against each other.
pub fn load_system(config: &RunConfig) -> AppResult<System> {
    let format = table_format(&config.table)?;
    let [a, b, c, d, x0] = config.model.entries();
    let a = load_matrix(a.0, a.1, &format)?;
    let b = load_matrix(b.0, b.1, &format)?;
    let c = load_matrix(c.0, c.1, &format)?;
    let d = load_matrix(d.0, d.1, &format)?;
    let x0 = load_matrix(x0.0, x0.1, &format)?;

    let system = System::new(a, b, c, d, x0)?;
    info!(
        states = system.state_dim(),
        inputs = system.input_dim(),
        outputs = system.output_dim(),
        "model loaded"
    );
    Ok(system)
}

/// Load the input sequence and check it has one column per model input.
pub fn load_inputs<M: StateSpaceModel + ?Sized>(config: &RunConfig, model: &M) -> AppResult<Matrix> {
    let format = table_format(&config.table)?;
    let inputs = load_matrix("inputs", &config.inputs, &format)?;

    if inputs.cols() != model.input_dim() {
        return Err(AppError::InvalidInput(format!(
            "input sequence {} has {} columns, model has {} inputs",
            config.inputs.display(),
            inputs.cols(),
            model.input_dim()
        )));
    }
    info!(steps = inputs.rows(), "inputs loaded");
    Ok(inputs)
}

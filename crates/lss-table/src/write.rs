//! Table saving.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use lss_core::Matrix;

use crate::error::{TableError, TableResult};
use crate::format::TableFormat;

/// Save `matrix` to `path`, comma separated, six decimals.
pub fn save_table(matrix: &Matrix, path: &Path) -> TableResult<()> {
    save_table_with(matrix, path, &TableFormat::default())
}

/// Save `matrix` to `path` using `format`. Existing files are truncated.
pub fn save_table_with(matrix: &Matrix, path: &Path, format: &TableFormat) -> TableResult<()> {
    format.validate()?;
    let file = File::create(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_table(matrix, file, format)
}

/// Write one line per matrix row, values in fixed-point notation.
pub fn write_table<W: Write>(matrix: &Matrix, writer: W, format: &TableFormat) -> TableResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(format.delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    let mut record: Vec<String> = Vec::with_capacity(matrix.cols());
    for row in matrix.iter_rows() {
        record.clear();
        record.extend(row.iter().map(|v| format!("{:.*}", format.precision, v)));
        wtr.write_record(&record)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

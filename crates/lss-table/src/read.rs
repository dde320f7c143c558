//! Table loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use lss_core::{Matrix, Real};

use crate::error::{TableError, TableResult};
use crate::format::TableFormat;

/// Load a comma-separated numeric table from `path`.
pub fn load_table(path: &Path) -> TableResult<Matrix> {
    load_table_with(path, &TableFormat::default())
}

/// Load a numeric table from `path` using `format`.
pub fn load_table_with(path: &Path, format: &TableFormat) -> TableResult<Matrix> {
    format.validate()?;
    let file = File::open(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_table(file, format)
}

/// Parse a numeric table from any reader.
///
/// Blank lines are skipped and fields are trimmed before parsing. Every
/// record must have as many fields as the first one.
pub fn read_table<R: Read>(reader: R, format: &TableFormat) -> TableResult<Matrix> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(format.delimiter)
        .from_reader(reader);

    let mut rows: Vec<Vec<Real>> = Vec::new();
    let mut width = None;

    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let expected = *width.get_or_insert(record.len());
        if record.len() != expected {
            return Err(TableError::RowWidth {
                row,
                expected,
                found: record.len(),
            });
        }

        let values = record
            .iter()
            .enumerate()
            .map(|(col, field)| {
                field.parse::<Real>().map_err(|_| TableError::Parse {
                    row,
                    col,
                    value: field.to_string(),
                })
            })
            .collect::<TableResult<Vec<Real>>>()?;
        rows.push(values);
    }

    if rows.is_empty() {
        return Err(TableError::Empty);
    }
    Ok(Matrix::from_rows(rows.as_slice())?)
}

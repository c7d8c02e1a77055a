use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::table::ResultTable;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the table as CSV to `path`, replacing any existing file
///
/// # Errors
///
/// Returns `WriteError::Csv` if the file cannot be created or a record cannot
/// be written, or `WriteError::Io` if flushing the file fails.
pub fn write_csv(table: &ResultTable, path: &Path) -> Result<(), WriteError> {
    let writer = csv::Writer::from_path(path)?;
    write_records(table, writer)
}

/// Write the table as CSV to any writer
///
/// The first column is a row index with an empty header cell, followed by one
/// column per table field. Missing values are written as empty cells.
///
/// # Errors
///
/// Returns `WriteError` if serialization or the underlying writer fails.
pub fn write_table<W: Write>(table: &ResultTable, writer: W) -> Result<(), WriteError> {
    write_records(table, csv::Writer::from_writer(writer))
}

fn write_records<W: Write>(table: &ResultTable, mut wtr: csv::Writer<W>) -> Result<(), WriteError> {
    let mut header = Vec::with_capacity(table.columns().len() + 1);
    header.push(String::new());
    header.extend(table.columns().iter().cloned());
    wtr.write_record(&header)?;

    for (i, record) in table.rows().iter().enumerate() {
        let mut row = Vec::with_capacity(header.len());
        row.push(i.to_string());
        for column in table.columns() {
            row.push(
                record
                    .get(column)
                    .map(ToString::to_string)
                    .unwrap_or_default(),
            );
        }
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

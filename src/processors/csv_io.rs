//! CSV import and export of [`DataFrame`]s

use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

use crate::core::errors::{Result, TranslationError};
use crate::core::frame::DataFrame;

/// Read a CSV file whose first record is the header
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = std::fs::File::open(path).map_err(|e| TranslationError::FileError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let frame = read_csv_from(file)?;
    debug!(
        "Read {} ({} columns, {} rows)",
        path.display(),
        frame.n_columns(),
        frame.n_rows()
    );
    Ok(frame)
}

/// Read CSV data from any reader
pub fn read_csv_from<R: Read>(reader: R) -> Result<DataFrame> {
    let mut reader = csv::Reader::from_reader(reader);

    let header: Vec<String> = reader.headers()?.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(String::from).collect());
    }

    DataFrame::from_rows(header, rows)
}

/// Write `frame` to a CSV file, creating parent directories
pub fn write_csv(frame: &DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| TranslationError::FileError {
                path: parent.display().to_string(),
                message: e.to_string(),
            })?;
        }
    }

    let file = std::fs::File::create(path).map_err(|e| TranslationError::FileError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    write_csv_to(frame, file)?;
    debug!("Wrote {}", path.display());
    Ok(())
}

/// Write `frame` as CSV to any writer
pub fn write_csv_to<W: Write>(frame: &DataFrame, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(frame.column_names())?;
    for row in frame.rows() {
        writer.write_record(row)?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

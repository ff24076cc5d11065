//! Delimited text export.

use std::fs;
use std::path::Path;

use crate::error::{Result, ScoutprepError};
use crate::table::{Cell, Table};

/// Write the table as CSV with a header row and no index column,
/// creating the destination directory first.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ScoutprepError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(Cell::render))?;
    }
    writer.flush().map_err(|e| ScoutprepError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

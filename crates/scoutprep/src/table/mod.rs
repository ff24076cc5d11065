//! In-memory record table.

mod cell;

pub use cell::{Cell, format_number};

use crate::error::{Result, ScoutprepError};

/// Ordered tabular data: named columns over row-major cells.
///
/// Stages only ever append columns or drop rows; existing columns are
/// never removed or renamed past the header trim at load time.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table from headers and row-major cells.
    pub fn with_rows(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of data rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Find a column's index by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Resolve a column a stage cannot run without.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| ScoutprepError::MissingColumn(name.to_string()))
    }

    /// Capability check: verify every named column exists before a
    /// stage touches the table.
    pub fn require_columns(&self, names: &[&str]) -> Result<()> {
        for name in names {
            self.require_column(name)?;
        }
        Ok(())
    }

    /// Get a specific cell.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Overwrite a specific cell. Out-of-range indices are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        if let Some(slot) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = value;
        }
    }

    /// Append a new column filled with `fill`, returning its index.
    pub fn add_column(&mut self, name: String, fill: Cell) -> usize {
        self.headers.push(name);
        for row in &mut self.rows {
            row.push(fill.clone());
        }
        self.headers.len() - 1
    }

    /// Keep only the rows whose index passes `keep`, preserving order.
    pub fn retain_rows<F: FnMut(usize) -> bool>(&mut self, mut keep: F) {
        let mut idx = 0;
        self.rows.retain(|_| {
            let kept = keep(idx);
            idx += 1;
            kept
        });
    }
}

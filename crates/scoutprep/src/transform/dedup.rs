//! Duplicate record removal.

use chrono::NaiveDate;
use indexmap::IndexSet;

use crate::error::Result;
use crate::table::{Cell, Table};

/// Identity used for duplicate detection. Missing birth dates compare
/// equal to each other.
type DedupKey = (String, Option<NaiveDate>);

/// Drop rows repeating an earlier `(full_name, birth_date)` pair,
/// keeping the first occurrence in original order. A no-op when either
/// column is absent. Returns the number of rows removed.
pub fn apply(table: &mut Table) -> Result<usize> {
    let (Some(name_idx), Some(bd_idx)) = (
        table.column_index("full_name"),
        table.column_index("birth_date"),
    ) else {
        return Ok(0);
    };

    let mut seen: IndexSet<DedupKey> = IndexSet::with_capacity(table.row_count());
    let mut keep = Vec::with_capacity(table.row_count());

    for row in 0..table.row_count() {
        let name = table
            .get(row, name_idx)
            .map(Cell::render)
            .unwrap_or_default();
        let date = table.get(row, bd_idx).and_then(Cell::as_date);
        keep.push(seen.insert((name, date)));
    }

    let before = table.row_count();
    table.retain_rows(|row| keep[row]);
    Ok(before - table.row_count())
}

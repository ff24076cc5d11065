//! Advisory data-quality flags.

use serde::Serialize;

use crate::error::Result;
use crate::table::{Cell, Table};

/// How many rows each flag marked true.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct FlagCounts {
    pub missing_birth_date: usize,
    pub overall_gt_potential: usize,
    pub non_positive_value: usize,
    pub non_positive_wage: usize,
}

fn number_at(table: &Table, row: usize, col: Option<usize>) -> Option<f64> {
    col.and_then(|c| table.get(row, c)).and_then(Cell::as_number)
}

/// Append the four flag columns.
///
/// Flags are annotations, not filters: no row is dropped for any flag
/// being true, and a flag stays false whenever its inputs are missing.
pub fn apply(table: &mut Table) -> Result<FlagCounts> {
    let bd = table.column_index("birth_date");
    let overall = table.column_index("overall_rating");
    let potential = table.column_index("potential");
    let value = table.column_index("value_euro");
    let wage = table.column_index("wage_euro");

    let f_bd = table.add_column("flag_missing_birth_date".to_string(), Cell::Bool(false));
    let f_op = table.add_column("flag_overall_gt_potential".to_string(), Cell::Bool(false));
    let f_val = table.add_column("flag_non_positive_value".to_string(), Cell::Bool(false));
    let f_wage = table.add_column("flag_non_positive_wage".to_string(), Cell::Bool(false));

    let mut counts = FlagCounts::default();

    for row in 0..table.row_count() {
        let missing_bd = match bd {
            Some(c) => table.get(row, c).map_or(true, Cell::is_missing),
            None => true,
        };
        let over = number_at(table, row, overall);
        let pot = number_at(table, row, potential);
        let val = number_at(table, row, value);
        let wg = number_at(table, row, wage);

        if missing_bd {
            table.set(row, f_bd, Cell::Bool(true));
            counts.missing_birth_date += 1;
        }
        if let (Some(o), Some(p)) = (over, pot) {
            if o > p {
                table.set(row, f_op, Cell::Bool(true));
                counts.overall_gt_potential += 1;
            }
        }
        if matches!(val, Some(v) if v <= 0.0) {
            table.set(row, f_val, Cell::Bool(true));
            counts.non_positive_value += 1;
        }
        if matches!(wg, Some(w) if w <= 0.0) {
            table.set(row, f_wage, Cell::Bool(true));
            counts.non_positive_wage += 1;
        }
    }

    Ok(counts)
}

//! Numeric coercion for measurement and monetary columns.

use crate::error::Result;
use crate::table::{Cell, Table};

/// Columns forced to numeric when present. Absent columns are skipped,
/// not an error.
pub const NUMERIC_COLUMNS: &[&str] = &[
    "height_cm",
    "weight_kgs",
    "overall_rating",
    "potential",
    "value_euro",
    "wage_euro",
    "release_clause_euro",
];

/// Reinterpret every declared numeric column as `f64`. Values that do
/// not parse become missing; no range or sign validation happens here.
pub fn apply(table: &mut Table) -> Result<()> {
    for name in NUMERIC_COLUMNS {
        let Some(col) = table.column_index(name) else {
            continue;
        };

        for row in 0..table.row_count() {
            let coerced = table.get(row, col).and_then(|cell| match cell {
                Cell::Number(n) => Some(*n),
                Cell::Text(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            });

            match coerced {
                Some(n) => table.set(row, col, Cell::Number(n)),
                None => table.set(row, col, Cell::Missing),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerces_and_blanks_unparseable() {
        let mut table = Table::with_rows(
            vec!["overall_rating".to_string()],
            vec![
                vec![Cell::Text(" 93 ".to_string())],
                vec![Cell::Text("high".to_string())],
                vec![Cell::Text(String::new())],
                vec![Cell::Text("72.5".to_string())],
            ],
        );
        apply(&mut table).unwrap();

        assert_eq!(table.get(0, 0), Some(&Cell::Number(93.0)));
        assert_eq!(table.get(1, 0), Some(&Cell::Missing));
        assert_eq!(table.get(2, 0), Some(&Cell::Missing));
        assert_eq!(table.get(3, 0), Some(&Cell::Number(72.5)));
    }

    #[test]
    fn test_absent_columns_are_skipped() {
        let mut table = Table::with_rows(
            vec!["full_name".to_string()],
            vec![vec![Cell::Text("Lionel Messi".to_string())]],
        );
        apply(&mut table).unwrap();
        assert_eq!(table.get(0, 0), Some(&Cell::Text("Lionel Messi".to_string())));
    }

    #[test]
    fn test_non_numeric_typed_columns_untouched() {
        let mut table = Table::with_rows(
            vec!["wage_euro".to_string(), "positions".to_string()],
            vec![vec![
                Cell::Text("-50".to_string()),
                Cell::Text("RW".to_string()),
            ]],
        );
        apply(&mut table).unwrap();
        assert_eq!(table.get(0, 0), Some(&Cell::Number(-50.0)));
        assert_eq!(table.get(0, 1), Some(&Cell::Text("RW".to_string())));
    }
}

//! Position field normalization.

use crate::error::Result;
use crate::table::{Cell, Table};

/// Result of parsing the `positions` column.
///
/// Splitting on comma always yields at least one element, so `Invalid`
/// only arises if an upstream stage corrupted the column type; it is a
/// defensive branch, not a reachable state under the parse contract.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionList {
    Valid(Vec<String>),
    Invalid,
}

/// Split a raw positions string: remove every whitespace character,
/// then split on the literal comma.
///
/// An empty or all-whitespace input yields a single empty element.
/// That matches naive split-on-comma semantics and is kept as-is.
pub fn split_positions(raw: &str) -> PositionList {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    PositionList::Valid(compact.split(',').map(|s| s.to_string()).collect())
}

/// Trim `positions` in place and append `positions_list`,
/// `primary_position` and `positions_count`.
pub fn apply(table: &mut Table) -> Result<()> {
    let pos_idx = table.require_column("positions")?;
    let list_idx = table.add_column("positions_list".to_string(), Cell::Missing);
    let primary_idx = table.add_column("primary_position".to_string(), Cell::Missing);
    let count_idx = table.add_column("positions_count".to_string(), Cell::Number(0.0));

    for row in 0..table.row_count() {
        let raw = match table.get(row, pos_idx) {
            Some(Cell::Text(s)) => s.trim().to_string(),
            _ => String::new(),
        };
        table.set(row, pos_idx, Cell::Text(raw.clone()));

        match split_positions(&raw) {
            PositionList::Valid(items) => {
                table.set(row, count_idx, Cell::Number(items.len() as f64));
                if let Some(first) = items.first() {
                    table.set(row, primary_idx, Cell::Text(first.clone()));
                }
                table.set(row, list_idx, Cell::List(items));
            }
            PositionList::Invalid => {
                table.set(row, count_idx, Cell::Number(0.0));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoutprepError;

    fn table_with_positions(values: &[&str]) -> Table {
        Table::with_rows(
            vec!["positions".to_string()],
            values
                .iter()
                .map(|v| vec![Cell::Text(v.to_string())])
                .collect(),
        )
    }

    #[test]
    fn test_split_strips_internal_whitespace() {
        assert_eq!(
            split_positions(" RW, ST "),
            PositionList::Valid(vec!["RW".to_string(), "ST".to_string()])
        );
    }

    #[test]
    fn test_empty_string_yields_one_empty_element() {
        assert_eq!(
            split_positions(""),
            PositionList::Valid(vec![String::new()])
        );
    }

    #[test]
    fn test_apply_derives_primary_and_count() {
        let mut table = table_with_positions(&[" RW, ST ", "GK"]);
        apply(&mut table).unwrap();

        let primary = table.column_index("primary_position").unwrap();
        let count = table.column_index("positions_count").unwrap();
        assert_eq!(table.get(0, primary), Some(&Cell::Text("RW".to_string())));
        assert_eq!(table.get(0, count), Some(&Cell::Number(2.0)));
        assert_eq!(table.get(1, primary), Some(&Cell::Text("GK".to_string())));
        assert_eq!(table.get(1, count), Some(&Cell::Number(1.0)));
    }

    #[test]
    fn test_positions_trimmed_in_place() {
        let mut table = table_with_positions(&["  CB  "]);
        apply(&mut table).unwrap();
        let pos = table.column_index("positions").unwrap();
        assert_eq!(table.get(0, pos), Some(&Cell::Text("CB".to_string())));
    }

    #[test]
    fn test_missing_positions_column_is_fatal() {
        let mut table = Table::with_rows(vec!["full_name".to_string()], vec![]);
        let err = apply(&mut table).unwrap_err();
        assert!(matches!(err, ScoutprepError::MissingColumn(ref c) if c == "positions"));
    }
}

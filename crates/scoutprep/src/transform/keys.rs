//! Surrogate key derivation.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::table::{Cell, Table};

/// Runs of characters outside the key alphabet collapse to one hyphen.
static NON_KEY_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Token used in place of an absent or unparseable birth date.
pub const UNKNOWN_DATE_TOKEN: &str = "unknown";

/// Build the surrogate key for one record: lowercased trimmed name,
/// hyphen, ISO date (or the `unknown` token), slugged to `[a-z0-9-]`
/// with no edge hyphens.
///
/// Pure in `(full_name, birth_date)`. Two players sharing both name
/// and birth date collide by construction; within one pipeline output
/// the dedup stage rules that out, but callers reusing this function
/// elsewhere inherit the collision risk.
pub fn player_key(full_name: &str, birth_date: Option<NaiveDate>) -> String {
    let name = full_name.trim().to_lowercase();
    let date = birth_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE_TOKEN.to_string());
    let raw = format!("{}-{}", name, date);
    NON_KEY_CHARS
        .replace_all(&raw, "-")
        .trim_matches('-')
        .to_string()
}

/// Append `player_key` for every row. An absent `full_name` column
/// contributes empty text, never an error.
pub fn apply(table: &mut Table) -> Result<()> {
    let name_idx = table.column_index("full_name");
    let bd_idx = table.column_index("birth_date");
    let key_idx = table.add_column("player_key".to_string(), Cell::Missing);

    for row in 0..table.row_count() {
        let name = name_idx
            .and_then(|c| table.get(row, c))
            .and_then(Cell::as_text)
            .unwrap_or("")
            .to_string();
        let date = bd_idx.and_then(|c| table.get(row, c)).and_then(Cell::as_date);
        table.set(row, key_idx, Cell::Text(player_key(&name, date)));
    }

    Ok(())
}

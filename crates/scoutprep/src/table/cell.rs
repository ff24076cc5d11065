//! Typed cell values.

use chrono::NaiveDate;

/// A single cell in the record table.
///
/// Every input cell starts life as `Text`; pipeline stages overwrite
/// cells with typed variants, or with `Missing` when a value fails to
/// coerce.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Explicit missing value.
    Missing,
    /// Raw or normalized text.
    Text(String),
    /// Coerced numeric value.
    Number(f64),
    /// Parsed calendar date.
    Date(NaiveDate),
    /// Boolean quality flag.
    Bool(bool),
    /// Parsed position codes, kept in input order.
    List(Vec<String>),
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Render the cell the way both exporters serialize it.
    ///
    /// A single formatting path is what keeps the delimited and the
    /// columnar output logically identical.
    pub fn render(&self) -> String {
        match self {
            Cell::Missing => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => format_number(*n),
            Cell::Date(d) => d.format("%Y-%m-%d").to_string(),
            Cell::Bool(b) => if *b { "true" } else { "false" }.to_string(),
            Cell::List(items) => items.join(","),
        }
    }
}

/// Format a number without a trailing `.0` on whole values.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

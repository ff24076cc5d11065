//! Birth date parsing and age derivation.

use chrono::{Local, NaiveDate};

use crate::error::Result;
use crate::table::{Cell, Table};

/// Source of "today" for the age computation.
///
/// `today` is read once per pipeline run, not once per row, so age is
/// a function of run time. Inject a [`FixedClock`] in tests.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time source, the default outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed time source for deterministic runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Formats tried in order when parsing a raw birth date. US month-first
/// wins over day-first for ambiguous slash dates.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%b %d, %Y",
    "%d %b %Y",
];

/// Parse a raw date, trying each known format. Unparseable input is
/// `None`, never an error.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Age in years at one decimal place. Future birth dates come out
/// negative and pass through as computed.
fn age_years(today: NaiveDate, birth: NaiveDate) -> f64 {
    let days = (today - birth).num_days() as f64;
    (days / 365.25 * 10.0).round() / 10.0
}

/// Parse `birth_date` in place and append `age`.
pub fn apply(table: &mut Table, clock: &dyn Clock) -> Result<()> {
    let bd_idx = table.require_column("birth_date")?;
    let age_idx = table.add_column("age".to_string(), Cell::Missing);
    let today = clock.today();

    for row in 0..table.row_count() {
        let parsed = table.get(row, bd_idx).and_then(|cell| match cell {
            Cell::Text(s) => parse_date(s),
            Cell::Date(d) => Some(*d),
            _ => None,
        });

        match parsed {
            Some(date) => {
                table.set(row, bd_idx, Cell::Date(date));
                table.set(row, age_idx, Cell::Number(age_years(today, date)));
            }
            None => table.set(row, bd_idx, Cell::Missing),
        }
    }

    Ok(())
}

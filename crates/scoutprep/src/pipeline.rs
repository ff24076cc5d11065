//! Pipeline orchestration and public entry point.

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::export;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::table::Table;
use crate::transform::flags::FlagCounts;
use crate::transform::temporal::{Clock, SystemClock};
use crate::transform::{dedup, flags, keys, numeric, positions, temporal};

/// Configuration for a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Loader configuration.
    pub parser: ParserConfig,
}

/// Summary statistics for one run. Flag counts are taken before
/// deduplication, matching the stage order.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub duplicates_removed: usize,
    pub rows_exported: usize,
    pub flags: FlagCounts,
}

/// Product of a pipeline run.
///
/// `table` is the final in-memory table, identical in logical content
/// to both files written on disk.
#[derive(Debug, Clone)]
pub struct CleanRun {
    pub table: Table,
    pub source: SourceMetadata,
    pub summary: RunSummary,
}

impl CleanRun {
    pub fn into_table(self) -> Table {
        self.table
    }
}

/// The roster cleaning pipeline.
///
/// One linear pass: load, normalize positions, parse birth dates and
/// derive ages, coerce numeric columns, annotate quality flags, drop
/// duplicates, derive surrogate keys, export twice. Each run is
/// independent and, for a fixed clock, idempotent over the same input.
pub struct Pipeline {
    parser: Parser,
    clock: Box<dyn Clock>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    pub fn with_config(config: PipelineConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the wall-clock "today" used for age computation.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Run the full pipeline.
    ///
    /// Writes are sequential, not transactional: a failure on the
    /// columnar output leaves the delimited output already persisted.
    pub fn run(
        &self,
        input: impl AsRef<Path>,
        output_csv: impl AsRef<Path>,
        output_parquet: impl AsRef<Path>,
    ) -> Result<CleanRun> {
        let (mut table, source) = self.parser.parse_file(input.as_ref())?;
        let rows_loaded = table.row_count();

        // Columns every run depends on; everything else degrades
        // gracefully inside its stage.
        table.require_columns(&["positions", "birth_date"])?;

        positions::apply(&mut table)?;
        temporal::apply(&mut table, self.clock.as_ref())?;
        numeric::apply(&mut table)?;
        let flag_counts = flags::apply(&mut table)?;
        let duplicates_removed = dedup::apply(&mut table)?;
        keys::apply(&mut table)?;

        export::write_csv(&table, output_csv.as_ref())?;
        export::write_parquet(&table, output_parquet.as_ref())?;

        let summary = RunSummary {
            rows_loaded,
            duplicates_removed,
            rows_exported: table.row_count(),
            flags: flag_counts,
        };

        Ok(CleanRun {
            table,
            source,
            summary,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoutprepError;
    use crate::table::Cell;
    use crate::transform::temporal::FixedClock;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn create_input(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn fixed_today() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 6, 24).unwrap())
    }

    #[test]
    fn test_run_produces_superset_of_input_columns() {
        let input = create_input(
            "full_name,birth_date,positions\nLionel Messi,1987-06-24,\"RW, ST\"\n",
        );
        let dir = TempDir::new().unwrap();

        let run = Pipeline::new()
            .with_clock(fixed_today())
            .run(
                input.path(),
                dir.path().join("out.csv"),
                dir.path().join("out.parquet"),
            )
            .unwrap();

        for header in ["full_name", "birth_date", "positions"] {
            assert!(run.table.has_column(header));
        }
        for derived in [
            "positions_list",
            "primary_position",
            "positions_count",
            "age",
            "flag_missing_birth_date",
            "flag_overall_gt_potential",
            "flag_non_positive_value",
            "flag_non_positive_wage",
            "player_key",
        ] {
            assert!(run.table.has_column(derived), "missing column {derived}");
        }
    }

    #[test]
    fn test_run_fails_without_positions_column() {
        let input = create_input("full_name,birth_date\nLionel Messi,1987-06-24\n");
        let dir = TempDir::new().unwrap();

        let err = Pipeline::new()
            .run(
                input.path(),
                dir.path().join("out.csv"),
                dir.path().join("out.parquet"),
            )
            .unwrap_err();
        assert!(matches!(err, ScoutprepError::MissingColumn(ref c) if c == "positions"));
    }

    #[test]
    fn test_run_fails_without_birth_date_column() {
        let input = create_input("full_name,positions\nLionel Messi,RW\n");
        let dir = TempDir::new().unwrap();

        let err = Pipeline::new()
            .run(
                input.path(),
                dir.path().join("out.csv"),
                dir.path().join("out.parquet"),
            )
            .unwrap_err();
        assert!(matches!(err, ScoutprepError::MissingColumn(ref c) if c == "birth_date"));
    }

    #[test]
    fn test_summary_counts() {
        let input = create_input(concat!(
            "full_name,birth_date,positions,value_euro\n",
            "Lionel Messi,1987-06-24,RW,0\n",
            "Lionel Messi,1987-06-24,RW,0\n",
            "Luka Modric,1985-09-09,CM,5\n",
        ));
        let dir = TempDir::new().unwrap();

        let run = Pipeline::new()
            .with_clock(fixed_today())
            .run(
                input.path(),
                dir.path().join("out.csv"),
                dir.path().join("out.parquet"),
            )
            .unwrap();

        assert_eq!(run.summary.rows_loaded, 3);
        assert_eq!(run.summary.duplicates_removed, 1);
        assert_eq!(run.summary.rows_exported, 2);
        // Flags run pre-dedup, so both Messi rows count.
        assert_eq!(run.summary.flags.non_positive_value, 2);
        assert_eq!(run.source.row_count, 3);
    }

    #[test]
    fn test_player_key_present_on_every_row() {
        let input = create_input(concat!(
            "full_name,birth_date,positions\n",
            "Lionel Messi,1987-06-24,RW\n",
            "Mystery Player,N/A,GK\n",
        ));
        let dir = TempDir::new().unwrap();

        let run = Pipeline::new()
            .with_clock(fixed_today())
            .run(
                input.path(),
                dir.path().join("out.csv"),
                dir.path().join("out.parquet"),
            )
            .unwrap();

        let key = run.table.column_index("player_key").unwrap();
        for row in 0..run.table.row_count() {
            let cell = run.table.get(row, key).unwrap();
            assert!(matches!(cell, Cell::Text(s) if !s.is_empty()));
        }
        assert_eq!(
            run.table.get(1, key),
            Some(&Cell::Text("mystery-player-unknown".to_string()))
        );
    }
}

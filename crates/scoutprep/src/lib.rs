//! Scoutprep: cleaning pipeline for scouting roster exports.
//!
//! Takes a delimited roster of player records and runs one linear
//! pipeline over it: normalize the multi-valued positions field, parse
//! birth dates and derive ages, coerce numeric columns, annotate
//! data-quality flags, drop duplicate records, derive a stable
//! surrogate key per player, and export the result as both delimited
//! text and Parquet.
//!
//! # Core principles
//!
//! - **Coercion-to-missing**: a cell that fails numeric or date
//!   parsing becomes an explicit missing value; per-cell failures
//!   never abort a run.
//! - **Append-only columns**: stages add derived columns, never remove
//!   or rename input ones, so output columns are a superset of the
//!   input's.
//! - **Deterministic under a fixed clock**: "today" is injected, so a
//!   run is a pure function of its input file and clock.
//!
//! # Example
//!
//! ```no_run
//! use scoutprep::Pipeline;
//!
//! let run = Pipeline::new()
//!     .run(
//!         "data/raw/fifa_players.csv",
//!         "data/processed/players_clean.csv",
//!         "data/processed/players_clean.parquet",
//!     )
//!     .unwrap();
//!
//! println!("Clean rows: {}", run.table.row_count());
//! ```

pub mod error;
pub mod export;
pub mod input;
pub mod table;
pub mod transform;

mod pipeline;

pub use crate::pipeline::{CleanRun, Pipeline, PipelineConfig, RunSummary};
pub use error::{Result, ScoutprepError};
pub use input::{Parser, ParserConfig, SourceMetadata};
pub use table::{Cell, Table};
pub use transform::flags::FlagCounts;
pub use transform::keys::player_key;
pub use transform::temporal::{Clock, FixedClock, SystemClock};

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scoutprep: roster cleaning pipeline
#[derive(Parser)]
#[command(name = "scoutprep")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a raw roster export and write CSV + Parquet outputs
    Clean {
        /// Path to the raw roster file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the cleaned CSV (default: data/processed/players_clean.csv)
        #[arg(long)]
        output_csv: Option<PathBuf>,

        /// Output path for the cleaned Parquet (default: data/processed/players_clean.parquet)
        #[arg(long)]
        output_parquet: Option<PathBuf>,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },
}

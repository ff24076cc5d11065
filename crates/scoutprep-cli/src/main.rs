//! Scoutprep CLI - roster cleaning pipeline.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Clean {
            file,
            output_csv,
            output_parquet,
            json,
        } => commands::clean::run(file, output_csv, output_parquet, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

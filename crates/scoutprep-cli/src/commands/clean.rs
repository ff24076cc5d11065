//! Clean command - run the pipeline and export cleaned data.

use std::path::PathBuf;

use colored::Colorize;
use scoutprep::Pipeline;

const DEFAULT_CSV: &str = "data/processed/players_clean.csv";
const DEFAULT_PARQUET: &str = "data/processed/players_clean.parquet";

pub fn run(
    file: PathBuf,
    output_csv: Option<PathBuf>,
    output_parquet: Option<PathBuf>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("Input file not found: {}", file.display()).into());
    }

    let output_csv = output_csv.unwrap_or_else(|| PathBuf::from(DEFAULT_CSV));
    let output_parquet = output_parquet.unwrap_or_else(|| PathBuf::from(DEFAULT_PARQUET));

    let run = Pipeline::new().run(&file, &output_csv, &output_parquet)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&run.summary)?);
        return Ok(());
    }

    if verbose {
        println!(
            "{} {} ({} bytes, {}, {} columns)",
            "Source:".cyan().bold(),
            run.source.file,
            run.source.size_bytes,
            run.source.hash,
            run.source.column_count
        );
    }

    println!(
        "{} {} clean rows ({} duplicates removed)",
        "Done.".green().bold(),
        run.summary.rows_exported.to_string().white().bold(),
        run.summary.duplicates_removed
    );
    println!("  {} {}", "csv:".cyan(), output_csv.display());
    println!("  {} {}", "parquet:".cyan(), output_parquet.display());

    Ok(())
}

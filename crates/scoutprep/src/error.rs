//! Error types for the scoutprep library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pipeline operations.
///
/// Per-cell parse failures are deliberately absent from this taxonomy:
/// a value that does not coerce to its target type becomes a missing
/// cell, never an error.
#[derive(Debug, Error)]
pub enum ScoutprepError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row missing or malformed on load.
    #[error("Format error: {0}")]
    Format(String),

    /// A column the pipeline unconditionally depends on is absent.
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// Columnar export support is unavailable in this build.
    #[error("Dependency error: {0}")]
    Dependency(String),

    /// Columnar export failed mid-write.
    #[error("Columnar export error: {0}")]
    Columnar(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for scoutprep operations.
pub type Result<T> = std::result::Result<T, ScoutprepError>;

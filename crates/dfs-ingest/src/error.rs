//! Error types for salary feed ingestion.
//!
//! Only I/O and CSV syntax failures are errors. Rows that cannot be turned
//! into players are reported through `RowOutcome::Rejected` instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;

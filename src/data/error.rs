//! Data loading error types
//!
//! Every failure here is fatal at startup: the dashboard cannot render
//! without a table.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the happiness table
#[derive(Error, Debug)]
pub enum LoadError {
    /// Local file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Remote resource unreachable or returned a non-success status
    #[error("Failed to fetch data: {0}")]
    Http(#[from] reqwest::Error),

    /// CSV could not be parsed
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// The header row names the same column twice
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// Score cell is empty, non-numeric or not finite
    #[error("Invalid score on line {line}: {value:?}")]
    InvalidScore { line: usize, value: String },
}

/// Result type alias for data loading
pub type LoadResult<T> = Result<T, LoadError>;

//! Error types for Censusplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Censusplot operations.
pub type Result<T> = std::result::Result<T, CensusError>;

/// Errors that can occur in Censusplot.
#[derive(Debug, Error)]
pub enum CensusError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A row of the data file could not be parsed.
    #[error("CSV error at line {line}: {message}")]
    Csv {
        /// 1-based line in the file, 0 when unknown.
        line: u64,
        /// Parser message.
        message: String,
    },

    /// The data file has a header but no records.
    #[error("No records in {path}")]
    EmptyDataset {
        /// Path of the empty file.
        path: PathBuf,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

impl CensusError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create an EmptyDataset error.
    pub fn empty_dataset(path: impl Into<PathBuf>) -> Self {
        Self::EmptyDataset { path: path.into() }
    }
}

impl From<csv::Error> for CensusError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        Self::Csv {
            line,
            message: err.to_string(),
        }
    }
}

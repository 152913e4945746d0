/// Error types for loading the launch record table
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the launch CSV at startup.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The file is absent or unreadable
    #[error("failed to read launch data from {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV itself could not be tokenized
    #[error("failed to parse CSV")]
    Csv(#[from] csv::Error),

    /// A required header is not present
    #[error("required column missing: {0}")]
    MissingColumn(&'static str),

    /// A data row could not be converted into a launch record
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// The file has headers but no data rows, so no payload bounds exist
    #[error("launch data contains no records")]
    Empty,
}

/// Type alias for Results using DataLoadError
pub type Result<T> = std::result::Result<T, DataLoadError>;

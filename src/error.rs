//! Error types shared by all tabtools utilities

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while transforming a table
#[derive(Debug, Error)]
pub enum Error {
    /// An input file could not be opened or read
    #[error("file not found or unreadable: '{path}': {source}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A column identifier did not match any column
    #[error("column not found: '{0}'")]
    ColumnNotFound(String),

    /// A join input has more than two columns and no value column was chosen
    #[error(
        "'{path}' has {columns} columns; pass --idx-to-keep to choose the value column"
    )]
    AmbiguousValueColumn { path: PathBuf, columns: usize },

    /// A row's field count does not match the header's
    #[error("ragged table: line {line} has {found} fields, expected {expected}")]
    RaggedTable {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A target column position is outside the table
    #[error("invalid position {position}: must be within [0, {column_count})")]
    InvalidPosition {
        position: usize,
        column_count: usize,
    },

    /// The regular expression failed to compile
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The regular expression has no capture groups to extract
    #[error("pattern '{0}' has no capture groups")]
    NoCaptureGroups(String),

    /// CSV-level read or write failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Error types for sumcat-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while merging summary tables
///
/// None of these are recovered from; each one aborts the run.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open an input file
    #[error("failed to open input file '{path}': {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read lines from an input file (I/O error or invalid UTF-8)
    #[error("failed to read input file '{path}': {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Path does not follow the `<a>.<b>.<age>.<iteration>.<intervention>` convention
    #[error("unexpected path layout '{path}': {reason}")]
    PathFormat { path: PathBuf, reason: String },

    /// Input file has no header line
    #[error("input file '{path}' has no header line")]
    MissingHeader { path: PathBuf },

    /// Data row width differs from the file's own header
    #[error("row {line} in '{path}' has {found} fields, header has {expected}")]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Failed to create, append to, or flush the output file
    #[error("failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// File name pattern could not be compiled
    #[error("invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl Error {
    pub(crate) fn path_format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::PathFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

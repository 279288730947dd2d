//! Error types for dataset files

use thiserror::Error;

/// Dataset file errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Malformed record at line {line}: {source}")]
    MalformedRecord {
        line: usize,
        source: serde_json::Error,
    },
}

/// Result type alias for format operations
pub type Result<T> = std::result::Result<T, Error>;

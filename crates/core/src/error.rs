//! Error types for catalog generation

use thiserror::Error;

/// Generation errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Result type alias for generation operations
pub type Result<T> = std::result::Result<T, Error>;

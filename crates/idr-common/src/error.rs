//! Error types for the IDR corpus pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PrepError>;

/// Main error type for the pipeline crates
#[derive(Error, Debug)]
pub enum PrepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unsupported annotation source: {0}")]
    UnsupportedSource(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

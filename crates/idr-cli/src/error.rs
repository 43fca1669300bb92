//! Error types for the IDR CLI
//!
//! User-facing errors with clear, actionable messages.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Comprehensive error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Required file is missing
    #[error("File not found: '{0}'. Verify the path exists and you have read permissions.")]
    FileNotFound(String),

    /// Pipeline config file (idr.yml) has invalid format or content
    #[error("Invalid pipeline config: {0}. Check the YAML syntax and the source kind names.")]
    InvalidConfig(String),

    /// The FASTA artifact has not been fetched yet
    #[error("FASTA artifact '{0}' does not exist. Run 'idr fetch' first to download sequences.")]
    MissingArtifact(String),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// YAML parsing failed
    #[error("Failed to parse YAML: {0}. Check the file syntax at the indicated line/column.")]
    YamlParse(#[from] serde_yaml::Error),

    /// Pipeline error from the library crates
    #[error(transparent)]
    Prep(#[from] idr_common::PrepError),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

//! IDR Prep Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the IDR corpus pipeline.
//!
//! # Overview
//!
//! This crate provides common functionality used by the pipeline crates:
//!
//! - **Error Handling**: Custom error types and result types
//! - **Logging**: Tracing configuration and initialization
//! - **Types**: Annotation source kinds and their column contracts
//! - **Checksums**: Artifact integrity digests
//!
//! # Example
//!
//! ```no_run
//! use idr_common::Result;
//! use idr_common::checksum::{compute_file_checksum, ChecksumAlgorithm};
//!
//! fn digest(path: &str) -> Result<String> {
//!     compute_file_checksum(path, ChecksumAlgorithm::Sha256)
//! }
//! ```

pub mod checksum;
pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{PrepError, Result};
pub use types::{AnnotationSource, SourceKind};

//! IDR Ingest Library
//!
//! First stage of the corpus pipeline: gather the unique protein accessions
//! referenced by the annotation files and bulk-fetch their full sequences
//! from the UniProt REST accession endpoint.
//!
//! # Example
//!
//! ```no_run
//! use idr_common::{AnnotationSource, SourceKind};
//! use idr_ingest::{accessions, uniprot::SequenceClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let sources = vec![AnnotationSource::new(
//!         "data/MobiDB.txt",
//!         SourceKind::CoordinateInText,
//!     )];
//!     let ids: Vec<String> = accessions::collect_accessions(&sources)
//!         .into_iter()
//!         .collect();
//!
//!     let client = SequenceClient::default_endpoint()?;
//!     client.fetch_to_file(&ids, "idr_sequences.fasta").await?;
//!     Ok(())
//! }
//! ```

pub mod accessions;
pub mod uniprot;

// Re-export commonly used types
pub use accessions::collect_accessions;
pub use uniprot::SequenceClient;

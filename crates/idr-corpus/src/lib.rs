//! IDR Corpus Library
//!
//! Turns annotation dumps plus a FASTA blob of full protein sequences into a
//! deduplicated training corpus of intrinsically disordered region (IDR)
//! sequences.
//!
//! # Pipeline
//!
//! 1. [`index::SequenceIndex`] — load the FASTA blob into an
//!    accession-to-residues map.
//! 2. [`extract::RegionExtractor`] — normalize each source's row layout into
//!    contiguous subsequences.
//! 3. [`driver::build_corpus`] — run every configured source, tolerate
//!    per-file failures, deduplicate.
//! 4. [`output::write_corpus`] — one region per line.
//!
//! # Example
//!
//! ```no_run
//! use idr_common::{AnnotationSource, SourceKind};
//! use idr_corpus::{driver::build_corpus, index::SequenceIndex, output::write_corpus};
//!
//! fn main() -> anyhow::Result<()> {
//!     let index = SequenceIndex::from_path("idr_sequences.fasta")?;
//!     let sources = vec![AnnotationSource::new(
//!         "data/MobiDB.txt",
//!         SourceKind::CoordinateInText,
//!     )];
//!     let regions = build_corpus(&sources, &index);
//!     write_corpus("final_idr_dataset.txt", &regions, None)?;
//!     Ok(())
//! }
//! ```

pub mod driver;
pub mod extract;
pub mod index;
pub mod output;

// Re-export commonly used types
pub use driver::build_corpus;
pub use extract::{RegionExtractor, RowSkip, MIN_REGION_LEN};
pub use index::SequenceIndex;

//! Extract command - slice disorder regions and write the training corpus

use crate::config::PipelineConfig;
use crate::error::{CliError, Result};
use idr_common::checksum::{compute_file_checksum, ChecksumAlgorithm};
use idr_corpus::{driver::build_corpus, index::SequenceIndex, output::write_corpus};
use tracing::info;

/// Load the FASTA artifact, run every configured source through region
/// extraction, and write the deduplicated corpus.
pub fn execute(config: &PipelineConfig) -> Result<()> {
    if !config.fasta.exists() {
        return Err(CliError::MissingArtifact(config.fasta.display().to_string()));
    }

    let index = SequenceIndex::from_path(&config.fasta)?;
    let regions = build_corpus(&config.sources, &index);
    write_corpus(&config.corpus, &regions, config.separator.as_deref())?;

    let digest = compute_file_checksum(&config.corpus, ChecksumAlgorithm::Sha256)?;
    info!(
        path = %config.corpus.display(),
        regions = regions.len(),
        sha256 = %digest,
        "Extract complete"
    );
    Ok(())
}

//! Fetch command - collect accessions and download their sequences

use crate::config::PipelineConfig;
use crate::error::Result;
use idr_ingest::{accessions, uniprot::SequenceClient};
use tracing::{info, warn};

/// Collect the unique accessions from every configured annotation file and
/// write the concatenated FASTA artifact.
pub async fn execute(config: &PipelineConfig, base_url: &str) -> Result<()> {
    let ids: Vec<String> = accessions::collect_accessions(&config.sources)
        .into_iter()
        .collect();

    if ids.is_empty() {
        warn!("No accessions collected; the FASTA artifact will be empty");
    }

    let client = SequenceClient::new(base_url)?;
    client.fetch_to_file(&ids, &config.fasta).await?;

    info!(path = %config.fasta.display(), "Fetch complete");
    Ok(())
}

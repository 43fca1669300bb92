//! Bulk sequence retrieval from the UniProt REST accession endpoint
//!
//! The endpoint takes a comma-joined accession list and a format selector
//! and answers with concatenated FASTA text. Requests are issued in bounded
//! batches; a failed batch is logged and contributes nothing while the
//! remaining batches proceed.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use idr_common::checksum::{compute_file_checksum, ChecksumAlgorithm};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

/// UniProt REST endpoint for sequence-by-accession retrieval
pub const DEFAULT_BASE_URL: &str = "https://rest.uniprot.org/uniprotkb/accessions";

/// Accessions per outbound request; the remote rejects oversized ID lists
pub const FETCH_BATCH_SIZE: usize = 500;

/// Request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// HTTP client for the sequence retrieval endpoint
pub struct SequenceClient {
    client: reqwest::Client,
    base_url: String,
}

impl SequenceClient {
    /// Create a client against a specific endpoint URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a client against the public UniProt endpoint
    pub fn default_endpoint() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Get the endpoint URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one batch of accessions as FASTA text.
    ///
    /// A non-success response is an error for the whole batch.
    pub async fn fetch_batch(&self, accessions: &[String]) -> Result<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("accessions", accessions.join(",")), ("format", "fasta".to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Sequence request failed with status {}", status);
        }

        response.text().await.context("Failed to read response body")
    }

    /// Fetch all accessions in sequential batches of [`FETCH_BATCH_SIZE`].
    ///
    /// Successful responses are concatenated verbatim in batch order; a
    /// failed batch is logged and skipped.
    pub async fn fetch_fasta(&self, accessions: &[String]) -> String {
        let batches = accessions.len().div_ceil(FETCH_BATCH_SIZE);
        info!(
            accessions = accessions.len(),
            batches, "Fetching sequences"
        );

        let pb = ProgressBar::new(batches as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        pb.set_message("Downloading sequences");

        let mut fasta = String::new();
        for (batch, chunk) in accessions.chunks(FETCH_BATCH_SIZE).enumerate() {
            match self.fetch_batch(chunk).await {
                Ok(text) => fasta.push_str(&text),
                Err(e) => {
                    warn!(batch = batch + 1, error = %e, "Batch fetch failed");
                },
            }
            pb.inc(1);
        }
        pb.finish_with_message("Sequence download complete");

        fasta
    }

    /// Fetch all accessions and write the concatenated FASTA artifact.
    ///
    /// Returns the artifact text. The file's sha256 is logged so a run can
    /// be compared against a previous one.
    pub async fn fetch_to_file(
        &self,
        accessions: &[String],
        path: impl AsRef<Path>,
    ) -> Result<String> {
        let path = path.as_ref();
        let fasta = self.fetch_fasta(accessions).await;

        std::fs::write(path, &fasta)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        let digest = compute_file_checksum(path, ChecksumAlgorithm::Sha256)?;

        info!(
            path = %path.display(),
            bytes = fasta.len(),
            sha256 = %digest,
            "Wrote FASTA artifact"
        );
        Ok(fasta)
    }
}

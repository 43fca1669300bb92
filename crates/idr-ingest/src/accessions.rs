//! Accession collection from annotation files
//!
//! Every source keeps the protein accession in the same column, so all
//! configured files — including residue-per-line ones that region extraction
//! cannot handle — contribute to the fetch set.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use idr_common::types::{AnnotationSource, ACCESSION_COLUMN};
use tracing::{info, warn};

/// Union of the unique accessions across all annotation files.
///
/// A file that cannot be read is logged and skipped; the remaining files
/// still contribute.
pub fn collect_accessions(sources: &[AnnotationSource]) -> BTreeSet<String> {
    let mut accessions = BTreeSet::new();

    for source in sources {
        match collect_from_file(&source.path) {
            Ok(ids) => {
                info!(
                    path = %source.path.display(),
                    count = ids.len(),
                    "Collected accessions"
                );
                accessions.extend(ids);
            },
            Err(e) => {
                warn!(
                    path = %source.path.display(),
                    error = %e,
                    "Skipping annotation file"
                );
            },
        }
    }

    info!(
        total = accessions.len(),
        "Unique accessions across all sources"
    );
    accessions
}

/// Read the accession column of one tab-separated file.
fn collect_from_file(path: &Path) -> Result<BTreeSet<String>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut ids = BTreeSet::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("Failed to read {}", path.display()))?;
        if let Some(id) = record.get(ACCESSION_COLUMN).map(str::trim) {
            if !id.is_empty() {
                ids.insert(id.to_string());
            }
        }
    }

    Ok(ids)
}

//! Extraction driver
//!
//! Runs every configured annotation source through the matching extraction,
//! tolerating failures at file granularity, and deduplicates the combined
//! result. The corpus is a set: byte-identical regions from different rows,
//! files, or sources collapse to one entry, and output order is arbitrary.

use std::collections::HashSet;

use csv::ReaderBuilder;
use idr_common::{AnnotationSource, PrepError, Result};
use tracing::{debug, info, warn};

use crate::extract::RegionExtractor;
use crate::index::SequenceIndex;

/// Extract, accumulate, and deduplicate regions from all sources.
///
/// A file that cannot be processed (unreadable, too few columns, unsupported
/// layout) is logged and skipped; the remaining files still run. An empty
/// index is not an error: every row would be gated out, so the result is an
/// empty corpus.
pub fn build_corpus(sources: &[AnnotationSource], index: &SequenceIndex) -> HashSet<String> {
    if index.is_empty() {
        warn!("Sequence index is empty; every row will be skipped and the corpus will be empty");
    }

    let extractor = RegionExtractor::new(index);
    let mut corpus: HashSet<String> = HashSet::new();

    for source in sources {
        match extract_file(source, &extractor) {
            Ok(regions) => {
                corpus.extend(regions);
            },
            Err(e) => {
                warn!(
                    path = %source.path.display(),
                    kind = %source.kind,
                    error = %e,
                    "Skipping annotation file"
                );
            },
        }
    }

    info!(regions = corpus.len(), "Built deduplicated region set");
    corpus
}

/// Run one annotation file through its extraction.
///
/// The header row's width is checked against the kind's minimum before any
/// data row is read, so a truncated dump fails here with a clear message
/// instead of a mid-row field error.
fn extract_file(source: &AnnotationSource, extractor: &RegionExtractor<'_>) -> Result<Vec<String>> {
    if !source.kind.supports_extraction() {
        return Err(PrepError::UnsupportedSource(format!(
            "{} ({} format)",
            source.path.display(),
            source.kind
        )));
    }

    let file = std::fs::File::open(&source.path)?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let width = reader
        .headers()
        .map_err(|e| PrepError::Parse(e.to_string()))?
        .len();
    if width < source.kind.min_columns() {
        return Err(PrepError::Parse(format!(
            "file has {} columns, {} needs at least {}",
            width,
            source.kind,
            source.kind.min_columns()
        )));
    }

    let mut regions = Vec::new();
    let mut extracted_rows = 0usize;
    let mut skipped_rows = 0usize;

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                debug!(error = %e, "Unreadable row");
                skipped_rows += 1;
                continue;
            },
        };

        match extractor.extract_row(source.kind, &record) {
            Ok(row_regions) => {
                if !row_regions.is_empty() {
                    extracted_rows += 1;
                }
                regions.extend(row_regions);
            },
            Err(skip) => {
                debug!(reason = %skip, "Row skipped");
                skipped_rows += 1;
            },
        }
    }

    info!(
        path = %source.path.display(),
        kind = %source.kind,
        regions = regions.len(),
        rows = extracted_rows,
        skipped = skipped_rows,
        "Extracted regions"
    );

    Ok(regions)
}

//! In-memory index of full protein sequences
//!
//! Built once from a FASTA blob, read-only afterward; every extraction pass
//! resolves accessions against it.

use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::Path;

use idr_common::{PrepError, Result};
use tracing::info;

/// Mapping from protein accession to its full residue string.
///
/// Headers follow the common `db|ACCESSION|description` convention; when no
/// `|` is present the first whitespace-delimited token is the accession.
/// Duplicate accessions are resolved last-write-wins.
#[derive(Debug, Default, Clone)]
pub struct SequenceIndex {
    sequences: HashMap<String, String>,
}

impl SequenceIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from a FASTA file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let index = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            entries = index.len(),
            "Loaded sequence index"
        );
        Ok(index)
    }

    /// Build the index from any buffered FASTA reader.
    ///
    /// Sequence lines between headers are trimmed and concatenated in file
    /// order. Input without any header yields an empty index.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut sequences = HashMap::new();
        let mut current: Option<(String, String)> = None;

        for line in reader.lines() {
            let line = line?;
            if let Some(header) = line.strip_prefix('>') {
                // Finalize the previous record before starting the next
                if let Some((accession, residues)) = current.take() {
                    sequences.insert(accession, residues);
                }
                current = accession_from_header(header).map(|acc| (acc, String::new()));
            } else if let Some((_, residues)) = current.as_mut() {
                residues.push_str(line.trim());
            }
        }

        // The last record has no following header to finalize it
        if let Some((accession, residues)) = current {
            sequences.insert(accession, residues);
        }

        Ok(Self { sequences })
    }

    /// Look up the residues for an accession
    pub fn get(&self, accession: &str) -> Option<&str> {
        self.sequences.get(accession).map(String::as_str)
    }

    /// Whether the accession is present
    pub fn contains(&self, accession: &str) -> bool {
        self.sequences.contains_key(accession)
    }

    /// Number of indexed sequences
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Whether the index holds no sequences
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Iterate over (accession, residues) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sequences
            .iter()
            .map(|(acc, res)| (acc.as_str(), res.as_str()))
    }
}

impl std::str::FromStr for SequenceIndex {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

/// Extract the accession from a FASTA header (the part after `>`).
///
/// `sp|P04637|P53_HUMAN ...` gives `P04637`; a header without `|` gives its
/// first whitespace-delimited token. Returns `None` for a blank header.
fn accession_from_header(header: &str) -> Option<String> {
    if header.contains('|') {
        let field = header.split('|').nth(1)?.trim();
        if field.is_empty() {
            return None;
        }
        return Some(field.to_string());
    }

    header.split_whitespace().next().map(str::to_string)
}

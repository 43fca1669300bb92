//! Pipeline configuration file handling (idr.yml)
//!
//! The config lists the annotation inputs with their source kinds and names
//! the two flat artifacts the pipeline writes. The file list is injected
//! configuration, not a runtime parameter.

use crate::error::{CliError, Result};
use idr_common::AnnotationSource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Pipeline configuration (idr.yml)
///
/// ```yaml
/// sources:
///   - path: data/MobiDB.txt
///     kind: coordinate-in-text
///   - path: data/D2P2.txt
///     kind: explicit-range
/// fasta: idr_sequences.fasta
/// corpus: final_idr_dataset.txt
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    /// Annotation inputs, each tagged with its source kind
    #[serde(default)]
    pub sources: Vec<AnnotationSource>,

    /// Where the fetched FASTA artifact is written and read back
    #[serde(default = "default_fasta_path")]
    pub fasta: PathBuf,

    /// Where the final training corpus is written
    #[serde(default = "default_corpus_path")]
    pub corpus: PathBuf,

    /// Optional token appended to every corpus line (off by default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

fn default_fasta_path() -> PathBuf {
    PathBuf::from("idr_sequences.fasta")
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("final_idr_dataset.txt")
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            fasta: default_fasta_path(),
            corpus: default_corpus_path(),
            separator: None,
        }
    }
}

impl PipelineConfig {
    /// Load the pipeline config from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: PipelineConfig = serde_yaml::from_str(&content)
            .map_err(|e| CliError::invalid_config(e.to_string()))?;

        Ok(config)
    }

    /// Save the pipeline config to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

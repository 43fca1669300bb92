//! Annotation source kinds and their column contracts
//!
//! The upstream annotation dumps are tab-separated with a header row, but
//! header names vary between releases, so fields are addressed by fixed
//! position. Every source keeps the protein accession in the third column;
//! the disorder payload differs per kind.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Column offset of the protein accession, shared by all source kinds.
pub const ACCESSION_COLUMN: usize = 2;

/// How a source file encodes its disorder regions.
///
/// Each configured input carries one of these tags; extraction dispatches on
/// the tag, never on the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Free-text annotation column containing `(start-end)` coordinate
    /// tokens, e.g. `D_WC: (1-36)` (MobiDB-style)
    CoordinateInText,
    /// Separate start and end integer columns (D2P2-style)
    ExplicitRange,
    /// The region's residues given directly in a column (DisProt-style)
    LiteralSequence,
    /// One disorder call per residue per line (IUPred-style); region
    /// extraction does not support this layout
    ResiduePerLine,
}

impl SourceKind {
    /// Column offset of the free-text annotation field (coordinate-in-text)
    pub const ANNOTATION_COLUMN: usize = 4;
    /// Column offsets of the start and end fields (explicit-range)
    pub const START_COLUMN: usize = 4;
    pub const END_COLUMN: usize = 5;
    /// Column offset of the literal residues field (literal-sequence)
    pub const SEQUENCE_COLUMN: usize = 6;

    /// Minimum number of columns a file of this kind must have.
    ///
    /// Validated once per file before any row is processed, so a truncated
    /// dump fails at file granularity instead of raising mid-row.
    pub fn min_columns(&self) -> usize {
        match self {
            SourceKind::CoordinateInText => Self::ANNOTATION_COLUMN + 1,
            SourceKind::ExplicitRange => Self::END_COLUMN + 1,
            SourceKind::LiteralSequence => Self::SEQUENCE_COLUMN + 1,
            SourceKind::ResiduePerLine => ACCESSION_COLUMN + 1,
        }
    }

    /// Whether region extraction supports this layout
    pub fn supports_extraction(&self) -> bool {
        !matches!(self, SourceKind::ResiduePerLine)
    }
}

impl std::str::FromStr for SourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coordinate-in-text" => Ok(SourceKind::CoordinateInText),
            "explicit-range" => Ok(SourceKind::ExplicitRange),
            "literal-sequence" => Ok(SourceKind::LiteralSequence),
            "residue-per-line" => Ok(SourceKind::ResiduePerLine),
            _ => Err(anyhow::anyhow!("Invalid source kind: {}", s)),
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::CoordinateInText => write!(f, "coordinate-in-text"),
            SourceKind::ExplicitRange => write!(f, "explicit-range"),
            SourceKind::LiteralSequence => write!(f, "literal-sequence"),
            SourceKind::ResiduePerLine => write!(f, "residue-per-line"),
        }
    }
}

/// One configured annotation input: where it lives and how to read it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSource {
    /// Path to the tab-separated annotation file
    pub path: PathBuf,

    /// How the file encodes disorder regions
    pub kind: SourceKind,
}

impl AnnotationSource {
    pub fn new(path: impl Into<PathBuf>, kind: SourceKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

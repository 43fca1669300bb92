//! Per-source region extraction
//!
//! Each annotation source encodes disorder regions differently: coordinate
//! tokens inside a free-text field, separate start/end columns, or the
//! literal residues themselves. This module normalizes all of them into
//! contiguous protein subsequences resolved against the [`SequenceIndex`].
//!
//! Sources use 1-based inclusive coordinates; slicing converts to the
//! 0-based half-open `[start-1, end)` range.

use csv::StringRecord;
use idr_common::types::{SourceKind, ACCESSION_COLUMN};
use regex::Regex;
use thiserror::Error;

use crate::index::SequenceIndex;

/// Extracted regions shorter than this many residues are discarded.
pub const MIN_REGION_LEN: usize = 10;

/// `(start-end)` coordinate tokens embedded in annotation text, e.g. `(1-36)`
const COORDINATE_PATTERN: &str = r"\((\d+)-(\d+)\)";

/// Why a row contributed no region.
///
/// Row-level problems never abort a file; they are reported per row so the
/// reasons stay distinguishable in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RowSkip {
    #[error("accession not present in sequence index")]
    UnknownAccession,
    #[error("required field missing or empty")]
    MissingField,
    #[error("coordinate field is not a valid integer")]
    BadCoordinate,
    #[error("coordinates fall outside the sequence")]
    OutOfBounds,
    #[error("extracted region shorter than {MIN_REGION_LEN} residues")]
    TooShort,
    #[error("residue-per-line rows require run-length grouping, which is not implemented")]
    UnsupportedFormat,
}

/// Normalizes annotation rows into disorder-region subsequences.
pub struct RegionExtractor<'a> {
    index: &'a SequenceIndex,
    coordinate_re: Regex,
}

impl<'a> RegionExtractor<'a> {
    pub fn new(index: &'a SequenceIndex) -> Self {
        Self {
            index,
            // Pattern is a compile-time constant
            coordinate_re: Regex::new(COORDINATE_PATTERN).expect("valid coordinate pattern"),
        }
    }

    /// Extract every region a row yields, dispatching on the source kind.
    ///
    /// Rows whose accession is absent from the index are skipped for every
    /// kind, including literal-sequence where the index is otherwise unused:
    /// accession presence doubles as a cheap validity gate.
    pub fn extract_row(
        &self,
        kind: SourceKind,
        record: &StringRecord,
    ) -> Result<Vec<String>, RowSkip> {
        let accession = non_empty_field(record, ACCESSION_COLUMN).ok_or(RowSkip::MissingField)?;
        let residues = self
            .index
            .get(accession)
            .ok_or(RowSkip::UnknownAccession)?;

        match kind {
            SourceKind::CoordinateInText => self.coordinates_in_text(record, residues),
            SourceKind::ExplicitRange => explicit_range(record, residues),
            SourceKind::LiteralSequence => literal_sequence(record),
            SourceKind::ResiduePerLine => Err(RowSkip::UnsupportedFormat),
        }
    }

    /// Scan the annotation field for `(start-end)` tokens; one row may carry
    /// several. Tokens that do not slice cleanly are dropped individually.
    fn coordinates_in_text(
        &self,
        record: &StringRecord,
        residues: &str,
    ) -> Result<Vec<String>, RowSkip> {
        let annotation =
            non_empty_field(record, SourceKind::ANNOTATION_COLUMN).ok_or(RowSkip::MissingField)?;

        let mut regions = Vec::new();
        for captures in self.coordinate_re.captures_iter(annotation) {
            let (Ok(start), Ok(end)) = (captures[1].parse::<usize>(), captures[2].parse::<usize>())
            else {
                continue;
            };
            if let Some(region) = slice_region(residues, start, end) {
                if region.len() >= MIN_REGION_LEN {
                    regions.push(region.to_string());
                }
            }
        }

        Ok(regions)
    }
}

/// Read the start/end columns and slice the single region they describe.
fn explicit_range(record: &StringRecord, residues: &str) -> Result<Vec<String>, RowSkip> {
    let start_field =
        non_empty_field(record, SourceKind::START_COLUMN).ok_or(RowSkip::MissingField)?;
    let end_field = non_empty_field(record, SourceKind::END_COLUMN).ok_or(RowSkip::MissingField)?;

    let start: usize = start_field.parse().map_err(|_| RowSkip::BadCoordinate)?;
    let end: usize = end_field.parse().map_err(|_| RowSkip::BadCoordinate)?;

    let region = slice_region(residues, start, end).ok_or(RowSkip::OutOfBounds)?;
    if region.len() < MIN_REGION_LEN {
        return Err(RowSkip::TooShort);
    }

    Ok(vec![region.to_string()])
}

/// The region text is given verbatim; no slicing against the index.
fn literal_sequence(record: &StringRecord) -> Result<Vec<String>, RowSkip> {
    let region =
        non_empty_field(record, SourceKind::SEQUENCE_COLUMN).ok_or(RowSkip::MissingField)?;
    if region.len() < MIN_REGION_LEN {
        return Err(RowSkip::TooShort);
    }

    Ok(vec![region.to_string()])
}

/// Slice a 1-based inclusive `[start, end]` range out of the residues.
///
/// Returns `None` when the range does not describe a valid region: zero
/// start, inverted bounds, or an end past the sequence.
fn slice_region(residues: &str, start: usize, end: usize) -> Option<&str> {
    if start == 0 || end < start {
        return None;
    }
    residues.get(start - 1..end)
}

/// Trimmed field at the offset, `None` when absent or empty
fn non_empty_field(record: &StringRecord, column: usize) -> Option<&str> {
    let field = record.get(column)?.trim();
    if field.is_empty() {
        None
    } else {
        Some(field)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn index_with(accession: &str, residues: &str) -> SequenceIndex {
        format!(">sp|{}|TEST\n{}\n", accession, residues)
            .parse()
            .unwrap()
    }

    fn row(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_coordinate_in_text_single_token() {
        let index = index_with("P1", "MKVLAGTDEFQRS");
        let extractor = RegionExtractor::new(&index);

        let record = row(&["x", "y", "P1", "z", "D_WC: (1-12)"]);
        let regions = extractor
            .extract_row(SourceKind::CoordinateInText, &record)
            .unwrap();

        // Positions 1-12 inclusive, 1-based
        assert_eq!(regions, vec!["MKVLAGTDEFQR".to_string()]);
        assert_eq!(regions[0].len(), 12);
    }

    #[test]
    fn test_coordinate_in_text_multiple_tokens() {
        let index = index_with("P1", "MKVLAGTDEFQRSAAAAAAAAAAWWWWWWWWWW");
        let extractor = RegionExtractor::new(&index);

        let record = row(&["x", "y", "P1", "z", "D_WC: (1-13), D_PA: (14-33)"]);
        let regions = extractor
            .extract_row(SourceKind::CoordinateInText, &record)
            .unwrap();

        assert_eq!(
            regions,
            vec![
                "MKVLAGTDEFQRS".to_string(),
                "AAAAAAAAAAWWWWWWWWWW".to_string(),
            ]
        );
    }

    #[test]
    fn test_coordinate_in_text_short_region_filtered() {
        let index = index_with("P1", "MKVLAGTDEFQRS");
        let extractor = RegionExtractor::new(&index);

        // (1-5) is five residues, below the minimum; (1-12) passes
        let record = row(&["x", "y", "P1", "z", "(1-5) (1-12)"]);
        let regions = extractor
            .extract_row(SourceKind::CoordinateInText, &record)
            .unwrap();

        assert_eq!(regions, vec!["MKVLAGTDEFQR".to_string()]);
    }

    #[test]
    fn test_coordinate_in_text_no_tokens() {
        let index = index_with("P1", "MKVLAGTDEFQRS");
        let extractor = RegionExtractor::new(&index);

        let record = row(&["x", "y", "P1", "z", "fully ordered"]);
        let regions = extractor
            .extract_row(SourceKind::CoordinateInText, &record)
            .unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn test_coordinate_in_text_invalid_token_dropped() {
        let index = index_with("P1", "MKVLAGTDEFQRS");
        let extractor = RegionExtractor::new(&index);

        // (5-200) is out of bounds, (0-12) has a zero start; only (1-12) slices
        let record = row(&["x", "y", "P1", "z", "(5-200) (0-12) (1-12)"]);
        let regions = extractor
            .extract_row(SourceKind::CoordinateInText, &record)
            .unwrap();
        assert_eq!(regions, vec!["MKVLAGTDEFQR".to_string()]);
    }

    #[test]
    fn test_explicit_range_inclusive_bounds() {
        let index = index_with("P1", "ABCDEFGHIJKLMNOPQRST");
        let extractor = RegionExtractor::new(&index);

        let record = row(&["x", "y", "P1", "z", "5", "14"]);
        let regions = extractor
            .extract_row(SourceKind::ExplicitRange, &record)
            .unwrap();

        // 1-based positions 5 through 14 inclusive: ten residues
        assert_eq!(regions, vec!["EFGHIJKLMN".to_string()]);
        assert_eq!(regions[0].len(), 10);
    }

    #[test]
    fn test_explicit_range_bad_integer() {
        let index = index_with("P1", "ABCDEFGHIJKLMNOPQRST");
        let extractor = RegionExtractor::new(&index);

        let record = row(&["x", "y", "P1", "z", "five", "14"]);
        let result = extractor.extract_row(SourceKind::ExplicitRange, &record);
        assert_eq!(result, Err(RowSkip::BadCoordinate));
    }

    #[test]
    fn test_explicit_range_out_of_bounds() {
        let index = index_with("P1", "ABCDEFGHIJKLMNOPQRST");
        let extractor = RegionExtractor::new(&index);

        let record = row(&["x", "y", "P1", "z", "5", "100"]);
        let result = extractor.extract_row(SourceKind::ExplicitRange, &record);
        assert_eq!(result, Err(RowSkip::OutOfBounds));
    }

    #[test]
    fn test_explicit_range_too_short() {
        let index = index_with("P1", "ABCDEFGHIJKLMNOPQRST");
        let extractor = RegionExtractor::new(&index);

        let record = row(&["x", "y", "P1", "z", "1", "9"]);
        let result = extractor.extract_row(SourceKind::ExplicitRange, &record);
        assert_eq!(result, Err(RowSkip::TooShort));
    }

    #[test]
    fn test_literal_sequence_passthrough() {
        let index = index_with("P1", "ABCDEFGHIJKLMNOPQRST");
        let extractor = RegionExtractor::new(&index);

        let record = row(&["x", "y", "P1", "z", "a", "b", "GGGGSSSSGGGGSSSS"]);
        let regions = extractor
            .extract_row(SourceKind::LiteralSequence, &record)
            .unwrap();
        assert_eq!(regions, vec!["GGGGSSSSGGGGSSSS".to_string()]);
    }

    #[test]
    fn test_literal_sequence_still_gated_on_index() {
        let index = index_with("P1", "ABCDEFGHIJKLMNOPQRST");
        let extractor = RegionExtractor::new(&index);

        // P9 is not indexed; the literal text is present but the gate applies
        let record = row(&["x", "y", "P9", "z", "a", "b", "GGGGSSSSGGGGSSSS"]);
        let result = extractor.extract_row(SourceKind::LiteralSequence, &record);
        assert_eq!(result, Err(RowSkip::UnknownAccession));
    }

    #[test]
    fn test_literal_sequence_too_short() {
        let index = index_with("P1", "ABCDEFGHIJKLMNOPQRST");
        let extractor = RegionExtractor::new(&index);

        let record = row(&["x", "y", "P1", "z", "a", "b", "GGGGS"]);
        let result = extractor.extract_row(SourceKind::LiteralSequence, &record);
        assert_eq!(result, Err(RowSkip::TooShort));
    }

    #[test]
    fn test_unknown_accession_for_every_kind() {
        let index = index_with("P1", "ABCDEFGHIJKLMNOPQRST");
        let extractor = RegionExtractor::new(&index);

        let record = row(&["x", "y", "MISSING", "z", "(1-12)", "14", "GGGGSSSSGGGGSSSS"]);
        for kind in [
            SourceKind::CoordinateInText,
            SourceKind::ExplicitRange,
            SourceKind::LiteralSequence,
        ] {
            assert_eq!(
                extractor.extract_row(kind, &record),
                Err(RowSkip::UnknownAccession)
            );
        }
    }

    #[test]
    fn test_residue_per_line_unsupported() {
        let index = index_with("P1", "ABCDEFGHIJKLMNOPQRST");
        let extractor = RegionExtractor::new(&index);

        let record = row(&["x", "y", "P1", "D"]);
        let result = extractor.extract_row(SourceKind::ResiduePerLine, &record);
        assert_eq!(result, Err(RowSkip::UnsupportedFormat));
    }

    #[test]
    fn test_missing_accession_field() {
        let index = index_with("P1", "ABCDEFGHIJKLMNOPQRST");
        let extractor = RegionExtractor::new(&index);

        let record = row(&["x", "y"]);
        let result = extractor.extract_row(SourceKind::ExplicitRange, &record);
        assert_eq!(result, Err(RowSkip::MissingField));
    }

    #[test]
    fn test_slice_region_bounds() {
        assert_eq!(slice_region("ABCDEF", 1, 3), Some("ABC"));
        assert_eq!(slice_region("ABCDEF", 6, 6), Some("F"));
        assert_eq!(slice_region("ABCDEF", 0, 3), None);
        assert_eq!(slice_region("ABCDEF", 4, 3), None);
        assert_eq!(slice_region("ABCDEF", 1, 7), None);
    }
}

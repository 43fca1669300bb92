//! Training-corpus output
//!
//! One extracted region per line, newline-terminated, nothing else injected
//! between records. A separator token (e.g. `<|endoftext|>`) can optionally
//! be appended to each line for tokenizers that expect one.

use std::collections::HashSet;
use std::io::{BufWriter, Write};
use std::path::Path;

use idr_common::Result;
use tracing::info;

/// Write the deduplicated regions to a plain-text file.
///
/// Region order follows set iteration and is arbitrary.
pub fn write_corpus(
    path: impl AsRef<Path>,
    regions: &HashSet<String>,
    separator: Option<&str>,
) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);

    for region in regions {
        match separator {
            Some(token) => writeln!(writer, "{}{}", region, token)?,
            None => writeln!(writer, "{}", region)?,
        }
    }
    writer.flush()?;

    info!(
        path = %path.display(),
        regions = regions.len(),
        "Wrote training corpus"
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn regions(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_one_region_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");

        let set = regions(&["MKVLAGTDEFQR", "EFGHIJKLMN"]);
        write_corpus(&path, &set, None).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));

        let lines: HashSet<String> = content.lines().map(str::to_string).collect();
        assert_eq!(lines, set);
    }

    #[test]
    fn test_separator_variant() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");

        let set = regions(&["MKVLAGTDEFQR"]);
        write_corpus(&path, &set, Some("<|endoftext|>")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "MKVLAGTDEFQR<|endoftext|>\n");
    }

    #[test]
    fn test_empty_set_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");

        write_corpus(&path, &HashSet::new(), None).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.is_empty());
    }
}

//! End-to-end tests for the idr extract command
//!
//! These tests validate the full extraction workflow against on-disk
//! fixtures: annotation files, a FASTA artifact, and the YAML config.

use assert_cmd::Command;
use predicates::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// P1 has 13 residues, P2 has 20
const FASTA: &str = ">sp|P1|TEST1\nMKVLAGTDEFQRS\n>sp|P2|TEST2\nABCDEFGHIJKLMNOPQRST\n";

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

fn write_config(dir: &TempDir, body: &str) -> PathBuf {
    write_file(dir.path(), "idr.yml", body)
}

fn corpus_lines(path: &Path) -> HashSet<String> {
    fs::read_to_string(path)
        .expect("Failed to read corpus")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_extract_two_sources() {
    let dir = TempDir::new().unwrap();
    let fasta = write_file(dir.path(), "seqs.fasta", FASTA);
    let mobidb = write_file(
        dir.path(),
        "mobidb.txt",
        "entry\tname\tacc\ttype\tannotation\ne\tn\tP1\tx\tD_WC: (1-12)\n",
    );
    let d2p2 = write_file(
        dir.path(),
        "d2p2.txt",
        "entry\tname\tacc\ttype\tstart\tend\ne\tn\tP2\tx\t5\t14\n",
    );
    let corpus = dir.path().join("corpus.txt");

    let config = write_config(
        &dir,
        &format!(
            "sources:\n  - path: {}\n    kind: coordinate-in-text\n  - path: {}\n    kind: explicit-range\nfasta: {}\ncorpus: {}\n",
            mobidb.display(),
            d2p2.display(),
            fasta.display(),
            corpus.display(),
        ),
    );

    let mut cmd = Command::cargo_bin("idr").unwrap();
    cmd.arg("extract").arg("--config").arg(&config);
    cmd.assert().success();

    let expected: HashSet<String> = ["MKVLAGTDEFQR", "EFGHIJKLMN"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(corpus_lines(&corpus), expected);
}

#[test]
fn test_extract_deduplicates_across_sources() {
    let dir = TempDir::new().unwrap();
    let fasta = write_file(dir.path(), "seqs.fasta", FASTA);
    // Both sources describe the same P1 slice
    let mobidb = write_file(
        dir.path(),
        "mobidb.txt",
        "entry\tname\tacc\ttype\tannotation\ne\tn\tP1\tx\t(1-12)\n",
    );
    let d2p2 = write_file(
        dir.path(),
        "d2p2.txt",
        "entry\tname\tacc\ttype\tstart\tend\ne\tn\tP1\tx\t1\t12\n",
    );
    let corpus = dir.path().join("corpus.txt");

    let config = write_config(
        &dir,
        &format!(
            "sources:\n  - path: {}\n    kind: coordinate-in-text\n  - path: {}\n    kind: explicit-range\nfasta: {}\ncorpus: {}\n",
            mobidb.display(),
            d2p2.display(),
            fasta.display(),
            corpus.display(),
        ),
    );

    let mut cmd = Command::cargo_bin("idr").unwrap();
    cmd.arg("extract").arg("--config").arg(&config);
    cmd.assert().success();

    let lines = corpus_lines(&corpus);
    assert_eq!(lines.len(), 1);
    assert!(lines.contains("MKVLAGTDEFQR"));
}

#[test]
fn test_extract_separator_variant() {
    let dir = TempDir::new().unwrap();
    let fasta = write_file(dir.path(), "seqs.fasta", FASTA);
    let mobidb = write_file(
        dir.path(),
        "mobidb.txt",
        "entry\tname\tacc\ttype\tannotation\ne\tn\tP1\tx\t(1-12)\n",
    );
    let corpus = dir.path().join("corpus.txt");

    let config = write_config(
        &dir,
        &format!(
            "sources:\n  - path: {}\n    kind: coordinate-in-text\nfasta: {}\ncorpus: {}\nseparator: \"<|endoftext|>\"\n",
            mobidb.display(),
            fasta.display(),
            corpus.display(),
        ),
    );

    let mut cmd = Command::cargo_bin("idr").unwrap();
    cmd.arg("extract").arg("--config").arg(&config);
    cmd.assert().success();

    let content = fs::read_to_string(&corpus).unwrap();
    assert_eq!(content, "MKVLAGTDEFQR<|endoftext|>\n");
}

#[test]
fn test_extract_missing_artifact_fails_with_hint() {
    let dir = TempDir::new().unwrap();
    let corpus = dir.path().join("corpus.txt");

    let config = write_config(
        &dir,
        &format!(
            "sources: []\nfasta: {}\ncorpus: {}\n",
            dir.path().join("missing.fasta").display(),
            corpus.display(),
        ),
    );

    let mut cmd = Command::cargo_bin("idr").unwrap();
    cmd.arg("extract").arg("--config").arg(&config);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("idr fetch"));
}

#[test]
fn test_extract_missing_config_fails() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("idr").unwrap();
    cmd.arg("extract")
        .arg("--config")
        .arg(dir.path().join("nope.yml"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_extract_tolerates_unsupported_source() {
    let dir = TempDir::new().unwrap();
    let fasta = write_file(dir.path(), "seqs.fasta", FASTA);
    let iupred = write_file(
        dir.path(),
        "iupred.txt",
        "entry\tname\tacc\tcall\ne\tn\tP1\tD\n",
    );
    let d2p2 = write_file(
        dir.path(),
        "d2p2.txt",
        "entry\tname\tacc\ttype\tstart\tend\ne\tn\tP2\tx\t5\t14\n",
    );
    let corpus = dir.path().join("corpus.txt");

    let config = write_config(
        &dir,
        &format!(
            "sources:\n  - path: {}\n    kind: residue-per-line\n  - path: {}\n    kind: explicit-range\nfasta: {}\ncorpus: {}\n",
            iupred.display(),
            d2p2.display(),
            fasta.display(),
            corpus.display(),
        ),
    );

    let mut cmd = Command::cargo_bin("idr").unwrap();
    cmd.arg("extract").arg("--config").arg(&config);
    cmd.assert().success();

    let lines = corpus_lines(&corpus);
    assert_eq!(lines.len(), 1);
    assert!(lines.contains("EFGHIJKLMN"));
}

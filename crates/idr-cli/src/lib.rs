//! IDR CLI Library
//!
//! Command-line interface for preparing an IDR training corpus:
//!
//! - **Fetch**: collect accessions from the configured annotation files and
//!   download their full sequences as a FASTA artifact (`idr fetch`)
//! - **Extract**: slice disorder regions out of the fetched sequences and
//!   write the deduplicated corpus (`idr extract`)
//! - **Run**: both stages back to back (`idr run`)

pub mod commands;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::PipelineConfig;
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// IDR - training-corpus preparation for disordered protein regions
#[derive(Parser, Debug)]
#[command(name = "idr")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect accessions and download their sequences
    Fetch {
        /// Pipeline config file
        #[arg(short, long, default_value = "idr.yml")]
        config: PathBuf,

        /// Sequence retrieval endpoint
        #[arg(long, default_value = idr_ingest::uniprot::DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// Slice disorder regions and write the training corpus
    Extract {
        /// Pipeline config file
        #[arg(short, long, default_value = "idr.yml")]
        config: PathBuf,
    },

    /// Run the full pipeline, fetch then extract
    Run {
        /// Pipeline config file
        #[arg(short, long, default_value = "idr.yml")]
        config: PathBuf,

        /// Sequence retrieval endpoint
        #[arg(long, default_value = idr_ingest::uniprot::DEFAULT_BASE_URL)]
        base_url: String,
    },
}

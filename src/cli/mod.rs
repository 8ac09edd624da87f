//! Command-line interface for virtual-pcr.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **scan**: Find amplicons for a primer pair across a FASTA genome
//! - **revcomp**: Print the reverse complement of one or more sequences
//!
//! ## Usage
//!
//! ```text
//! # Exact primer matches, products between 100 and 2000 bp
//! virtual-pcr scan -g genome.fa -f GACTGATACGTTAGC -r ATCTGTGTCCAGTTA -l 100 -u 2000
//!
//! # Allow two mismatches per primer, JSON output
//! virtual-pcr scan -g genome.fa.gz -f ... -r ... -l 100 -u 2000 -m 2 --format json
//!
//! # Reverse complement a primer
//! virtual-pcr revcomp ATCTGTGT
//! ```

use clap::{Parser, Subcommand};

pub mod revcomp;
pub mod scan;

#[derive(Parser)]
#[command(name = "virtual-pcr")]
#[command(version)]
#[command(about = "In-silico PCR: find primer binding sites and amplicon sizes in a genome")]
#[command(
    long_about = "virtual-pcr locates every position where a primer pair can bind a reference genome, allowing a bounded number of substitution mismatches, and reports the resulting amplicons.\n\nBoth strand orientations are searched:\n- Pattern 1: forward primer on the forward strand, reverse primer downstream on the reverse strand\n- Pattern 2: reverse primer on the forward strand, forward primer downstream on the reverse strand"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find amplicons for a primer pair in a FASTA genome
    Scan(scan::ScanArgs),

    /// Print the reverse complement of nucleotide sequences
    Revcomp(revcomp::RevcompArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

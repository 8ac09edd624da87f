//! # virtual-pcr
//!
//! An in-silico PCR library: given a reference genome and a pair of primers,
//! find every genomic position where the primers could bind within a bounded
//! number of substitution mismatches and report the resulting amplicons.
//!
//! ## Features
//!
//! - **Bounded-mismatch search**: substitution-only primer search, no indels
//! - **Both orientations**: "pattern 1" and "pattern 2" strand arrangements via reverse complement
//! - **Size window**: only products with `lower <= size <= upper` are reported
//! - **Parallel scanning**: chromosomes are scanned concurrently, results stay in genome order
//! - **FASTA input**: plain or gzip/bgzip compressed genomes
//!
//! ## Example
//!
//! ```rust,no_run
//! use virtual_pcr::{ScanConfig, ScanEngine};
//! use virtual_pcr::parsing::fasta::{load_genome, LoadOptions};
//! use std::path::Path;
//!
//! let genome = load_genome(Path::new("genome.fa"), LoadOptions::default()).unwrap();
//! let config = ScanConfig::new("GACTGATA", "ATCTGTGT", 1, 1, 100).unwrap();
//!
//! for result in ScanEngine::new(&config).scan_genome(&genome) {
//!     for hit in &result.pattern_1 {
//!         println!("{}\t{}\t{}", result.chromosome, hit.start, hit.size);
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequences, genomes and result types
//! - [`matching`]: Primer search, amplicon pairing and the scan engine
//! - [`parsing`]: FASTA genome loading
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::genome::{Chromosome, Genome};
pub use crate::core::sequence::{Sequence, SequenceError};
pub use crate::core::types::*;
pub use matching::engine::{scan, scan_genome, ConfigError, ScanConfig, ScanEngine};

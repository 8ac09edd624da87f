//! Input parsers.
//!
//! - **FASTA genomes**: plain or gzip/bgzip compressed, loaded into a
//!   [`Genome`](crate::core::genome::Genome) keyed by record name
//!
//! ## Example
//!
//! ```rust,no_run
//! use virtual_pcr::parsing::fasta::{load_genome, LoadOptions};
//! use std::path::Path;
//!
//! let genome = load_genome(Path::new("genome.fa"), LoadOptions::default()).unwrap();
//! for chromosome in &genome {
//!     println!("{}\t{}", chromosome.name, chromosome.len());
//! }
//! ```

pub mod fasta;

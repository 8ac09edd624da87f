//! Core data types for in-silico PCR.
//!
//! - [`Sequence`](sequence::Sequence): an immutable nucleotide string with reverse complementation
//! - [`Genome`](genome::Genome) / [`Chromosome`](genome::Chromosome): named sequences in file order
//! - [`Match`](types::Match), [`AmpliconCandidate`](types::AmpliconCandidate): search and pairing output
//! - [`Orientation`](types::Orientation), [`ChromosomeScan`](types::ChromosomeScan): per-chromosome results
//!
//! ## Orientations
//!
//! Both strands are searched on the same sequence text. The opposite strand is
//! modeled by matching the reverse complement of a primer:
//!
//! | Orientation | Matched literally | Matched as reverse complement |
//! |-------------|-------------------|-------------------------------|
//! | pattern 1   | forward primer    | reverse primer                |
//! | pattern 2   | reverse primer    | forward primer                |

pub mod genome;
pub mod sequence;
pub mod types;

//! Primer-site search and amplicon pairing.
//!
//! - [`matcher`]: bounded-mismatch (substitution only) pattern search
//! - [`pairing`]: combines primer sites into amplicon candidates within a size window
//! - [`engine`]: [`ScanConfig`] and [`ScanEngine`], which run both orientations per chromosome
//!
//! ## Search Algorithm
//!
//! For each orientation the engine runs two independent searches over the
//! chromosome text:
//!
//! 1. **Upstream sites**: the primer matched literally; match starts are kept
//! 2. **Downstream sites**: the other primer's reverse complement; match ends are kept
//! 3. **Pairing**: every (start, end) combination with `lower <= end - start <= upper`
//!
//! Primer search is first-fit and non-overlapping, so the reported sites (and
//! thus amplicon counts) depend on the mismatch budget in a way a
//! minimal-distance search would not.
//!
//! ## Example
//!
//! ```rust
//! use virtual_pcr::{Chromosome, ScanConfig, ScanEngine};
//!
//! let config = ScanConfig::new("GACTGATA", "ATCTGTGT", 0, 1, 100).unwrap();
//! let chromosome = Chromosome::new("chr1", "TTTTTTTTTTGACTGATATTTTTTTTTACACAGATTTTT");
//!
//! let result = ScanEngine::new(&config).scan(&chromosome);
//! assert_eq!(result.pattern_1.len(), 1);
//! assert_eq!(result.pattern_1[0].start, 10);
//! assert_eq!(result.pattern_1[0].size, 25);
//! ```

pub mod engine;
pub mod matcher;
pub mod pairing;

pub use engine::{ConfigError, ScanConfig, ScanEngine};

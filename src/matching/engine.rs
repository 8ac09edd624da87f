use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::genome::{Chromosome, Genome};
use crate::core::sequence::{complement_base, Sequence, SequenceError};
use crate::core::types::{AmpliconCandidate, ChromosomeScan, Orientation};
use crate::matching::matcher::ApproximateMatcher;
use crate::matching::pairing::{pair, SizeWindow};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid size window: lower limit {lower} must be positive and not exceed upper limit {upper}")]
    InvalidSizeWindow { lower: i64, upper: i64 },

    #[error("Invalid mismatch budget {0}: must be zero or greater")]
    InvalidBudget(i64),

    #[error("{0} primer is empty")]
    EmptyPrimer(&'static str),

    #[error("Invalid {role} primer: {source}")]
    InvalidPrimer {
        role: &'static str,
        #[source]
        source: SequenceError,
    },
}

/// Primers shorter than this are accepted but likely to produce spurious hits
pub const SHORT_PRIMER_WARNING: usize = 10;

/// Normalize a primer to uppercase and check it against the `ACGTN` alphabet.
///
/// Surrounding whitespace is ignored. An invalid base is reported with its
/// character position in the primer as given, leading whitespace included.
fn validate_primer(role: &'static str, primer: &str) -> Result<Sequence, ConfigError> {
    let trimmed = primer.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyPrimer(role));
    }
    let offset = primer.chars().take_while(|c| c.is_whitespace()).count();

    let normalized = trimmed.to_ascii_uppercase();
    if let Some((index, base)) = normalized
        .chars()
        .enumerate()
        .find(|&(_, c)| !u8::try_from(c).is_ok_and(|b| complement_base(b).is_some()))
    {
        return Err(ConfigError::InvalidPrimer {
            role,
            source: SequenceError::InvalidNucleotide {
                base,
                position: offset + index,
            },
        });
    }

    if normalized.len() < SHORT_PRIMER_WARNING {
        warn!(
            "{role} primer is very short ({} bp), may cause spurious matches",
            normalized.len()
        );
    }

    Ok(Sequence::from(normalized))
}

/// Validated primer pair and search parameters.
///
/// Primers are stored uppercase and their reverse complements are computed
/// once here, so a config can be shared by every chromosome scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    forward: Sequence,
    reverse: Sequence,
    forward_rc: Sequence,
    reverse_rc: Sequence,
    max_mismatches: usize,
    window: SizeWindow,
}

impl ScanConfig {
    /// Build a config from raw caller values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBudget` for a negative mismatch budget,
    /// `ConfigError::InvalidSizeWindow` if `lower_limit < 1` or
    /// `lower_limit > upper_limit`, `ConfigError::EmptyPrimer` for an empty
    /// primer, or `ConfigError::InvalidPrimer` if a primer contains a base
    /// outside `ACGTN`.
    pub fn new(
        forward_primer: &str,
        reverse_primer: &str,
        mismatches: i64,
        lower_limit: i64,
        upper_limit: i64,
    ) -> Result<Self, ConfigError> {
        let max_mismatches =
            usize::try_from(mismatches).map_err(|_| ConfigError::InvalidBudget(mismatches))?;

        if lower_limit < 1 || lower_limit > upper_limit {
            return Err(ConfigError::InvalidSizeWindow {
                lower: lower_limit,
                upper: upper_limit,
            });
        }

        let forward = validate_primer("forward", forward_primer)?;
        let reverse = validate_primer("reverse", reverse_primer)?;

        let forward_rc = forward
            .reverse_complement()
            .map_err(|source| ConfigError::InvalidPrimer {
                role: "forward",
                source,
            })?;
        let reverse_rc = reverse
            .reverse_complement()
            .map_err(|source| ConfigError::InvalidPrimer {
                role: "reverse",
                source,
            })?;

        Ok(Self {
            forward,
            reverse,
            forward_rc,
            reverse_rc,
            max_mismatches,
            window: SizeWindow::new(lower_limit, upper_limit),
        })
    }

    #[must_use]
    pub fn forward_primer(&self) -> &Sequence {
        &self.forward
    }

    #[must_use]
    pub fn reverse_primer(&self) -> &Sequence {
        &self.reverse
    }

    #[must_use]
    pub fn max_mismatches(&self) -> usize {
        self.max_mismatches
    }

    #[must_use]
    pub fn window(&self) -> SizeWindow {
        self.window
    }

    /// Primers used for an orientation: (matched literally, matched as reverse complement)
    #[must_use]
    pub fn primers_for(&self, orientation: Orientation) -> (&Sequence, &Sequence) {
        match orientation {
            Orientation::Pattern1 => (&self.forward, &self.reverse_rc),
            Orientation::Pattern2 => (&self.reverse, &self.forward_rc),
        }
    }
}

/// Runs primer-pair scans over chromosomes
pub struct ScanEngine<'a> {
    config: &'a ScanConfig,
}

impl<'a> ScanEngine<'a> {
    #[must_use]
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Candidates for one orientation on one sequence
    #[must_use]
    pub fn scan_orientation(&self, target: &[u8], orientation: Orientation) -> Vec<AmpliconCandidate> {
        let (upstream, downstream) = self.config.primers_for(orientation);
        let k = self.config.max_mismatches;

        let starts = ApproximateMatcher::new(upstream.as_bytes(), k).find(target);
        let ends = ApproximateMatcher::new(downstream.as_bytes(), k).find(target);

        debug!(
            "{orientation}: {} upstream sites, {} downstream sites",
            starts.len(),
            ends.len()
        );

        pair(&starts, &ends, self.config.window)
    }

    /// Both orientations on one chromosome
    #[must_use]
    pub fn scan(&self, chromosome: &Chromosome) -> ChromosomeScan {
        let target = chromosome.sequence.as_bytes();
        let scan = ChromosomeScan {
            chromosome: chromosome.name.clone(),
            pattern_1: self.scan_orientation(target, Orientation::Pattern1),
            pattern_2: self.scan_orientation(target, Orientation::Pattern2),
        };

        debug!(
            "{} ({} bp): {} pattern 1, {} pattern 2",
            chromosome.name,
            chromosome.len(),
            scan.pattern_1.len(),
            scan.pattern_2.len()
        );

        scan
    }

    /// Scan every chromosome in parallel on the current rayon pool.
    ///
    /// Results come back in genome order regardless of scheduling.
    #[must_use]
    pub fn scan_genome(&self, genome: &Genome) -> Vec<ChromosomeScan> {
        let results: Vec<ChromosomeScan> = genome
            .chromosomes()
            .par_iter()
            .map(|chromosome| self.scan(chromosome))
            .collect();

        info!(
            "Scanned {} chromosomes ({} bp), {} candidate amplicons",
            genome.len(),
            genome.total_length(),
            results.iter().map(ChromosomeScan::hit_count).sum::<usize>()
        );

        results
    }
}

/// Scan one chromosome with `config`
#[must_use]
pub fn scan(chromosome: &Chromosome, config: &ScanConfig) -> ChromosomeScan {
    ScanEngine::new(config).scan(chromosome)
}

/// Scan every chromosome of `genome` with `config`
#[must_use]
pub fn scan_genome(genome: &Genome, config: &ScanConfig) -> Vec<ChromosomeScan> {
    ScanEngine::new(config).scan_genome(genome)
}

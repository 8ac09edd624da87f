use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::{ChromosomeScan, Orientation};
use crate::matching::engine::{ScanConfig, ScanEngine};
use crate::parsing::fasta::{is_fasta_file, load_genome, LoadOptions};

const RULE_WIDTH: usize = 50;

#[derive(Args)]
pub struct ScanArgs {
    /// Reference genome (FASTA, optionally gzip/bgzip compressed)
    #[arg(short, long, required = true)]
    pub genome: PathBuf,

    /// Forward primer (5' to 3')
    #[arg(short = 'f', long, required = true)]
    pub f_primer: String,

    /// Reverse primer (5' to 3')
    #[arg(short = 'r', long, required = true)]
    pub r_primer: String,

    /// Maximum number of mismatches allowed between each primer and the genome
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    pub mismatch: i64,

    /// Minimum size for amplified fragment (bp)
    #[arg(short, long, required = true, allow_negative_numbers = true)]
    pub lower_limit: i64,

    /// Maximum size for amplified fragment (bp)
    #[arg(short, long, required = true, allow_negative_numbers = true)]
    pub upper_limit: i64,

    /// Fold genome sequence to uppercase before searching (soft-masked genomes)
    #[arg(long)]
    pub uppercase: bool,

    /// Number of worker threads (default: all available cores)
    #[arg(short, long)]
    pub threads: Option<usize>,
}

impl ScanArgs {
    /// Convert CLI values into a validated [`ScanConfig`]
    ///
    /// # Errors
    ///
    /// Returns an error if the primers, mismatch budget or size window are invalid.
    pub fn to_config(&self) -> anyhow::Result<ScanConfig> {
        Ok(ScanConfig::new(
            &self.f_primer,
            &self.r_primer,
            self.mismatch,
            self.lower_limit,
            self.upper_limit,
        )?)
    }
}

/// Execute scan subcommand
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the genome cannot be
/// loaded, or the worker pool cannot be created.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ScanArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    // Validate before touching the genome
    let config = args.to_config()?;

    if !is_fasta_file(&args.genome) {
        tracing::warn!(
            "{} does not have a FASTA extension, reading as FASTA anyway",
            args.genome.display()
        );
    }

    let genome = load_genome(
        &args.genome,
        LoadOptions {
            uppercase: args.uppercase,
        },
    )?;

    if verbose {
        eprintln!(
            "Primers: {} / {}, up to {} mismatches, size {}-{} bp",
            config.forward_primer(),
            config.reverse_primer(),
            config.max_mismatches(),
            config.window().lower,
            config.window().upper,
        );
    }

    let engine = ScanEngine::new(&config);
    let results = match args.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(|| engine.scan_genome(&genome)),
        None => engine.scan_genome(&genome),
    };

    if !results.iter().any(ChromosomeScan::has_hits) {
        eprintln!("No amplicons found.");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => write_text_report(&mut out, &results)?,
        OutputFormat::Json => write_json_report(&mut out, &results)?,
        OutputFormat::Tsv => write_tsv_report(&mut out, &results)?,
    }
    out.flush()?;

    Ok(())
}

/// Console report; chromosomes and orientations without hits are skipped
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_text_report<W: Write>(out: &mut W, results: &[ChromosomeScan]) -> std::io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);

    for scan in results.iter().filter(|s| s.has_hits()) {
        writeln!(out, "Matches on {}", scan.chromosome)?;
        writeln!(out, "{rule}")?;

        for orientation in Orientation::ALL {
            let hits = scan.results(orientation);
            if hits.is_empty() {
                continue;
            }
            let number = match orientation {
                Orientation::Pattern1 => 1,
                Orientation::Pattern2 => 2,
            };
            writeln!(
                out,
                "Pattern {number} matches ({})",
                orientation.description()
            )?;
            writeln!(out, "{rule}")?;
            for hit in hits {
                writeln!(out, "Start position: {}", hit.start)?;
                writeln!(out, "Length (bp) : {}", hit.size)?;
                writeln!(out, "{rule}")?;
            }
        }
    }

    Ok(())
}

/// All chromosomes as a JSON array, including those without hits
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json_report<W: Write>(out: &mut W, results: &[ChromosomeScan]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}

/// One row per amplicon candidate
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_tsv_report<W: Write>(out: &mut W, results: &[ChromosomeScan]) -> std::io::Result<()> {
    writeln!(out, "chromosome\tpattern\tstart\tsize")?;
    for scan in results {
        for orientation in Orientation::ALL {
            for hit in scan.results(orientation) {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    scan.chromosome, orientation, hit.start, hit.size
                )?;
            }
        }
    }
    Ok(())
}

//! Genome loader for FASTA files using noodles.
//!
//! Each record becomes one [`Chromosome`]. The record name is the full
//! definition line after `>` (description included), and the sequence lines
//! are concatenated with line terminators and other whitespace dropped.
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;
use tracing::info;

use crate::core::genome::{Chromosome, Genome};
use crate::core::sequence::Sequence;
use crate::utils::validation::{check_record_limit, MAX_RECORDS};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many records: {0} exceeds maximum allowed ({MAX_RECORDS})")]
    TooManyRecords(usize),
}

/// Options applied while loading a genome
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Fold all bases to uppercase (unmasks soft-masked regions)
    pub uppercase: bool,
}

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Load a FASTA file into a [`Genome`].
///
/// An empty file yields an empty genome.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// a record is malformed, or `ParseError::TooManyRecords` if the limit is exceeded.
pub fn load_genome(path: &Path, options: LoadOptions) -> Result<Genome, ParseError> {
    let file = std::fs::File::open(path)?;

    let genome = if is_gzipped(path) {
        read_genome(BufReader::new(MultiGzDecoder::new(file)), options)?
    } else {
        read_genome(BufReader::new(file), options)?
    };

    info!(
        "Loaded {} chromosomes ({} bp) from {}",
        genome.len(),
        genome.total_length(),
        path.display()
    );

    Ok(genome)
}

/// Read a genome from any buffered FASTA source
///
/// The name is the definition line with only the leading `>` removed, so tabs
/// and repeated spaces survive and a bare `>` names a record `""`. Blank lines
/// outside sequences are skipped.
///
/// # Errors
///
/// Returns `ParseError::Io` if reading fails, `ParseError::Noodles` if a
/// non-blank line appears where a definition line is expected, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn read_genome<R: BufRead>(reader: R, options: LoadOptions) -> Result<Genome, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut genome = Genome::new();
    let mut count = 0usize;
    let mut definition = String::new();

    loop {
        definition.clear();
        if fasta_reader.read_definition(&mut definition)? == 0 {
            break;
        }

        if definition.trim().is_empty() {
            continue;
        }

        let Some(name) = definition.strip_prefix('>') else {
            return Err(ParseError::Noodles(format!(
                "Failed to parse FASTA record: expected definition line, found {definition:?}"
            )));
        };

        // Check record limit for DOS protection
        if check_record_limit(count).is_some() {
            return Err(ParseError::TooManyRecords(count));
        }
        count += 1;

        let mut bases = Vec::new();
        fasta_reader.read_sequence(&mut bases)?;

        genome.insert(Chromosome::new(name, record_sequence(bases, options)));
    }

    Ok(genome)
}

fn record_sequence(mut bases: Vec<u8>, options: LoadOptions) -> Sequence {
    bases.retain(|b| !b.is_ascii_whitespace());
    if options.uppercase {
        bases.make_ascii_uppercase();
    }
    Sequence::from(bases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("test.fna")));
        assert!(is_fasta_file(Path::new("test.fa.gz")));
        assert!(is_fasta_file(Path::new("test.fna.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/Genome.FA")));

        assert!(!is_fasta_file(Path::new("test.bam")));
        assert!(!is_fasta_file(Path::new("test.fai")));
    }

    #[test]
    fn test_read_single_and_multi_line() {
        let content = b">chr1\nACGTACGT\nACGT\n>chr2\nGGGG\n";
        let genome = read_genome(&content[..], LoadOptions::default()).unwrap();

        assert_eq!(genome.len(), 2);
        assert_eq!(genome.get("chr1").unwrap().sequence, Sequence::from("ACGTACGTACGT"));
        assert_eq!(genome.get("chr2").unwrap().sequence, Sequence::from("GGGG"));
    }

    #[test]
    fn test_name_keeps_description() {
        let content = b">chr1 Homo sapiens chromosome 1\nACGT\n";
        let genome = read_genome(&content[..], LoadOptions::default()).unwrap();

        assert_eq!(
            genome.chromosomes()[0].name,
            "chr1 Homo sapiens chromosome 1"
        );
    }

    #[test]
    fn test_case_handling() {
        let content = b">chr1\nacgtNN\nACgt\n";

        let genome = read_genome(&content[..], LoadOptions::default()).unwrap();
        assert_eq!(genome.get("chr1").unwrap().sequence, Sequence::from("acgtNNACgt"));

        let genome = read_genome(&content[..], LoadOptions { uppercase: true }).unwrap();
        assert_eq!(genome.get("chr1").unwrap().sequence, Sequence::from("ACGTNNACGT"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = b">chr1\r\nACGT\r\nTTGG\r\n";
        let genome = read_genome(&content[..], LoadOptions::default()).unwrap();
        assert_eq!(genome.get("chr1").unwrap().sequence, Sequence::from("ACGTTTGG"));
    }

    #[test]
    fn test_empty_input_is_empty_genome() {
        let genome = read_genome(&b""[..], LoadOptions::default()).unwrap();
        assert!(genome.is_empty());
    }

    #[test]
    fn test_name_is_raw_definition_line() {
        let content = b">chr1\tdesc  here\nACGT\n";
        let genome = read_genome(&content[..], LoadOptions::default()).unwrap();
        assert_eq!(genome.chromosomes()[0].name, "chr1\tdesc  here");
    }

    #[test]
    fn test_bare_definition_line_is_empty_name() {
        let content = b">chr1\nACGT\n\nTTTT\n>\nGG\n";
        let genome = read_genome(&content[..], LoadOptions::default()).unwrap();

        assert_eq!(genome.len(), 2);
        assert_eq!(genome.get("chr1").unwrap().sequence, Sequence::from("ACGTTTTT"));
        assert_eq!(genome.get("").unwrap().sequence, Sequence::from("GG"));
    }

    #[test]
    fn test_leading_blank_lines_are_skipped() {
        let genome = read_genome(&b"\n\n>chr1\nACGT\n"[..], LoadOptions::default()).unwrap();
        assert_eq!(genome.get("chr1").unwrap().sequence, Sequence::from("ACGT"));

        let genome = read_genome(&b"\n"[..], LoadOptions::default()).unwrap();
        assert!(genome.is_empty());
    }

    #[test]
    fn test_sequence_before_definition_is_rejected() {
        let result = read_genome(&b"ACGT\n>chr1\nACGT\n"[..], LoadOptions::default());
        assert!(matches!(result, Err(ParseError::Noodles(_))));
    }

    #[test]
    fn test_load_genome_file() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">chr1\nACGT\nAC\n").unwrap();
        temp.flush().unwrap();

        let genome = load_genome(temp.path(), LoadOptions::default()).unwrap();
        assert_eq!(genome.len(), 1);
        assert_eq!(genome.get("chr1").unwrap().len(), 6);
    }

    #[test]
    fn test_load_gzipped_genome() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">chr1\nACGT\n>chr2\nTTTT\nCC\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let genome = load_genome(temp.path(), LoadOptions::default()).unwrap();
        assert_eq!(genome.len(), 2);
        assert_eq!(genome.get("chr2").unwrap().sequence, Sequence::from("TTTTCC"));
    }

    #[test]
    fn test_missing_file() {
        let result = load_genome(Path::new("/nonexistent/genome.fa"), LoadOptions::default());
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}

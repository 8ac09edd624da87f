use clap::Args;

use crate::cli::OutputFormat;
use crate::core::sequence::Sequence;

#[derive(Args)]
pub struct RevcompArgs {
    /// Sequences to reverse complement (ACGTN)
    #[arg(required = true)]
    pub sequences: Vec<String>,

    /// Fold input to uppercase first
    #[arg(long)]
    pub uppercase: bool,
}

/// Execute revcomp subcommand
///
/// # Errors
///
/// Returns an error if any sequence contains a base outside `ACGTN`.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RevcompArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mut pairs = Vec::with_capacity(args.sequences.len());
    for input in &args.sequences {
        let mut seq = Sequence::from(input.as_str());
        if args.uppercase {
            seq = seq.to_uppercase();
        }
        let rc = seq
            .reverse_complement()
            .map_err(|e| anyhow::anyhow!("{input}: {e}"))?;
        pairs.push((seq, rc));
    }

    match format {
        OutputFormat::Text => {
            for (_, rc) in &pairs {
                println!("{rc}");
            }
        }
        OutputFormat::Tsv => {
            println!("sequence\treverse_complement");
            for (seq, rc) in &pairs {
                println!("{seq}\t{rc}");
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = pairs
                .iter()
                .map(|(seq, rc)| {
                    serde_json::json!({
                        "sequence": seq,
                        "reverse_complement": rc,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

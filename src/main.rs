use clap::Parser;
use tracing_subscriber::EnvFilter;

use virtual_pcr::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("virtual_pcr=debug,info")
    } else {
        EnvFilter::new("virtual_pcr=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Scan(args) => {
            cli::scan::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Revcomp(args) => {
            cli::revcomp::run(args, cli.format)?;
        }
    }

    Ok(())
}

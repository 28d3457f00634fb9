//! Command-line front end: checks the tag nesting of one markup file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Check that every start tag in a markup file is closed in order.
#[derive(Parser, Debug)]
#[command(name = "tagnest", version, about)]
struct Cli {
    /// Markup file to check.
    file: PathBuf,

    /// Log more (-v debug, -vv trace); ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Exit with status 1 when the document is not well-formed.
    #[arg(long)]
    strict: bool,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Diagnostics go to stdout; logs must never mix with them.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    println!("Parsing XML file: {}", cli.file.display());
    let outcome = tags::validate_path(&cli.file)
        .with_context(|| format!("error reading file {}", cli.file.display()))?;
    log::debug!("{} diagnostics", outcome.diagnostics.len());

    print!("{}", outcome.report());
    if outcome.well_formed {
        println!();
    }

    if cli.strict && !outcome.well_formed {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

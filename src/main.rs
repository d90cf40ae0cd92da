//! wirehash - Wire-Contract Fingerprinting Tool
//!
//! Computes the codebase hash of a serialization contract so independently
//! built components can detect version skew before any traffic flows.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

use cli::{commands, OutputFormat};

/// wirehash - Wire-contract fingerprinting
#[derive(Parser)]
#[command(
    name = "wirehash",
    version,
    about = "Wire-contract fingerprinting for independently deployed fleet components",
    long_about = "wirehash computes a deterministic digest over the structural shape of every \
                  type a component puts on the shared binary channel.\n\n\
                  Two independently built artifacts whose codebase hashes match are guaranteed \
                  to agree on field names, declared types, and inherited fields for every type \
                  in scope; a mismatch means the serialization contracts have diverged."
)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(short, long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Also write the fingerprint report (JSON) to this file
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fingerprint every type the built-in registrars register
    Registry,

    /// Fingerprint the types listed in a dependency manifest
    Manifest {
        /// Path to the manifest (one colon-delimited entry per line)
        manifest: PathBuf,
    },
}

fn init_logging(verbosity: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbosity {
            0 => EnvFilter::new("wirehash=info"),
            1 => EnvFilter::new("wirehash=debug"),
            2 => EnvFilter::new("wirehash=trace"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr; stdout carries nothing but the hash line (or the
    // JSON report) so the output can be piped.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Registry => {
            commands::registry::run(cli.format, cli.output.as_deref())?;
        }
        Commands::Manifest { manifest } => {
            commands::manifest::run(&manifest, cli.format, cli.output.as_deref())?;
        }
    }

    Ok(())
}

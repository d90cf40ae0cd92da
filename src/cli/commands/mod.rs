//! Command implementations for the two fingerprinting modes

pub mod manifest;
pub mod registry;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

use wirehash::fingerprinting::Fingerprint;

use super::OutputFormat;

/// Emit a finished fingerprint on stdout and optionally persist the report.
///
/// Text mode prints exactly one line on stdout; everything else the tool has
/// to say goes through the tracing layer on stderr, so the hash stays
/// pipeline-safe.
pub(crate) fn emit(
    fingerprint: &Fingerprint,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(fingerprint)?);
        }
        OutputFormat::Text => {
            println!("{} {}", "Codebase Hash:".cyan(), fingerprint.aggregate);
        }
    }

    if let Some(path) = output {
        let report = serde_json::to_string_pretty(fingerprint)?;
        fs::write(path, report)
            .with_context(|| format!("cannot write fingerprint report to {}", path.display()))?;
        info!(path = %path.display(), "fingerprint report written");
    }

    Ok(())
}

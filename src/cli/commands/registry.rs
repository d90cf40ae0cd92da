//! Registry command - whole-registry fingerprinting
//!
//! Applies the built-in registrar list and fingerprints every registered
//! type, unfiltered.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use wirehash::pipeline::FingerprintPipeline;
use wirehash::protocol::builtin_registrars;
use wirehash::registry::populated_registry;

use crate::cli::commands::emit;
use crate::cli::OutputFormat;

pub fn run(format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let registrars = builtin_registrars();
    debug!(registrars = registrars.len(), "applying built-in registrars");
    let registry = populated_registry(&registrars);
    info!(types = registry.len(), "registry populated");

    let mut pipeline = FingerprintPipeline::new(&registry);
    let fingerprint = pipeline.run_registry()?;

    info!(
        types = fingerprint.type_count(),
        aggregate = fingerprint.short_aggregate(),
        "whole-registry fingerprint computed"
    );
    emit(&fingerprint, format, output)
}

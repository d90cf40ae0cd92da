//! Manifest command - dependency-manifest fingerprinting
//!
//! Scopes the fingerprint to the types one deployable artifact depends on,
//! with platform types filtered out by the built-in ignore list.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use wirehash::pipeline::FingerprintPipeline;
use wirehash::protocol::builtin_registrars;
use wirehash::registry::populated_registry;
use wirehash::snapshot::IgnoreList;

use crate::cli::commands::emit;
use crate::cli::OutputFormat;

pub fn run(manifest: &Path, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let registry = populated_registry(&builtin_registrars());
    info!(manifest = %manifest.display(), types = registry.len(), "registry populated");

    let mut pipeline = FingerprintPipeline::new(&registry);
    let fingerprint = pipeline.run_manifest(manifest, &IgnoreList::builtin())?;

    info!(
        types = fingerprint.type_count(),
        aggregate = fingerprint.short_aggregate(),
        "manifest fingerprint computed"
    );
    emit(&fingerprint, format, output)
}

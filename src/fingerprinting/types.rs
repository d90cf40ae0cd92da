//! Fingerprint artifact
//!
//! The sole output of a pipeline run: every per-type digest plus the
//! aggregate codebase hash, immutable once produced. The timestamp and tool
//! version ride along in the serialized report for audit purposes and feed
//! no digest.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete wire-contract fingerprint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Per-type structural digests, keyed by qualified name
    pub per_type: BTreeMap<String, String>,

    /// Aggregate codebase hash over the sorted per-type digests
    pub aggregate: String,

    /// When this fingerprint was generated
    pub generated_at: DateTime<Utc>,

    /// wirehash version that generated it
    pub tool_version: String,
}

impl Fingerprint {
    /// Assemble the artifact from the composer's inputs and output
    pub fn new(per_type: BTreeMap<String, String>, aggregate: impl Into<String>) -> Self {
        Self {
            per_type,
            aggregate: aggregate.into(),
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Number of types in scope
    pub fn type_count(&self) -> usize {
        self.per_type.len()
    }

    /// First 16 hex characters of the aggregate, for display
    pub fn short_aggregate(&self) -> &str {
        &self.aggregate[..16.min(self.aggregate.len())]
    }

    /// Per-type digest lookup
    pub fn digest_of(&self, qualified_name: &str) -> Option<&str> {
        self.per_type.get(qualified_name).map(String::as_str)
    }
}

//! Registration snapshot provider
//!
//! Produces the deduplicated set of qualified type names in scope for one
//! fingerprint run, in one of two modes:
//!
//! - **Whole-registry**: every type registered in a fully-populated
//!   [`MetadataRegistry`], unfiltered.
//! - **Dependency-manifest**: the types a manifest lists for one deployable
//!   artifact, filtered against the [`IgnoreList`] of platform types that
//!   both sides of the contract share by construction.

mod manifest;

pub use manifest::{parse_manifest, ManifestEntry};

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::WirehashError;
use crate::registry::MetadataRegistry;

/// Name prefixes excluded in dependency-manifest mode.
///
/// Scalar primitives and the standard container-library namespaces cannot
/// affect contract compatibility: both sides link the same platform
/// definitions.
const BUILTIN_IGNORED_PREFIXES: &[&str] = &[
    "bool", "char", "str", "String", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16",
    "u32", "u64", "u128", "usize", "f32", "f64", "std.", "core.", "alloc.", "collections.",
];

/// Immutable set of name prefixes dropped from manifest scopes
#[derive(Debug, Clone)]
pub struct IgnoreList {
    prefixes: Vec<String>,
}

impl IgnoreList {
    /// The built-in platform prefixes
    pub fn builtin() -> Self {
        Self::new(BUILTIN_IGNORED_PREFIXES.iter().copied())
    }

    /// An ignore list from custom prefixes
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// An ignore list that drops nothing
    pub fn empty() -> Self {
        Self {
            prefixes: Vec::new(),
        }
    }

    /// Whether the name matches any ignored prefix
    pub fn is_ignored(&self, qualified_name: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| qualified_name.starts_with(prefix.as_str()))
    }
}

/// The deduplicated set of qualified names entering the pipeline
#[derive(Debug, Clone)]
pub struct TypeScope {
    names: BTreeSet<String>,
}

impl TypeScope {
    /// Whole-registry mode: every registered name, unfiltered
    pub fn from_registry(registry: &MetadataRegistry) -> Self {
        let names: BTreeSet<String> = registry.registered_names().map(str::to_string).collect();
        debug!(types = names.len(), "collected whole-registry scope");
        Self { names }
    }

    /// Dependency-manifest mode: parse the file, drop ignored entries
    pub fn from_manifest_path(path: &Path, ignore: &IgnoreList) -> Result<Self, WirehashError> {
        let content = fs::read_to_string(path).map_err(|source| WirehashError::ManifestRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_manifest_str(&content, ignore)
    }

    /// Dependency-manifest mode over already-read manifest text
    pub fn from_manifest_str(content: &str, ignore: &IgnoreList) -> Result<Self, WirehashError> {
        let mut names = BTreeSet::new();
        for entry in parse_manifest(content)? {
            if ignore.is_ignored(&entry.qualified_name) {
                debug!(line = %entry.raw_line, "dropped platform type from scope");
                continue;
            }
            names.insert(entry.qualified_name);
        }
        debug!(types = names.len(), "collected manifest scope");
        Ok(Self { names })
    }

    /// Names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.names.contains(qualified_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

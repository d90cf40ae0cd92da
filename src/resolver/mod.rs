//! Type resolution
//!
//! Turns a canonical dotted type name into a registered type handle.
//! Nested types are the complication: manifests print the dotted canonical
//! form (`fleet.task.TaskResult.Failure`) while the registry keys nested
//! types by their legacy loadable form (`fleet.task.TaskResult$Failure`).
//! Resolution order:
//!
//! 1. Override table (always wins, even when direct lookup would succeed).
//! 2. Direct lookup by the given name.
//! 3. Nested fallback: rebind the final segment with the nested separator.
//!
//! Both attempts failing is fatal. A missing type is never skipped, because
//! a fingerprint that silently omits part of the contract is worse than no
//! fingerprint.

use std::collections::BTreeMap;

use tracing::warn;

use crate::errors::WirehashError;
use crate::registry::{MetadataRegistry, TypeMetadata};

/// Separator used in nested types' loadable names
pub const NESTED_SEPARATOR: char = '$';

/// Built-in overrides for names whose nested fallback would guess wrong.
///
/// The table is maintained by hand. To keep staleness observable, the
/// resolver logs a warning whenever the fallback heuristic rescues a name
/// that has no entry here.
const BUILTIN_OVERRIDES: &[(&str, &str)] = &[(
    "fleet.agent.AgentDescriptor.Capability.Limits",
    "fleet.agent.AgentDescriptor$Capability$Limits",
)];

/// Immutable map from canonical dotted names to loadable names
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: BTreeMap<String, String>,
}

impl OverrideTable {
    /// The built-in table for the fleet protocol's ambiguous names
    pub fn builtin() -> Self {
        let mut table = Self::default();
        for (canonical, loadable) in BUILTIN_OVERRIDES {
            table.entries.insert((*canonical).to_string(), (*loadable).to_string());
        }
        table
    }

    /// An empty table
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add one entry
    pub fn with_entry(mut self, canonical: impl Into<String>, loadable: impl Into<String>) -> Self {
        self.entries.insert(canonical.into(), loadable.into());
        self
    }

    /// Override target for the given canonical name, if any
    pub fn target(&self, canonical_name: &str) -> Option<&str> {
        self.entries.get(canonical_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves canonical dotted names against a metadata registry
pub struct TypeResolver<'a> {
    registry: &'a MetadataRegistry,
    overrides: OverrideTable,
}

impl<'a> TypeResolver<'a> {
    /// Resolver with the built-in override table
    pub fn new(registry: &'a MetadataRegistry) -> Self {
        Self::with_overrides(registry, OverrideTable::builtin())
    }

    /// Resolver with a custom override table
    pub fn with_overrides(registry: &'a MetadataRegistry, overrides: OverrideTable) -> Self {
        Self {
            registry,
            overrides,
        }
    }

    /// Resolve one qualified name to its registered handle
    pub fn resolve(&self, qualified_name: &str) -> Result<&'a TypeMetadata, WirehashError> {
        if let Some(target) = self.overrides.target(qualified_name) {
            return self
                .registry
                .get(target)
                .ok_or_else(|| WirehashError::type_resolution(qualified_name));
        }

        if let Some(handle) = self.registry.get(qualified_name) {
            return Ok(handle);
        }

        if let Some(nested) = nested_form(qualified_name) {
            if let Some(handle) = self.registry.get(&nested) {
                warn!(
                    canonical = qualified_name,
                    loadable = %nested,
                    "nested-name fallback resolved a type with no override entry"
                );
                return Ok(handle);
            }
        }

        Err(WirehashError::type_resolution(qualified_name))
    }
}

/// Rebind the final name segment as a nested type:
/// `pkg.Outer.Inner` becomes `pkg.Outer$Inner`.
fn nested_form(qualified_name: &str) -> Option<String> {
    let (outer, inner) = qualified_name.rsplit_once('.')?;
    Some(format!("{outer}{NESTED_SEPARATOR}{inner}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TypeMetadata;

    fn registry_with(names: &[&str]) -> MetadataRegistry {
        let mut registry = MetadataRegistry::new();
        for name in names {
            registry.register(TypeMetadata::new(*name).with_field("u32", "x"));
        }
        registry
    }

    #[test]
    fn direct_resolution() {
        let registry = registry_with(&["pkg.Plain"]);
        let resolver = TypeResolver::with_overrides(&registry, OverrideTable::empty());

        let handle = resolver.resolve("pkg.Plain").unwrap();
        assert_eq!(handle.type_name(), "pkg.Plain");
    }

    #[test]
    fn nested_fallback_resolution() {
        let registry = registry_with(&["pkg.Outer$Inner"]);
        let resolver = TypeResolver::with_overrides(&registry, OverrideTable::empty());

        let handle = resolver.resolve("pkg.Outer.Inner").unwrap();
        assert_eq!(handle.type_name(), "pkg.Outer$Inner");
    }

    #[test]
    fn override_wins_over_direct_resolution() {
        // Both the dotted name and the override target are registered; the
        // override must still take precedence.
        let registry = registry_with(&["pkg.Ambiguous", "pkg.Actual$Target"]);
        let overrides = OverrideTable::empty().with_entry("pkg.Ambiguous", "pkg.Actual$Target");
        let resolver = TypeResolver::with_overrides(&registry, overrides);

        let handle = resolver.resolve("pkg.Ambiguous").unwrap();
        assert_eq!(handle.type_name(), "pkg.Actual$Target");
    }

    #[test]
    fn override_with_missing_target_is_fatal() {
        let registry = registry_with(&["pkg.Ambiguous"]);
        let overrides = OverrideTable::empty().with_entry("pkg.Ambiguous", "pkg.Gone$Target");
        let resolver = TypeResolver::with_overrides(&registry, overrides);

        let err = resolver.resolve("pkg.Ambiguous").unwrap_err();
        assert!(matches!(err, WirehashError::TypeResolution { .. }));
    }

    #[test]
    fn unresolvable_name_is_fatal_and_named() {
        let registry = registry_with(&["pkg.Present"]);
        let resolver = TypeResolver::with_overrides(&registry, OverrideTable::empty());

        let err = resolver.resolve("pkg.Absent").unwrap_err();
        match err {
            WirehashError::TypeResolution { qualified_name } => {
                assert_eq!(qualified_name, "pkg.Absent");
            }
            other => panic!("expected TypeResolution, got {other:?}"),
        }
    }

    #[test]
    fn single_segment_name_has_no_nested_form() {
        assert!(nested_form("NoDots").is_none());

        let registry = registry_with(&[]);
        let resolver = TypeResolver::with_overrides(&registry, OverrideTable::empty());
        assert!(resolver.resolve("NoDots").is_err());
    }

    #[test]
    fn nested_form_rebinds_only_the_final_separator() {
        assert_eq!(nested_form("a.b.c.D"), Some("a.b.c$D".to_string()));
        assert_eq!(nested_form("pkg.Outer.Inner"), Some("pkg.Outer$Inner".to_string()));
    }

    #[test]
    fn builtin_table_covers_the_doubly_nested_capability_limits() {
        let table = OverrideTable::builtin();
        assert_eq!(
            table.target("fleet.agent.AgentDescriptor.Capability.Limits"),
            Some("fleet.agent.AgentDescriptor$Capability$Limits")
        );
    }

    #[test]
    fn doubly_nested_name_needs_the_override() {
        // The fallback rebinds only the last separator, which guesses wrong
        // for doubly nested types; the builtin table carries them.
        let registry = registry_with(&["fleet.agent.AgentDescriptor$Capability$Limits"]);

        let without = TypeResolver::with_overrides(&registry, OverrideTable::empty());
        assert!(without
            .resolve("fleet.agent.AgentDescriptor.Capability.Limits")
            .is_err());

        let with = TypeResolver::new(&registry);
        assert!(with
            .resolve("fleet.agent.AgentDescriptor.Capability.Limits")
            .is_ok());
    }
}

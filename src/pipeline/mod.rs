//! Mode orchestration
//!
//! Wires snapshot provider, resolver, canonicalizer, hasher and composer
//! into one strictly linear batch per invocation:
//!
//! `Idle → CollectingNames → Resolving → Hashing → Composing → Done | Failed`
//!
//! There is no retry loop and no branch back to an earlier state. The first
//! error moves the pipeline to `Failed` and aborts; a partial fingerprint is
//! never produced.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::errors::WirehashError;
use crate::fingerprinting::{canonical_fields, compose_aggregate, Fingerprint, StructuralHasher};
use crate::registry::MetadataRegistry;
use crate::resolver::{OverrideTable, TypeResolver};
use crate::snapshot::{IgnoreList, TypeScope};

/// Pipeline lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Nothing started
    Idle,
    /// Building the type scope
    CollectingNames,
    /// Resolving names to handles
    Resolving,
    /// Canonicalizing and hashing each type
    Hashing,
    /// Folding per-type digests into the aggregate
    Composing,
    /// Fingerprint produced
    Done,
    /// Aborted on the first error
    Failed,
}

impl std::fmt::Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PipelineState::Idle => "Idle",
            PipelineState::CollectingNames => "CollectingNames",
            PipelineState::Resolving => "Resolving",
            PipelineState::Hashing => "Hashing",
            PipelineState::Composing => "Composing",
            PipelineState::Done => "Done",
            PipelineState::Failed => "Failed",
        };
        write!(f, "{name}")
    }
}

impl PipelineState {
    /// Whether the state admits no further transitions
    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed)
    }

    /// Whether `next` is a legal successor of `self`
    pub fn can_transition_to(self, next: PipelineState) -> bool {
        use PipelineState::*;
        match (self, next) {
            (Idle, CollectingNames) => true,
            (CollectingNames, Resolving) => true,
            (Resolving, Hashing) => true,
            (Hashing, Composing) => true,
            (Composing, Done) => true,
            // Any non-terminal state can fail
            (from, Failed) => !from.is_terminal(),
            _ => false,
        }
    }

    /// Validated transition
    pub fn transition_to(self, next: PipelineState) -> Result<PipelineState, StateTransitionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(StateTransitionError {
                from: self,
                to: next,
            })
        }
    }
}

/// Error when attempting an invalid state transition
#[derive(Debug, Clone)]
pub struct StateTransitionError {
    pub from: PipelineState,
    pub to: PipelineState,
}

impl std::fmt::Display for StateTransitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid pipeline transition from {} to {}",
            self.from, self.to
        )
    }
}

impl std::error::Error for StateTransitionError {}

/// One fingerprint computation over a populated registry
pub struct FingerprintPipeline<'a> {
    registry: &'a MetadataRegistry,
    resolver: TypeResolver<'a>,
    state: PipelineState,
}

impl<'a> FingerprintPipeline<'a> {
    /// Pipeline with the built-in override table
    pub fn new(registry: &'a MetadataRegistry) -> Self {
        Self {
            registry,
            resolver: TypeResolver::new(registry),
            state: PipelineState::Idle,
        }
    }

    /// Pipeline with a custom override table
    pub fn with_overrides(registry: &'a MetadataRegistry, overrides: OverrideTable) -> Self {
        Self {
            registry,
            resolver: TypeResolver::with_overrides(registry, overrides),
            state: PipelineState::Idle,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Whole-registry mode: fingerprint every registered type
    pub fn run_registry(&mut self) -> Result<Fingerprint, WirehashError> {
        self.advance(PipelineState::CollectingNames);
        let scope = TypeScope::from_registry(self.registry);
        self.execute(scope)
    }

    /// Dependency-manifest mode: fingerprint the types a manifest lists
    pub fn run_manifest(
        &mut self,
        path: &Path,
        ignore: &IgnoreList,
    ) -> Result<Fingerprint, WirehashError> {
        self.advance(PipelineState::CollectingNames);
        let scope = match TypeScope::from_manifest_path(path, ignore) {
            Ok(scope) => scope,
            Err(err) => return Err(self.fail(err)),
        };
        self.execute(scope)
    }

    /// Fingerprint an already-collected scope
    pub fn run_scope(&mut self, scope: TypeScope) -> Result<Fingerprint, WirehashError> {
        self.advance(PipelineState::CollectingNames);
        self.execute(scope)
    }

    fn execute(&mut self, scope: TypeScope) -> Result<Fingerprint, WirehashError> {
        debug!(types = scope.len(), "scope collected");

        self.advance(PipelineState::Resolving);
        let mut resolved = Vec::with_capacity(scope.len());
        for name in scope.names() {
            match self.resolver.resolve(name) {
                Ok(handle) => resolved.push((name.to_string(), handle)),
                Err(err) => return Err(self.fail(err)),
            }
        }

        self.advance(PipelineState::Hashing);
        let mut per_type = BTreeMap::new();
        for (name, handle) in &resolved {
            let fields = match canonical_fields(handle, self.registry) {
                Ok(fields) => fields,
                Err(err) => return Err(self.fail(err)),
            };
            per_type.insert(name.clone(), StructuralHasher::hash_fields(&fields));
        }

        self.advance(PipelineState::Composing);
        let aggregate = compose_aggregate(&per_type);

        self.advance(PipelineState::Done);
        debug!(types = per_type.len(), aggregate = %aggregate, "fingerprint composed");
        Ok(Fingerprint::new(per_type, aggregate))
    }

    fn advance(&mut self, next: PipelineState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid pipeline transition {} -> {}",
            self.state,
            next
        );
        self.state = next;
    }

    fn fail(&mut self, err: WirehashError) -> WirehashError {
        self.state = PipelineState::Failed;
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TypeMetadata;
    use crate::snapshot::IgnoreList;

    fn small_registry() -> MetadataRegistry {
        let mut registry = MetadataRegistry::new();
        registry.register(
            TypeMetadata::new("pkg.P")
                .with_field("i32", "x"),
        );
        registry.register(
            TypeMetadata::new("pkg.Q")
                .with_field("String", "y"),
        );
        registry
    }

    #[test]
    fn linear_transitions_are_valid() {
        use PipelineState::*;
        let mut state = Idle;
        for next in [CollectingNames, Resolving, Hashing, Composing, Done] {
            state = state.transition_to(next).unwrap();
        }
        assert_eq!(state, Done);
        assert!(state.is_terminal());
    }

    #[test]
    fn skipping_a_state_is_invalid() {
        use PipelineState::*;
        assert!(Idle.transition_to(Resolving).is_err());
        assert!(CollectingNames.transition_to(Hashing).is_err());
        assert!(Resolving.transition_to(Done).is_err());
    }

    #[test]
    fn no_branch_back_to_an_earlier_state() {
        use PipelineState::*;
        assert!(Hashing.transition_to(Resolving).is_err());
        assert!(Done.transition_to(Idle).is_err());
        assert!(Composing.transition_to(CollectingNames).is_err());
    }

    #[test]
    fn any_non_terminal_state_can_fail() {
        use PipelineState::*;
        for state in [Idle, CollectingNames, Resolving, Hashing, Composing] {
            assert!(state.transition_to(Failed).is_ok());
        }
        assert!(Done.transition_to(Failed).is_err());
        assert!(Failed.transition_to(Failed).is_err());
    }

    #[test]
    fn transition_error_display_names_both_states() {
        let err = PipelineState::Done.transition_to(PipelineState::Idle).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid pipeline transition from Done to Idle"
        );
    }

    #[test]
    fn registry_run_reaches_done() {
        let registry = small_registry();
        let mut pipeline = FingerprintPipeline::new(&registry);
        assert_eq!(pipeline.state(), PipelineState::Idle);

        let fingerprint = pipeline.run_registry().unwrap();
        assert_eq!(pipeline.state(), PipelineState::Done);
        assert_eq!(fingerprint.type_count(), 2);
        assert_eq!(fingerprint.aggregate.len(), 64);
    }

    #[test]
    fn unresolvable_scope_entry_fails_the_pipeline() {
        let registry = small_registry();
        let mut pipeline = FingerprintPipeline::new(&registry);

        let scope =
            TypeScope::from_manifest_str("lib:pkg.P:x\nlib:pkg.Gone:x\n", &IgnoreList::empty())
                .unwrap();
        let err = pipeline.run_scope(scope).unwrap_err();

        assert_eq!(pipeline.state(), PipelineState::Failed);
        assert!(matches!(err, WirehashError::TypeResolution { .. }));
    }

    #[test]
    fn manifest_read_failure_fails_the_pipeline() {
        let registry = small_registry();
        let mut pipeline = FingerprintPipeline::new(&registry);

        let err = pipeline
            .run_manifest(
                Path::new("/nonexistent/wirehash-manifest.txt"),
                &IgnoreList::builtin(),
            )
            .unwrap_err();

        assert_eq!(pipeline.state(), PipelineState::Failed);
        assert!(matches!(err, WirehashError::ManifestRead { .. }));
    }

    #[test]
    fn empty_registry_still_composes() {
        let registry = MetadataRegistry::new();
        let mut pipeline = FingerprintPipeline::new(&registry);
        let fingerprint = pipeline.run_registry().unwrap();

        assert_eq!(fingerprint.type_count(), 0);
        assert_eq!(fingerprint.aggregate.len(), 64);
    }
}

//! Error taxonomy for the fingerprinting pipeline
//!
//! Every error here is fatal for the current invocation: the inputs are
//! static metadata, so a retry cannot change the outcome. The first error
//! aborts the whole pipeline and no partial fingerprint is ever produced,
//! since a partial fingerprint could be mistaken for a complete
//! compatibility signal.

use miette::Diagnostic;
use thiserror::Error;

/// Fatal pipeline errors with rich diagnostics
#[derive(Debug, Error, Diagnostic)]
pub enum WirehashError {
    /// A qualified name could not be loaded under either the direct or the
    /// nested-fallback strategy.
    #[error("unable to resolve wire type '{qualified_name}'")]
    #[diagnostic(
        code(wirehash::resolve),
        help(
            "The name was tried as given and with its final segment rebound \
             as a nested type. Check the manifest entry, or add an override \
             entry if this is a known-ambiguous nested name."
        )
    )]
    TypeResolution { qualified_name: String },

    /// A manifest line could not be parsed into the expected fields.
    #[error("malformed manifest line {line_number}: '{line}'")]
    #[diagnostic(
        code(wirehash::manifest::format),
        help(
            "Manifest lines are colon-delimited with at least two fields; \
             the second field is the qualified type name. Blank lines are \
             skipped."
        )
    )]
    ManifestFormat { line_number: usize, line: String },

    /// The manifest file itself could not be read.
    #[error("cannot read manifest '{path}'")]
    #[diagnostic(code(wirehash::manifest::read))]
    ManifestRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Field metadata of an otherwise-resolved type cannot be enumerated.
    #[error("cannot enumerate fields of '{qualified_name}': {detail}")]
    #[diagnostic(
        code(wirehash::metadata),
        help("Every ancestor named by a registered type must itself be registered.")
    )]
    MetadataAccess {
        qualified_name: String,
        detail: String,
    },

    /// Failure of the underlying digest primitive. The SHA-256 primitive in
    /// this stack is infallible, so this variant is unreachable today; it is
    /// kept so the taxonomy covers the unrecoverable-internal-fault class.
    #[allow(dead_code)] // Public API error variant for the full taxonomy
    #[error("digest computation failed: {detail}")]
    #[diagnostic(code(wirehash::digest))]
    HashComputation { detail: String },
}

impl WirehashError {
    /// Unresolvable type error for the given identifier
    pub fn type_resolution(qualified_name: impl Into<String>) -> Self {
        Self::TypeResolution {
            qualified_name: qualified_name.into(),
        }
    }

    /// Metadata enumeration failure for the given type
    pub fn metadata_access(qualified_name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MetadataAccess {
            qualified_name: qualified_name.into(),
            detail: detail.into(),
        }
    }
}

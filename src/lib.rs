//! wirehash - Wire-Contract Fingerprinting
//!
//! Computes a single deterministic digest (the "codebase hash") over the
//! structural shape of every type two independently deployed components
//! exchange over a shared binary serialization channel. Comparing the
//! digests of two builds detects silent contract divergence before any
//! traffic flows.
//!
//! # Modules
//!
//! - `registry` - explicit wire-type metadata and registrar supply
//! - `protocol` - the fleet coordinator/agent wire contract
//! - `snapshot` - type-scope collection (whole-registry or manifest mode)
//! - `resolver` - dotted-name resolution with nested fallback and overrides
//! - `fingerprinting` - canonicalization, per-type hashing, aggregation
//! - `pipeline` - linear mode orchestration
//!
//! # Example
//!
//! ```rust,ignore
//! use wirehash::pipeline::FingerprintPipeline;
//! use wirehash::protocol::builtin_registrars;
//! use wirehash::registry::populated_registry;
//!
//! let registry = populated_registry(&builtin_registrars());
//! let fingerprint = FingerprintPipeline::new(&registry).run_registry()?;
//! println!("Codebase Hash: {}", fingerprint.aggregate);
//! ```

pub mod errors;
pub mod fingerprinting;
pub mod pipeline;
pub mod protocol;
pub mod registry;
pub mod resolver;
pub mod snapshot;

// Re-export commonly used types
pub use errors::WirehashError;
pub use fingerprinting::{Fingerprint, StructuralHasher};
pub use pipeline::{FingerprintPipeline, PipelineState};
pub use registry::{FieldDescriptor, MetadataRegistry, Registrar, TypeMetadata};

//! Structural fingerprinting
//!
//! Turns resolved type handles into digests:
//!
//! - `canonical` — inheritance-aware field walk into a sorted descriptor
//!   list
//! - `hasher` — one type's canonical fields into one SHA-256 digest
//! - `composer` — every per-type digest into the aggregate codebase hash
//! - `types` — the immutable [`Fingerprint`] artifact
//!
//! Digests derive purely from field names and declared types, never from
//! runtime values.

mod canonical;
mod composer;
mod hasher;
mod types;

pub use canonical::canonical_fields;
pub use composer::compose_aggregate;
pub use hasher::StructuralHasher;
pub use types::Fingerprint;

//! Structural hashing
//!
//! One type's canonical field list becomes one SHA-256 digest. Identical
//! ordered field lists always produce identical digests; any change to a
//! field's declared type or name, or to the inherited set, produces a
//! different digest.

use sha2::{Digest, Sha256};

use crate::registry::FieldDescriptor;

/// Delimiter between formatted field descriptors in the hash input
const FIELD_DELIMITER: &str = ";";

/// Computes per-type structural digests
pub struct StructuralHasher;

impl StructuralHasher {
    /// Digest of one type's canonical field list
    pub fn hash_fields(fields: &[FieldDescriptor]) -> String {
        let joined = fields
            .iter()
            .map(FieldDescriptor::canonical)
            .collect::<Vec<_>>()
            .join(FIELD_DELIMITER);
        Self::hash_string(&joined)
    }

    /// SHA-256 of a string's UTF-8 bytes as 64 lowercase hex characters
    pub fn hash_string(input: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(input.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

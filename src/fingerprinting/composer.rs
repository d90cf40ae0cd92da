//! Aggregate fingerprint composition
//!
//! Folds every per-type digest into the single codebase hash. The fold runs
//! over the qualified names in sorted order, so discovery order never leaks
//! into the result while every structural change still does.

use std::collections::BTreeMap;

use super::hasher::StructuralHasher;

/// Delimiter between per-type digests in the aggregate hash input
const DIGEST_DELIMITER: &str = ",";

/// Aggregate digest over the complete per-type digest map.
///
/// `BTreeMap` iteration is already the lexicographic name order the
/// contract requires.
pub fn compose_aggregate(per_type: &BTreeMap<String, String>) -> String {
    let joined = per_type
        .values()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(DIGEST_DELIMITER);
    StructuralHasher::hash_string(&joined)
}

//! Field canonicalization
//!
//! Walks a resolved type's own fields plus every field inherited from every
//! ancestor in the full parent chain, then sorts the combined list into the
//! canonical order the structural hash is defined over. No field is
//! special-cased by any modifier; a uniform walk keeps the digest's
//! sensitivity predictable.

use std::collections::BTreeSet;

use crate::errors::WirehashError;
use crate::registry::{FieldDescriptor, MetadataRegistry, TypeMetadata};

/// Canonical field list for one resolved type handle.
///
/// The sort key is the formatted `"type:name"` string, so reordering field
/// declarations in source never changes the result, while any rename or
/// retype does.
pub fn canonical_fields(
    handle: &TypeMetadata,
    registry: &MetadataRegistry,
) -> Result<Vec<FieldDescriptor>, WirehashError> {
    let mut fields: Vec<FieldDescriptor> = handle.fields().to_vec();

    let mut visited = BTreeSet::new();
    visited.insert(handle.type_name().to_string());

    let mut current = handle;
    while let Some(parent_name) = current.parent() {
        if !visited.insert(parent_name.to_string()) {
            return Err(WirehashError::metadata_access(
                handle.type_name(),
                format!("ancestor cycle through '{parent_name}'"),
            ));
        }
        let parent = registry.get(parent_name).ok_or_else(|| {
            WirehashError::metadata_access(
                handle.type_name(),
                format!("ancestor '{parent_name}' is not registered"),
            )
        })?;
        fields.extend_from_slice(parent.fields());
        current = parent;
    }

    fields.sort_by_cached_key(FieldDescriptor::canonical);
    Ok(fields)
}

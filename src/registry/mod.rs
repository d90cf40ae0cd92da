//! Wire-type metadata registry
//!
//! The registry stands in for a live serializer's type table: every type a
//! component can put on the wire is registered here under its loadable name,
//! together with the explicit field metadata the fingerprint is computed
//! from. Registration happens through [`Registrar`] implementations applied
//! from a statically assembled list.

mod metadata;
mod registrar;

pub use metadata::{FieldDescriptor, TypeMetadata};
pub use registrar::{populated_registry, Registrar};

use std::collections::BTreeMap;

use tracing::warn;

/// Maps loadable type names to their structural metadata
#[derive(Debug, Default)]
pub struct MetadataRegistry {
    types: BTreeMap<String, TypeMetadata>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one type under its loadable name.
    ///
    /// A later registration of the same name replaces the earlier one; the
    /// replacement is logged because two registrars claiming one name is
    /// usually a wiring mistake.
    pub fn register(&mut self, metadata: TypeMetadata) {
        let name = metadata.type_name().to_string();
        if self.types.insert(name.clone(), metadata).is_some() {
            warn!(type_name = %name, "duplicate registration replaced earlier metadata");
        }
    }

    /// Look up a type handle by loadable name
    pub fn get(&self, type_name: &str) -> Option<&TypeMetadata> {
        self.types.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Every registered loadable name, in sorted order
    pub fn registered_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Declare a wire struct together with its field-list constant.
///
/// The struct and the metadata the registrar registers are emitted from the
/// same invocation, so the serialized shape and the fingerprinted shape
/// cannot drift independently. An optional `extends` clause records the
/// parent type the wire schema declares for the type.
///
/// ```ignore
/// wire_type! {
///     "fleet.task.TaskResult" extends "fleet.wire.WireEnvelope" =>
///     pub struct TaskResult {
///         pub task_id: String,
///         pub elapsed_ms: u64,
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_type {
    (
        $(#[$attr:meta])*
        $qualified:literal $(extends $parent:literal)? =>
        pub struct $ident:ident {
            $( $(#[$fattr:meta])* pub $field:ident : $fty:ty ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $ident {
            $( $(#[$fattr])* pub $field: $fty, )*
        }

        impl $ident {
            /// Loadable name this type registers under
            pub const TYPE_NAME: &'static str = $qualified;

            /// Field-list constant generated from the struct declaration
            pub fn metadata() -> $crate::registry::TypeMetadata {
                $crate::registry::TypeMetadata::new($qualified)
                    $( .with_parent($parent) )?
                    $( .with_field(stringify!($fty), stringify!($field)) )*
            }
        }
    };
}

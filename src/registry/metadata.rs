//! Type metadata model
//!
//! This stack has no runtime reflection, so each wire type carries an
//! explicit descriptor: its loadable name, the loadable name of its parent
//! type (if the wire schema declares one), and the ordered list of its own
//! fields. The descriptor is the single source the fingerprint is computed
//! from; runtime values never enter the picture.

use serde::{Deserialize, Serialize};

/// One field of a wire type: its declared type name and field name.
///
/// A plain value pair with no identity beyond its two strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Declared type name as it appears in the wire schema
    pub declared_type: String,
    /// Field name
    pub name: String,
}

impl FieldDescriptor {
    pub fn new(declared_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            declared_type: declared_type.into(),
            name: name.into(),
        }
    }

    /// Canonical `"type:name"` rendering.
    ///
    /// Both the canonical sort and the structural hash are defined over this
    /// exact string, so it must never depend on anything but the two names.
    pub fn canonical(&self) -> String {
        format!("{}:{}", self.declared_type, self.name)
    }
}

/// Structural descriptor of one registered wire type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMetadata {
    type_name: String,
    parent: Option<String>,
    fields: Vec<FieldDescriptor>,
}

impl TypeMetadata {
    /// Create metadata for the given loadable name
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            parent: None,
            fields: Vec::new(),
        }
    }

    /// Declare the parent type this type inherits fields from
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Append one own field
    pub fn with_field(mut self, declared_type: impl Into<String>, name: impl Into<String>) -> Self {
        self.fields.push(FieldDescriptor::new(declared_type, name));
        self
    }

    /// Loadable name this type is registered under
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Parent type's loadable name, if any
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Own fields only, in declaration order; inherited fields are walked
    /// separately through the parent chain
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_descriptor_canonical_form() {
        let field = FieldDescriptor::new("String", "task_id");
        assert_eq!(field.canonical(), "String:task_id");
    }

    #[test]
    fn builder_collects_fields_in_order() {
        let meta = TypeMetadata::new("fleet.task.TaskResult")
            .with_field("String", "task_id")
            .with_field("u64", "elapsed_ms");

        assert_eq!(meta.type_name(), "fleet.task.TaskResult");
        assert!(meta.parent().is_none());
        assert_eq!(meta.fields().len(), 2);
        assert_eq!(meta.fields()[0].name, "task_id");
        assert_eq!(meta.fields()[1].name, "elapsed_ms");
    }

    #[test]
    fn builder_records_parent() {
        let meta = TypeMetadata::new("fleet.task.TaskResult").with_parent("fleet.wire.WireEnvelope");
        assert_eq!(meta.parent(), Some("fleet.wire.WireEnvelope"));
    }
}

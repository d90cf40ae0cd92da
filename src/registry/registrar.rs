//! Registrar supply
//!
//! Registrars are how a deployable artifact declares its wire types. The
//! list of registrars is assembled explicitly at startup; there is no
//! classpath-style scanning and no hidden global registry, which keeps the
//! snapshot provider's input fully explicit and testable.

use tracing::debug;

use super::MetadataRegistry;

/// Registers one or more wire types into a metadata registry
pub trait Registrar {
    /// Registrar name, for logs
    fn name(&self) -> &'static str;

    /// Register every type this registrar owns
    fn register(&self, registry: &mut MetadataRegistry);
}

/// Build a registry with every given registrar applied
pub fn populated_registry(registrars: &[Box<dyn Registrar>]) -> MetadataRegistry {
    let mut registry = MetadataRegistry::new();
    for registrar in registrars {
        let before = registry.len();
        registrar.register(&mut registry);
        debug!(
            registrar = registrar.name(),
            registered = registry.len() - before,
            "registrar applied"
        );
    }
    registry
}

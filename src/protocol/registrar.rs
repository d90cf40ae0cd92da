//! Built-in registrar list
//!
//! The statically assembled registrar set the binary runs with. Embedding
//! products supply their own list instead; nothing is discovered at runtime.

use crate::registry::{MetadataRegistry, Registrar};

use super::messages::{
    AgentCapability, AgentDescriptor, AgentHeartbeat, CapabilityLimits, TaskAssignment,
    TaskFailure, TaskResult, WireEnvelope,
};

/// Registers the whole fleet wire contract
pub struct FleetProtocolRegistrar;

impl Registrar for FleetProtocolRegistrar {
    fn name(&self) -> &'static str {
        "fleet-protocol"
    }

    fn register(&self, registry: &mut MetadataRegistry) {
        registry.register(WireEnvelope::metadata());
        registry.register(TaskAssignment::metadata());
        registry.register(TaskResult::metadata());
        registry.register(TaskFailure::metadata());
        registry.register(AgentHeartbeat::metadata());
        registry.register(AgentDescriptor::metadata());
        registry.register(AgentCapability::metadata());
        registry.register(CapabilityLimits::metadata());
    }
}

/// The explicit registrar list consumed by the CLI's registry mode
pub fn builtin_registrars() -> Vec<Box<dyn Registrar>> {
    vec![Box::new(FleetProtocolRegistrar)]
}

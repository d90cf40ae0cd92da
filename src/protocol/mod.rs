//! Fleet wire contract
//!
//! The set of types the coordinator and its agents exchange over the shared
//! binary channel, plus the registrar that registers them. These are the
//! types whose structural shape the codebase hash captures.

mod messages;
mod registrar;

pub use messages::{
    AgentCapability, AgentDescriptor, AgentHeartbeat, CapabilityLimits, TaskAssignment,
    TaskFailure, TaskResult, WireEnvelope,
};
pub use registrar::{builtin_registrars, FleetProtocolRegistrar};

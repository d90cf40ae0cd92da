//! Fleet wire messages
//!
//! The message types exchanged between the coordinator and its agents over
//! the binary channel. Each declaration emits both the serde struct and the
//! field-list constant the fingerprint is computed from.
//!
//! Nested types keep their legacy `$`-separated loadable names; manifests
//! print the dotted canonical form and the resolver maps between the two.

crate::wire_type! {
    /// Common header every fleet message inherits
    "fleet.wire.WireEnvelope" =>
    pub struct WireEnvelope {
        pub schema_version: u32,
        pub correlation_id: String,
        pub emitted_at_ms: i64,
    }
}

crate::wire_type! {
    /// Coordinator-to-agent work dispatch
    "fleet.task.TaskAssignment" extends "fleet.wire.WireEnvelope" =>
    pub struct TaskAssignment {
        pub task_id: String,
        pub agent_id: String,
        pub payload_kind: String,
        pub payload: Vec<u8>,
        pub deadline_ms: i64,
        pub priority: u8,
    }
}

crate::wire_type! {
    /// Agent-to-coordinator completion report
    "fleet.task.TaskResult" extends "fleet.wire.WireEnvelope" =>
    pub struct TaskResult {
        pub task_id: String,
        pub agent_id: String,
        pub outcome: String,
        pub output: Vec<u8>,
        pub elapsed_ms: u64,
    }
}

crate::wire_type! {
    /// Failure detail nested in a task result
    "fleet.task.TaskResult$Failure" =>
    pub struct TaskFailure {
        pub error_kind: String,
        pub message: String,
        pub retryable: bool,
    }
}

crate::wire_type! {
    /// Agent liveness beacon
    "fleet.agent.AgentHeartbeat" extends "fleet.wire.WireEnvelope" =>
    pub struct AgentHeartbeat {
        pub agent_id: String,
        pub healthy: bool,
        pub inflight_tasks: u32,
        pub build_digest: String,
    }
}

crate::wire_type! {
    /// Agent self-description sent at enrollment
    "fleet.agent.AgentDescriptor" =>
    pub struct AgentDescriptor {
        pub agent_id: String,
        pub hostname: String,
        pub version: String,
        pub capabilities: Vec<String>,
    }
}

crate::wire_type! {
    /// One advertised capability, nested in the descriptor
    "fleet.agent.AgentDescriptor$Capability" =>
    pub struct AgentCapability {
        pub name: String,
        pub enabled: bool,
    }
}

crate::wire_type! {
    /// Resource limits of a capability; doubly nested, so its dotted form is
    /// ambiguous and resolution goes through the override table
    "fleet.agent.AgentDescriptor$Capability$Limits" =>
    pub struct CapabilityLimits {
        pub max_payload_bytes: u64,
        pub max_concurrency: u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Field names recorded in metadata must be exactly the struct's
    /// serialized field names.
    fn assert_metadata_matches_struct<T: serde::Serialize>(
        value: &T,
        metadata: &crate::registry::TypeMetadata,
    ) {
        let json = serde_json::to_value(value).unwrap();
        let object = json.as_object().unwrap();
        let mut struct_fields: Vec<&str> = object.keys().map(String::as_str).collect();
        struct_fields.sort_unstable();

        let mut metadata_fields: Vec<&str> =
            metadata.fields().iter().map(|f| f.name.as_str()).collect();
        metadata_fields.sort_unstable();

        assert_eq!(struct_fields, metadata_fields);
    }

    #[test]
    fn task_assignment_metadata_matches_struct() {
        let msg = TaskAssignment {
            task_id: "t-1".to_string(),
            agent_id: "a-1".to_string(),
            payload_kind: "deploy".to_string(),
            payload: vec![1, 2, 3],
            deadline_ms: 60_000,
            priority: 5,
        };
        assert_metadata_matches_struct(&msg, &TaskAssignment::metadata());
    }

    #[test]
    fn task_failure_metadata_matches_struct() {
        let msg = TaskFailure {
            error_kind: "timeout".to_string(),
            message: "deadline exceeded".to_string(),
            retryable: true,
        };
        assert_metadata_matches_struct(&msg, &TaskFailure::metadata());
    }

    #[test]
    fn heartbeat_metadata_matches_struct() {
        let msg = AgentHeartbeat {
            agent_id: "a-1".to_string(),
            healthy: true,
            inflight_tasks: 2,
            build_digest: "deadbeef".to_string(),
        };
        assert_metadata_matches_struct(&msg, &AgentHeartbeat::metadata());
    }

    #[test]
    fn task_messages_extend_the_envelope() {
        assert_eq!(
            TaskAssignment::metadata().parent(),
            Some("fleet.wire.WireEnvelope")
        );
        assert_eq!(
            TaskResult::metadata().parent(),
            Some("fleet.wire.WireEnvelope")
        );
        assert_eq!(
            AgentHeartbeat::metadata().parent(),
            Some("fleet.wire.WireEnvelope")
        );
        assert!(WireEnvelope::metadata().parent().is_none());
    }

    #[test]
    fn nested_types_use_legacy_loadable_names() {
        assert_eq!(TaskFailure::TYPE_NAME, "fleet.task.TaskResult$Failure");
        assert_eq!(
            AgentCapability::TYPE_NAME,
            "fleet.agent.AgentDescriptor$Capability"
        );
        assert_eq!(
            CapabilityLimits::TYPE_NAME,
            "fleet.agent.AgentDescriptor$Capability$Limits"
        );
    }

    #[test]
    fn messages_round_trip_through_serde() {
        let msg = TaskResult {
            task_id: "t-9".to_string(),
            agent_id: "a-4".to_string(),
            outcome: "ok".to_string(),
            output: vec![0xde, 0xad],
            elapsed_ms: 1234,
        };
        let encoded = serde_json::to_string(&msg).unwrap();
        let decoded: TaskResult = serde_json::from_str(&encoded).unwrap();
        assert_eq!(msg, decoded);
    }
}

//! Typed diagnostic event records and the sink boundary they flow through.
//!
//! Each event kind is a record with explicit optional fields; absent values
//! stay `None` rather than being formatted away.

use serde::Serialize;

/// Emitted when a package validates successfully against a classloader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstrumentationLoadedEvent {
    pub custom: bool,
    pub classloader: Option<String>,
    pub package_name: String,
    pub package_version: String,
}

/// Emitted when a package fails validation and is skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstrumentationSkippedEvent {
    pub custom: bool,
    pub classloader: Option<String>,
    pub package_name: String,
    pub package_version: String,
}

/// Emitted once per violation of a failed validation, when the reporting
/// policy allows detail output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaveViolationEvent {
    pub custom: bool,
    pub package_name: String,
    /// Total violations in the failed validation this event belongs to.
    pub violation_count: usize,
    pub classloader: Option<String>,
    pub violation_kind: String,
    pub reason: String,
    pub class_name: String,
    pub method: Option<String>,
    pub field: Option<String>,
}

/// Every structured diagnostic event the subsystem can emit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InstrumentationEvent {
    Loaded(InstrumentationLoadedEvent),
    Skipped(InstrumentationSkippedEvent),
    WeaveViolation(WeaveViolationEvent),
}

/// Receives typed diagnostic events. Implemented by the embedding process;
/// implementations must not block beyond best-effort delivery.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: InstrumentationEvent);
}

/// Sink for integrations without an event channel.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: InstrumentationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_tagged_with_optional_fields_kept() {
        let event = InstrumentationEvent::Loaded(InstrumentationLoadedEvent {
            custom: true,
            classloader: None,
            package_name: "mongo-pkg".to_string(),
            package_version: "1.0".to_string(),
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "loaded");
        assert_eq!(json["custom"], true);
        assert!(json["classloader"].is_null());
        assert_eq!(json["package_name"], "mongo-pkg");
    }

    #[test]
    fn violation_event_carries_detail_fields() {
        let event = InstrumentationEvent::WeaveViolation(WeaveViolationEvent {
            custom: false,
            package_name: "pkg".to_string(),
            violation_count: 3,
            classloader: Some("app-loader".to_string()),
            violation_kind: "METHOD_MISSING".to_string(),
            reason: "the weave method does not exist in the original class".to_string(),
            class_name: "com/example/Foo".to_string(),
            method: Some("doWork()V".to_string()),
            field: None,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "weave_violation");
        assert_eq!(json["violation_count"], 3);
        assert_eq!(json["classloader"], "app-loader");
        assert_eq!(json["method"], "doWork()V");
        assert!(json["field"].is_null());
    }
}

//! Lifecycle registry and supportability reporting for dynamically
//! (de)activated instrumentation packages.
//!
//! An external weaving engine drives the [`WeaveLifecycleListener`]: it
//! activates and deactivates packages, and reports one validation result per
//! (package, classloading context) pair. Instrumentation modules bind
//! resources to their owning package's active lifetime; deactivation releases
//! them best-effort, exactly once. Outcomes surface as `tracing` logs,
//! `metrics` counters, and typed records through an [`EventSink`] — never as
//! errors returned to the caller.

pub mod config;
pub mod dispatcher;
pub mod events;
pub mod listener;
pub mod metrics_const;
pub mod package;
pub mod registry;
pub mod resource;
pub mod validation;
pub mod violations;

pub use config::DiagnosticsConfig;
pub use dispatcher::ValidationDispatcher;
pub use events::{
    EventSink, InstrumentationEvent, InstrumentationLoadedEvent, InstrumentationSkippedEvent,
    NoopEventSink, WeaveViolationEvent,
};
pub use listener::WeaveLifecycleListener;
pub use package::{MatchRule, MatchStrategy, PackageDescriptor, PackageIdentity};
pub use registry::PackageRegistry;
pub use resource::PackageResource;
pub use validation::{ValidationOutcome, Verdict, Violation, ViolationKind};
pub use violations::ViolationReporter;

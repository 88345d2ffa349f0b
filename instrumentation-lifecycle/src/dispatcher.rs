use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::DiagnosticsConfig;
use crate::events::{
    EventSink, InstrumentationEvent, InstrumentationLoadedEvent, InstrumentationSkippedEvent,
};
use crate::metrics_const::{
    CUSTOM_INSTRUMENTATION_LOADED_COUNTER, CUSTOM_INSTRUMENTATION_SKIPPED_COUNTER,
    INSTRUMENTATION_LOADED_COUNTER, INSTRUMENTATION_SKIPPED_COUNTER,
};
use crate::validation::ValidationOutcome;
use crate::violations::ViolationReporter;

/// Routes one validation result per (package, classloading context) pair to
/// its success or failure side effects: one loaded/skipped event, one counter
/// increment, and violation reporting on failure.
///
/// Stateless; every call is an independent dispatch.
pub struct ValidationDispatcher {
    events: Arc<dyn EventSink>,
    config: DiagnosticsConfig,
    reporter: ViolationReporter,
}

impl ValidationDispatcher {
    pub fn new(events: Arc<dyn EventSink>, config: DiagnosticsConfig) -> Self {
        let reporter = ViolationReporter::new(Arc::clone(&events), config.clone());
        Self {
            events,
            config,
            reporter,
        }
    }

    pub fn on_validated(&self, outcome: &ValidationOutcome, loader_context: Option<&str>) {
        let package = &outcome.package;
        let identity = &package.identity;

        if outcome.succeeded() {
            self.events
                .emit(InstrumentationEvent::Loaded(InstrumentationLoadedEvent {
                    custom: package.custom,
                    classloader: loader_context.map(str::to_string),
                    package_name: identity.name().to_string(),
                    package_version: identity.version().to_string(),
                }));

            let metric = if package.custom {
                CUSTOM_INSTRUMENTATION_LOADED_COUNTER
            } else {
                INSTRUMENTATION_LOADED_COUNTER
            };
            metrics::counter!(
                metric,
                "package" => identity.name().to_string(),
                "version" => identity.version().to_string()
            )
            .increment(1);

            debug!(
                package = %identity,
                classloader = loader_context,
                "validated instrumentation package"
            );
            return;
        }

        // Informational only: how each declared match rule's target class is
        // classified against the bootstrap tier. Never touches metrics or events.
        if self.config.trace && package.weaves_bootstrap {
            for rule in &package.match_rules {
                trace!(
                    package = %identity,
                    class = rule.class_name.as_str(),
                    strategy = ?rule.strategy,
                    bootstrap = rule.bootstrap,
                    "bootstrap classification for declared match rule"
                );
            }
        }

        self.events
            .emit(InstrumentationEvent::Skipped(InstrumentationSkippedEvent {
                custom: package.custom,
                classloader: loader_context.map(str::to_string),
                package_name: identity.name().to_string(),
                package_version: identity.version().to_string(),
            }));

        let metric = if package.custom {
            CUSTOM_INSTRUMENTATION_SKIPPED_COUNTER
        } else {
            INSTRUMENTATION_SKIPPED_COUNTER
        };
        metrics::counter!(
            metric,
            "package" => identity.name().to_string(),
            "version" => identity.version().to_string()
        )
        .increment(1);

        self.reporter
            .report(outcome, loader_context, package.custom);
    }
}

use std::sync::Arc;

use tracing::debug;

use crate::config::DiagnosticsConfig;
use crate::events::{EventSink, InstrumentationEvent, WeaveViolationEvent};
use crate::validation::ValidationOutcome;

/// Logs the violation at info for custom packages, debug otherwise: a user
/// should see why their own package was skipped without turning anything up,
/// while bundled-package detail stays out of the default log.
macro_rules! detail {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            tracing::info!($($arg)+);
        } else {
            tracing::debug!($($arg)+);
        }
    };
}

/// Formats and logs the compatibility violations of one failed validation,
/// emitting one violation event per violation.
///
/// Verbose detail is reserved for user-authored packages, or any package
/// under heightened diagnostics; a bundled package failing to match is
/// routine and gets a single terse line.
pub struct ViolationReporter {
    events: Arc<dyn EventSink>,
    config: DiagnosticsConfig,
}

impl ViolationReporter {
    pub fn new(events: Arc<dyn EventSink>, config: DiagnosticsConfig) -> Self {
        Self { events, config }
    }

    pub fn report(
        &self,
        outcome: &ValidationOutcome,
        loader_context: Option<&str>,
        is_custom: bool,
    ) {
        let identity = &outcome.package.identity;
        debug!(
            package = %identity,
            "skipping instrumentation package; most likely it does not apply to this application"
        );

        if !is_custom && !self.config.debug {
            return;
        }

        let violations = outcome.violations();
        detail!(is_custom,
            package = %identity,
            violations = violations.len(),
            classloader = loader_context,
            "package validation failed"
        );

        for violation in violations {
            detail!(is_custom,
                package = %identity,
                kind = violation.kind.name(),
                class = violation.class_name.as_str(),
                method = violation.method.as_deref(),
                field = violation.field.as_deref(),
                reason = %violation.kind,
                "weave violation"
            );

            self.events
                .emit(InstrumentationEvent::WeaveViolation(WeaveViolationEvent {
                    custom: is_custom,
                    package_name: identity.name().to_string(),
                    violation_count: violations.len(),
                    classloader: loader_context.map(str::to_string),
                    violation_kind: violation.kind.name().to_string(),
                    reason: violation.kind.to_string(),
                    class_name: violation.class_name.clone(),
                    method: violation.method.clone(),
                    field: violation.field.clone(),
                }));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::package::{PackageDescriptor, PackageIdentity};
    use crate::validation::{Violation, ViolationKind};

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<InstrumentationEvent>>,
    }

    impl EventSink for RecordingSink {
        fn emit(&self, event: InstrumentationEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn failed_outcome(custom: bool) -> ValidationOutcome {
        let package = PackageDescriptor::new(PackageIdentity::new("pkg", "2.1"), custom);
        ValidationOutcome::failure(
            package,
            vec![
                Violation::new(ViolationKind::MethodMissing, "com/example/Foo")
                    .with_method("doWork()V"),
                Violation::new(ViolationKind::ClassMissing, "com/example/Gone"),
            ],
        )
    }

    #[test]
    fn bundled_package_under_normal_diagnostics_emits_no_detail_events() {
        let sink = Arc::new(RecordingSink::default());
        let events: Arc<dyn EventSink> = sink.clone();
        let reporter = ViolationReporter::new(events, DiagnosticsConfig::default());

        reporter.report(&failed_outcome(false), Some("app-loader"), false);

        assert!(sink.events.lock().unwrap().is_empty());
    }

    #[test]
    fn bundled_package_under_heightened_diagnostics_emits_detail_events() {
        let sink = Arc::new(RecordingSink::default());
        let config = DiagnosticsConfig {
            debug: true,
            ..DiagnosticsConfig::default()
        };
        let events: Arc<dyn EventSink> = sink.clone();
        let reporter = ViolationReporter::new(events, config);

        reporter.report(&failed_outcome(false), Some("app-loader"), false);

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn custom_package_emits_one_event_per_violation_in_order() {
        let sink = Arc::new(RecordingSink::default());
        let events: Arc<dyn EventSink> = sink.clone();
        let reporter = ViolationReporter::new(events, DiagnosticsConfig::default());

        reporter.report(&failed_outcome(true), None, true);

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        let InstrumentationEvent::WeaveViolation(first) = &events[0] else {
            panic!("expected a violation event");
        };
        assert!(first.custom);
        assert_eq!(first.package_name, "pkg");
        assert_eq!(first.violation_count, 2);
        assert_eq!(first.classloader, None);
        assert_eq!(first.violation_kind, "METHOD_MISSING");
        assert_eq!(first.class_name, "com/example/Foo");
        assert_eq!(first.method.as_deref(), Some("doWork()V"));
        assert_eq!(first.field, None);
        let InstrumentationEvent::WeaveViolation(second) = &events[1] else {
            panic!("expected a violation event");
        };
        assert_eq!(second.violation_kind, "CLASS_MISSING");
        assert_eq!(second.method, None);
    }
}

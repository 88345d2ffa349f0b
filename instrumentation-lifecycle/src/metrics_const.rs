//! Metric names emitted by the lifecycle subsystem. All counters carry
//! `package` and `version` labels unless noted otherwise.

/// Counter for bundled packages that validated and loaded.
pub const INSTRUMENTATION_LOADED_COUNTER: &str = "instrumentation_loaded_total";

/// Counter for user-authored (custom) packages that validated and loaded.
pub const CUSTOM_INSTRUMENTATION_LOADED_COUNTER: &str = "custom_instrumentation_loaded_total";

/// Counter for bundled packages skipped after failed validation.
pub const INSTRUMENTATION_SKIPPED_COUNTER: &str = "instrumentation_skipped_total";

/// Counter for user-authored (custom) packages skipped after failed validation.
pub const CUSTOM_INSTRUMENTATION_SKIPPED_COUNTER: &str = "custom_instrumentation_skipped_total";

/// Counter for resources registered against an unknown or inactive package
/// and released immediately instead (labeled `package` only).
pub const ORPHAN_RESOURCE_RELEASES_COUNTER: &str = "orphan_resource_releases_total";

/// Gauge for the number of currently active packages (no labels).
pub const ACTIVE_PACKAGES_GAUGE: &str = "active_instrumentation_packages";

use dashmap::DashMap;
use tracing::{debug, trace, warn};

use crate::config::DiagnosticsConfig;
use crate::metrics_const::{ACTIVE_PACKAGES_GAUGE, ORPHAN_RESOURCE_RELEASES_COUNTER};
use crate::package::PackageIdentity;
use crate::resource::PackageResource;

/// Tracks active instrumentation packages and owns the resources bound to
/// each package's active lifetime.
///
/// Guarantees:
/// - a resource set exists for a package iff that package is active
/// - deactivation drains the set exactly once, in registration order,
///   tolerating per-resource release failures
/// - a registration racing a deactivation of the same identity either lands
///   in the set before it is drained, or is treated as unknown and released
///   immediately; the resource is never lost
///
/// Distinct identities live in different shards of the underlying map, so
/// packages activate and deactivate concurrently without a coarse lock.
/// Intra-package ordering (activate, then register, then deactivate) is the
/// caller's contract.
pub struct PackageRegistry {
    resources: DashMap<PackageIdentity, Vec<Box<dyn PackageResource>>>,
    config: DiagnosticsConfig,
}

impl PackageRegistry {
    pub fn new(config: DiagnosticsConfig) -> Self {
        Self {
            resources: DashMap::new(),
            config,
        }
    }

    /// Mark `identity` active with an empty resource set. Always succeeds;
    /// duplicate activation overwrites, draining any displaced set
    /// best-effort so its resources cannot leak.
    pub fn activate(&self, identity: PackageIdentity) {
        debug!(package = %identity, "activated instrumentation package");
        if let Some(displaced) = self.resources.insert(identity.clone(), Vec::new()) {
            if !displaced.is_empty() {
                warn!(
                    package = %identity,
                    displaced = displaced.len(),
                    "duplicate activation displaced a live resource set"
                );
                self.release_all(&identity, displaced);
            }
        }
        metrics::gauge!(ACTIVE_PACKAGES_GAUGE).set(self.resources.len() as f64);
    }

    /// Deactivate `identity`, releasing every registered resource in
    /// registration order. A failing release never blocks the rest. Returns
    /// the number of resources that were present; 0 for an unknown identity.
    pub fn deactivate(&self, identity: &PackageIdentity) -> usize {
        let Some((_, resources)) = self.resources.remove(identity) else {
            debug!(package = %identity, "deactivated unknown instrumentation package");
            return 0;
        };
        metrics::gauge!(ACTIVE_PACKAGES_GAUGE).set(self.resources.len() as f64);
        let count = resources.len();
        debug!(
            package = %identity,
            resources = count,
            "deactivated instrumentation package"
        );
        self.release_all(identity, resources);
        count
    }

    /// Bind `resource` to the active lifetime of `identity`. If the package
    /// is unknown or not active, the resource is released immediately so it
    /// cannot leak. Never faults.
    ///
    /// The append happens under the identity's shard guard, so a concurrent
    /// deactivate of the same identity either drains this resource or never
    /// saw it registered.
    pub fn register_resource(
        &self,
        package_name: &str,
        identity: Option<&PackageIdentity>,
        resource: Box<dyn PackageResource>,
    ) {
        if let Some(identity) = identity {
            if let Some(mut set) = self.resources.get_mut(identity) {
                set.push(resource);
                return;
            }
        }
        debug!(
            package = package_name,
            resource = resource.name(),
            "asked to register a resource for a package that is not active, releasing it instead; this should rarely happen"
        );
        metrics::counter!(
            ORPHAN_RESOURCE_RELEASES_COUNTER,
            "package" => package_name.to_string()
        )
        .increment(1);
        self.release_one(resource);
    }

    /// Number of currently active packages.
    pub fn active_count(&self) -> usize {
        self.resources.len()
    }

    /// Deactivate every active package, for process shutdown. Returns the
    /// total number of resources released.
    pub fn drain_all(&self) -> usize {
        let identities: Vec<PackageIdentity> = self
            .resources
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        identities
            .iter()
            .map(|identity| self.deactivate(identity))
            .sum()
    }

    fn release_all(
        &self,
        identity: &PackageIdentity,
        resources: Vec<Box<dyn PackageResource>>,
    ) {
        for resource in resources {
            trace!(package = %identity, resource = resource.name(), "releasing resource");
            self.release_one(resource);
        }
    }

    fn release_one(&self, resource: Box<dyn PackageResource>) {
        let name = resource.name().to_string();
        if let Err(error) = resource.release() {
            if self.config.log_release_failures {
                debug!(resource = name.as_str(), error = %error, "resource release failed");
            }
        }
    }
}

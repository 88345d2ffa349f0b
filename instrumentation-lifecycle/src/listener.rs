use std::sync::Arc;

use crate::config::DiagnosticsConfig;
use crate::dispatcher::ValidationDispatcher;
use crate::events::EventSink;
use crate::package::PackageIdentity;
use crate::registry::PackageRegistry;
use crate::resource::PackageResource;
use crate::validation::ValidationOutcome;

/// The single object the weaving engine drives: package activation and
/// deactivation flow into the [`PackageRegistry`], validation results into
/// the [`ValidationDispatcher`].
///
/// Constructed explicitly by the embedding process at startup — there is no
/// ambient singleton. Call [`shutdown`](Self::shutdown) on the way out to
/// drain every still-active package.
pub struct WeaveLifecycleListener {
    registry: PackageRegistry,
    dispatcher: ValidationDispatcher,
}

impl WeaveLifecycleListener {
    pub fn new(events: Arc<dyn EventSink>, config: DiagnosticsConfig) -> Self {
        Self {
            registry: PackageRegistry::new(config.clone()),
            dispatcher: ValidationDispatcher::new(events, config),
        }
    }

    pub fn activated(&self, identity: PackageIdentity) {
        self.registry.activate(identity);
    }

    /// Returns the number of resources that were released.
    pub fn deactivated(&self, identity: &PackageIdentity) -> usize {
        self.registry.deactivate(identity)
    }

    pub fn validated(&self, outcome: &ValidationOutcome, loader_context: Option<&str>) {
        self.dispatcher.on_validated(outcome, loader_context);
    }

    pub fn register_resource(
        &self,
        package_name: &str,
        identity: Option<&PackageIdentity>,
        resource: Box<dyn PackageResource>,
    ) {
        self.registry
            .register_resource(package_name, identity, resource);
    }

    pub fn registry(&self) -> &PackageRegistry {
        &self.registry
    }

    /// Drain every active package. Returns the total number of resources
    /// released.
    pub fn shutdown(&self) -> usize {
        self.registry.drain_all()
    }
}

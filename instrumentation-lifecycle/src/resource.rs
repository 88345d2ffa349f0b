/// A resource bound to the active lifetime of its owning package.
///
/// The registry owns the resource exclusively from registration until
/// release, and releases it exactly once: on deactivation of the owning
/// package, or immediately if the package turns out not to be active.
/// Release failures are swallowed by the registry, never propagated — the
/// host process must not be destabilized by instrumentation bookkeeping.
pub trait PackageResource: Send + Sync {
    /// Short label used in diagnostics.
    fn name(&self) -> &str;

    /// Release the resource. Called exactly once.
    fn release(self: Box<Self>) -> anyhow::Result<()>;
}

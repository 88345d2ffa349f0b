use envconfig::Envconfig;

/// Diagnostic verbosity and release-failure logging policy.
///
/// Read from the environment by the integration point; tests construct it
/// directly. Verbosity is carried here rather than probed from the logger so
/// the reporting policy stays independent of subscriber setup.
#[derive(Envconfig, Clone, Debug)]
pub struct DiagnosticsConfig {
    /// Heightened diagnostics: full violation detail even for bundled packages.
    #[envconfig(from = "INSTRUMENTATION_DEBUG", default = "false")]
    pub debug: bool,

    /// Maximum verbosity: per-match-rule bootstrap classification logging.
    #[envconfig(from = "INSTRUMENTATION_TRACE", default = "false")]
    pub trace: bool,

    /// Whether failed resource releases are logged. Failures are swallowed
    /// either way; this only controls operational visibility.
    #[envconfig(from = "INSTRUMENTATION_LOG_RELEASE_FAILURES", default = "true")]
    pub log_release_failures: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            debug: false,
            trace: false,
            log_release_failures: true,
        }
    }
}

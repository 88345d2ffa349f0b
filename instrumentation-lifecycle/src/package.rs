use std::fmt;

/// Immutable name/version pair identifying one instrumentation package.
///
/// Used as the registry map key and as the `package`/`version` labels on
/// supportability metrics and events.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageIdentity {
    name: String,
    version: String,
}

impl PackageIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// How a declared match rule selects its target class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    ExactClass,
    Hierarchy,
}

/// One declared class-matching pattern of a package.
#[derive(Debug, Clone)]
pub struct MatchRule {
    pub class_name: String,
    pub strategy: MatchStrategy,
    /// Whether the target class is classified bootstrap-tier. The weaving
    /// engine computes this; this crate only reads it for trace diagnostics.
    pub bootstrap: bool,
}

impl MatchRule {
    pub fn new(class_name: impl Into<String>, strategy: MatchStrategy, bootstrap: bool) -> Self {
        Self {
            class_name: class_name.into(),
            strategy,
            bootstrap,
        }
    }
}

/// The slice of a package the lifecycle subsystem consumes: its identity,
/// origin (user-authored vs bundled), and declared match rules.
#[derive(Debug, Clone)]
pub struct PackageDescriptor {
    pub identity: PackageIdentity,
    /// User-authored package, as opposed to bundled.
    pub custom: bool,
    /// Whether any match rule reaches the bootstrap class-loading tier.
    pub weaves_bootstrap: bool,
    pub match_rules: Vec<MatchRule>,
}

impl PackageDescriptor {
    pub fn new(identity: PackageIdentity, custom: bool) -> Self {
        Self {
            identity,
            custom,
            weaves_bootstrap: false,
            match_rules: Vec::new(),
        }
    }

    pub fn with_match_rules(mut self, weaves_bootstrap: bool, match_rules: Vec<MatchRule>) -> Self {
        self.weaves_bootstrap = weaves_bootstrap;
        self.match_rules = match_rules;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_displays_as_name_at_version() {
        let identity = PackageIdentity::new("mongo-pkg", "1.0");
        assert_eq!(identity.to_string(), "mongo-pkg@1.0");
        assert_eq!(identity.name(), "mongo-pkg");
        assert_eq!(identity.version(), "1.0");
    }

    #[test]
    fn identities_compare_on_name_and_version() {
        let a = PackageIdentity::new("pkg", "1.0");
        let b = PackageIdentity::new("pkg", "1.0");
        let c = PackageIdentity::new("pkg", "2.0");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

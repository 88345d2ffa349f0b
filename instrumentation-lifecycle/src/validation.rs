use thiserror::Error;

use crate::package::PackageDescriptor;

/// Result of validating one package against one classloading context.
///
/// Produced by the external weaving engine and handed to
/// [`ValidationDispatcher::on_validated`](crate::ValidationDispatcher::on_validated).
/// A failure here is an expected outcome, not an error: it becomes metrics,
/// logs, and events, never a fault.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub package: PackageDescriptor,
    pub verdict: Verdict,
}

impl ValidationOutcome {
    pub fn success(package: PackageDescriptor) -> Self {
        Self {
            package,
            verdict: Verdict::Success,
        }
    }

    pub fn failure(package: PackageDescriptor, violations: Vec<Violation>) -> Self {
        Self {
            package,
            verdict: Verdict::Failure(violations),
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self.verdict, Verdict::Success)
    }

    /// The violations behind a failed verdict; empty for a success.
    pub fn violations(&self) -> &[Violation] {
        match &self.verdict {
            Verdict::Success => &[],
            Verdict::Failure(violations) => violations,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Verdict {
    Success,
    Failure(Vec<Violation>),
}

/// A detected incompatibility between a package's assumptions and the actual
/// target code. Method and field are present only when the violation is
/// scoped that narrowly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub class_name: String,
    pub method: Option<String>,
    pub field: Option<String>,
}

impl Violation {
    pub fn new(kind: ViolationKind, class_name: impl Into<String>) -> Self {
        Self {
            kind,
            class_name: class_name.into(),
            method: None,
            field: None,
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// Kinds of weave incompatibility detected during validation. The display
/// text is the reason attached to detail logs and violation events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViolationKind {
    #[error("the weave class requires a class that does not exist in the target")]
    ClassMissing,
    #[error("the weave method does not exist in the original class")]
    MethodMissing,
    #[error("the weave field does not exist in the original class")]
    FieldMissing,
    #[error("access modifiers of the weave member do not match the original")]
    AccessMismatch,
    #[error("the weave class adds a method not present in the original")]
    UnexpectedNewMethod,
    #[error("the weave class adds a field not present in the original")]
    UnexpectedNewField,
    #[error("the bootstrap-tier target is not visible to the weave class")]
    BootstrapVisibility,
    #[error("constructors cannot be woven in this target")]
    InitWeaveRestricted,
}

impl ViolationKind {
    /// Stable upper-snake name carried on violation events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ClassMissing => "CLASS_MISSING",
            Self::MethodMissing => "METHOD_MISSING",
            Self::FieldMissing => "FIELD_MISSING",
            Self::AccessMismatch => "ACCESS_MISMATCH",
            Self::UnexpectedNewMethod => "UNEXPECTED_NEW_METHOD",
            Self::UnexpectedNewField => "UNEXPECTED_NEW_FIELD",
            Self::BootstrapVisibility => "BOOTSTRAP_VISIBILITY",
            Self::InitWeaveRestricted => "INIT_WEAVE_RESTRICTED",
        }
    }
}

use std::borrow::Cow;

use outcome_types::Severity;

/// Whether a violated rule is advisory or blocking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// The rule carries the advisory marker; reported as a warning.
    Advisory,
    /// Any other rule; reported as an error.
    Blocking,
}

impl ViolationKind {
    /// The event severity this kind is reported with. Never `Info`.
    pub fn severity(self) -> Severity {
        match self {
            Self::Advisory => Severity::Warn,
            Self::Blocking => Severity::Error,
        }
    }
}

/// One failed check, as handed over by an external validation engine.
///
/// The converter only reads these four facets and never learns how the
/// violation was produced.
pub trait Violation {
    fn kind(&self) -> ViolationKind;

    /// Path of the violated subject. Empty for a violation on the root object.
    fn path(&self) -> Cow<'_, str>;

    /// Simple name of the violated rule, for example `NotNull`.
    fn rule_name(&self) -> Option<&str>;

    /// Fully interpolated, human-readable message.
    fn message(&self) -> Option<&str>;

    fn is_advisory(&self) -> bool {
        self.kind() == ViolationKind::Advisory
    }
}

impl<V: Violation + ?Sized> Violation for &V {
    fn kind(&self) -> ViolationKind {
        (**self).kind()
    }

    fn path(&self) -> Cow<'_, str> {
        (**self).path()
    }

    fn rule_name(&self) -> Option<&str> {
        (**self).rule_name()
    }

    fn message(&self) -> Option<&str> {
        (**self).message()
    }
}

/// Owned violation record for engines that build violations by hand.
///
/// `rule_name` and `message` are optional so malformed upstream records can
/// be represented and rejected during conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstraintViolation {
    kind: ViolationKind,
    path: String,
    rule_name: Option<String>,
    message: Option<String>,
}

impl ConstraintViolation {
    pub fn new(
        kind: ViolationKind,
        path: impl Into<String>,
        rule_name: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            rule_name,
            message,
        }
    }

    pub fn advisory(
        path: impl Into<String>,
        rule_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            ViolationKind::Advisory,
            path,
            Some(rule_name.into()),
            Some(message.into()),
        )
    }

    pub fn blocking(
        path: impl Into<String>,
        rule_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            ViolationKind::Blocking,
            path,
            Some(rule_name.into()),
            Some(message.into()),
        )
    }
}

impl Violation for ConstraintViolation {
    fn kind(&self) -> ViolationKind {
        self.kind
    }

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.path)
    }

    fn rule_name(&self) -> Option<&str> {
        self.rule_name.as_deref()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

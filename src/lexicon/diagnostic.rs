//! Compilation diagnostics.
//!
//! Problems found while compiling a lexicon are collected as [`Diagnostic`]
//! values instead of being raised. Errors mean the entry was dropped from the
//! table; warnings mean it was kept but looks suspicious.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// Why a component reference could not be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReason {
    /// No entry with that key exists (or it was dropped earlier).
    UnknownKey,
    /// The entry exists but never got a form, usually because of a cycle.
    Unresolved,
}

/// What a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    UnknownDonorFamily {
        family: String,
    },
    UnresolvedReference {
        component: String,
        reason: MissingReason,
    },
    PhonotacticViolation {
        rule: String,
        form: String,
    },
    Homophone {
        other: String,
        form: String,
    },
    RootTooLong {
        symbols: usize,
        max: usize,
    },
}

impl DiagnosticKind {
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::UnknownDonorFamily { .. }
            | DiagnosticKind::UnresolvedReference { .. } => Severity::Error,
            DiagnosticKind::PhonotacticViolation { .. }
            | DiagnosticKind::Homophone { .. }
            | DiagnosticKind::RootTooLong { .. } => Severity::Warning,
        }
    }

    /// Short stable name, used in human output.
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticKind::UnknownDonorFamily { .. } => "unknown-donor-family",
            DiagnosticKind::UnresolvedReference { .. } => "unresolved-reference",
            DiagnosticKind::PhonotacticViolation { .. } => "phonotactics",
            DiagnosticKind::Homophone { .. } => "homophone",
            DiagnosticKind::RootTooLong { .. } => "root-too-long",
        }
    }
}

/// A single problem report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// The entry the diagnostic is attached to.
    pub key: String,
    pub message: String,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    fn new(key: &str, kind: DiagnosticKind, message: String) -> Self {
        Diagnostic {
            severity: kind.severity(),
            key: key.to_string(),
            message,
            kind,
        }
    }

    pub fn unknown_donor_family(key: &str, family: &str) -> Self {
        Self::new(
            key,
            DiagnosticKind::UnknownDonorFamily {
                family: family.to_string(),
            },
            format!("no pipeline is registered for donor family `{family}`"),
        )
    }

    pub fn unresolved_reference(key: &str, component: &str, reason: MissingReason) -> Self {
        let message = match reason {
            MissingReason::UnknownKey => format!("component `{component}` is not in the lexicon"),
            MissingReason::Unresolved => {
                format!("component `{component}` never resolved (cyclic or dependent on a dropped entry)")
            }
        };
        Self::new(
            key,
            DiagnosticKind::UnresolvedReference {
                component: component.to_string(),
                reason,
            },
            message,
        )
    }

    pub fn phonotactic_violation(key: &str, form: &str, rule: &str) -> Self {
        Self::new(
            key,
            DiagnosticKind::PhonotacticViolation {
                rule: rule.to_string(),
                form: form.to_string(),
            },
            format!("form `{form}` breaks phonotactic rule `{rule}`"),
        )
    }

    /// `key` must be the lexically smaller of the pair.
    pub fn homophone(key: &str, other: &str, form: &str) -> Self {
        Self::new(
            key,
            DiagnosticKind::Homophone {
                other: other.to_string(),
                form: form.to_string(),
            },
            format!("`{key}` and `{other}` share the form `{form}`"),
        )
    }

    pub fn root_too_long(key: &str, form: &str, max: usize) -> Self {
        let symbols = form.chars().count();
        Self::new(
            key,
            DiagnosticKind::RootTooLong { symbols, max },
            format!("root form `{form}` has {symbols} symbols, more than {max}"),
        )
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] {}: {}",
            self.severity,
            self.kind.name(),
            self.key,
            self.message
        )
    }
}

//! Validation result types.

use javelin_catalog::ParamType;
use serde::{Deserialize, Serialize};

/// One schema-conformance problem, field-addressed and kinded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted field path, e.g. `spec.flags.time`.
    pub field: String,
    /// The offending raw value; empty for absent parameters.
    pub value: String,
    /// What went wrong.
    pub kind: ViolationKind,
    /// Human-readable message.
    pub message: String,
}

/// The kinds of problem the engine reports.
///
/// All of them are expected user-input territory; none aborts the
/// validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// The target matches no catalog entry.
    TargetUnknown,
    /// The target is known but does not define the action.
    ActionUnsupported,
    /// A required parameter has no entry in the submitted map.
    RequiredMissing,
    /// A required string-typed parameter is present but blank.
    EmptyValue,
    /// A present value fails to parse under its declared type.
    TypeMismatch(ParamType),
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TargetUnknown => f.write_str("target-unknown"),
            Self::ActionUnsupported => f.write_str("action-unsupported"),
            Self::RequiredMissing => f.write_str("required-missing"),
            Self::EmptyValue => f.write_str("empty-value"),
            Self::TypeMismatch(expected) => write!(f, "type-mismatch({expected})"),
        }
    }
}

impl Violation {
    /// Creates a new violation.
    pub fn new(
        kind: ViolationKind,
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Overall outcome of a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// The request conforms to its schema.
    Accepted,
    /// At least one violation was found.
    Rejected,
}

/// A validation pass outcome with its ordered violations.
///
/// This is the aggregation seam for the caller: external validators
/// (scheduler, pod mode) concatenate their field-error lists with the
/// engine's before building a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Overall outcome.
    pub status: Status,
    /// Every violation found, in check order.
    pub violations: Vec<Violation>,
}

impl Verdict {
    /// Builds a verdict from an already-merged violation list.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        let status = if violations.is_empty() {
            Status::Accepted
        } else {
            Status::Rejected
        };
        Self { status, violations }
    }

    /// Returns true if no violations were found.
    pub const fn is_accepted(&self) -> bool {
        matches!(self.status, Status::Accepted)
    }

    /// Returns the single aggregated rejection message, or `None` when
    /// the request was accepted.
    pub fn summary(&self) -> Option<String> {
        if self.violations.is_empty() {
            return None;
        }
        let details: Vec<String> = self.violations.iter().map(ToString::to_string).collect();
        Some(format!(
            "{} validation failure(s): {}",
            self.violations.len(),
            details.join("; ")
        ))
    }
}

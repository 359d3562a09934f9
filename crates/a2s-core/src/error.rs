//! Error types for waitlist validation.

use serde::{Deserialize, Serialize};

/// A single constraint violation.
///
/// `path` names the offending field (`["contact"]`). It is empty when the
/// candidate as a whole is unusable, e.g. a JSON array instead of an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Path to the offending field.
    pub path: Vec<String>,
    /// Human-readable description of the violation.
    pub message: String,
}

impl FieldIssue {
    /// Create an issue for a named field.
    #[must_use]
    pub fn field(name: &str, message: impl Into<String>) -> Self {
        Self {
            path: vec![name.to_string()],
            message: message.into(),
        }
    }

    /// Create an issue about the candidate as a whole.
    #[must_use]
    pub fn root(message: impl Into<String>) -> Self {
        Self {
            path: Vec::new(),
            message: message.into(),
        }
    }

    /// The field this issue refers to, if any.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }
}

/// A candidate failed the schema.
///
/// Carries one issue per violated field, in field declaration order. Never
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid data: {} issue(s)", issues.len())]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Build an error from collected issues.
    ///
    /// Returns `None` when there is nothing to report.
    #[must_use]
    pub fn from_issues(issues: Vec<FieldIssue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self { issues })
        }
    }

    /// An error with a single issue.
    #[must_use]
    pub fn single(issue: FieldIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    /// All issues.
    #[must_use]
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Consume the error, returning its issues.
    #[must_use]
    pub fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }

    /// The issue reported for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&FieldIssue> {
        self.issues.iter().find(|i| i.field_name() == Some(field))
    }
}

/// Errors raised when reading enumerated values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The value is not a member of the enumeration.
    #[error("unknown {kind}: {value}")]
    UnknownVariant {
        /// The enumeration being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

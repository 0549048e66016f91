//! Schema provisioning errors
//!
//! Two kinds of failure reach callers: structural problems found by the
//! validation pre-flight, and execution failures surfaced verbatim from the
//! [`SchemaExecutor`](crate::SchemaExecutor). Foreign-key probe failures are
//! execution failures too.

use crate::executor::ExecError;
use std::fmt;

/// Errors returned by [`SchemaManager`](crate::SchemaManager) operations
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A statement or catalog probe failed; the remaining sequence was aborted
    #[error(transparent)]
    Execution(#[from] ExecError),
    /// Model declarations are structurally invalid
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A single offending field found by [`validate_models`](crate::validate_models)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    /// The field carries no annotation at all (or an empty one)
    #[error("model {model} field {field} missing db tag")]
    MissingAnnotation { model: String, field: String },
    /// `references:<table>` without an explicit `(<column>)`
    #[error("invalid reference in {model}.{field}: references:{table} needs an explicit column, e.g. references:{table}(id)")]
    IncompleteReference {
        model: String,
        field: String,
        table: String,
    },
}

impl ValidationIssue {
    /// Name of the model declaring the offending field
    pub fn model(&self) -> &str {
        match self {
            ValidationIssue::MissingAnnotation { model, .. }
            | ValidationIssue::IncompleteReference { model, .. } => model,
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            ValidationIssue::MissingAnnotation { field, .. }
            | ValidationIssue::IncompleteReference { field, .. } => field,
        }
    }
}

/// Every issue found in one validation pass, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub(crate) fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.issues.as_slice() {
            [single] => write!(f, "{single}"),
            issues => {
                write!(f, "{} invalid model fields:", issues.len())?;
                for issue in issues {
                    write!(f, "\n  - {issue}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

//! Domain-layer errors.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may re-wrap freely)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Slug rejected by the opt-in grammar check.
    #[error("invalid slug '{slug}': {reason}")]
    InvalidSlug { slug: String, reason: String },

    /// The assembled plan contains no files.
    #[error("scaffold plan is empty")]
    EmptyPlan,

    /// Two emitters produced the same output path.
    #[error("duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: String },

    /// Emitters must only produce paths relative to the scaffold root.
    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidSlug { slug, .. } => vec![
                format!("'{slug}' is not a well-formed slug"),
                "Use lowercase letters, digits, and single hyphens: my-package".into(),
                "Or rerun without --validate-slugs to pass it through as-is".into(),
            ],
            Self::EmptyPlan | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                vec!["This is a bug in the emitters, please report it".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSlug { .. } => ErrorCategory::Validation,
            Self::EmptyPlan | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

/// Error categories for CLI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

//! Unified error handling for Larakit Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

pub use crate::domain::ErrorCategory;

/// Root error type for Larakit Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// larakit-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum LarakitError {
    /// Errors from the domain layer (business logic violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl LarakitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Convenient result type alias.
pub type LarakitResult<T> = Result<T, LarakitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn categories_pass_through_from_both_layers() {
        let domain: LarakitError = DomainError::EmptyPlan.into();
        assert_eq!(domain.category(), ErrorCategory::Internal);

        let app: LarakitError = ApplicationError::AlreadyInitialized {
            path: PathBuf::from("composer.json"),
        }
        .into();
        assert_eq!(app.category(), ErrorCategory::Validation);
    }

    #[test]
    fn suggestions_are_never_empty() {
        let err: LarakitError = ApplicationError::AlreadyInitialized {
            path: PathBuf::from("composer.json"),
        }
        .into();
        assert!(!err.suggestions().is_empty());
    }
}

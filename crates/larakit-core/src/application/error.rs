//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The manifest marker is already present — the directory has been
    /// scaffolded before. Raised before any writes.
    #[error("package already initialized: {path} exists")]
    AlreadyInitialized { path: PathBuf },

    /// mkdir failed for a reason other than already-exists.
    #[error("failed to create directory {path}: {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    /// The manifest document could not be serialized.
    #[error("manifest serialization failed: {reason}")]
    Serialization { reason: String },

    /// The underlying file write failed.
    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyInitialized { path } => vec![
                format!("'{}' already exists in this directory", path.display()),
                "Delete the previously generated files and run again".into(),
                "Or run the scaffolder in an empty directory".into(),
            ],
            Self::DirectoryCreation { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that you have write permissions here".into(),
            ],
            Self::Serialization { .. } => {
                vec!["This is a bug in the manifest builder, please report it".into()]
            }
            Self::WriteFailed { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check file permissions and available disk space".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyInitialized { .. } => ErrorCategory::Validation,
            Self::DirectoryCreation { .. } | Self::Serialization { .. } | Self::WriteFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_initialized_is_a_validation_error() {
        let err = ApplicationError::AlreadyInitialized {
            path: PathBuf::from("composer.json"),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("Delete")));
    }

    #[test]
    fn write_failures_are_internal() {
        let err = ApplicationError::WriteFailed {
            path: PathBuf::from("README.md"),
            reason: "permission denied".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}

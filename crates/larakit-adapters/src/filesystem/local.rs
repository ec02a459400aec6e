//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::debug;

use larakit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::LarakitResult,
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> LarakitResult<()> {
        // create_dir_all treats an existing directory as success; anything
        // else that surfaces here is a real failure.
        std::fs::create_dir_all(path).map_err(|e| {
            ApplicationError::DirectoryCreation {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> LarakitResult<()> {
        debug!(path = %path.display(), bytes = content.len(), "write file");
        std::fs::write(path, content).map_err(|e| map_write_error(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_write_error(path: &Path, e: io::Error) -> larakit_core::error::LarakitError {
    ApplicationError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use larakit_core::error::LarakitError;

    #[test]
    fn writes_and_detects_files() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("README.md");

        assert!(!fs.exists(&path));
        fs.write_file(&path, "# hello").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# hello");
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("lang").join("en");

        fs.create_dir_all(&nested).unwrap();
        // Second call must succeed: "already exists" is not an error.
        fs.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn write_into_missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("does-not-exist").join("file.php");

        let err = fs.write_file(&path, "x").unwrap_err();
        assert!(matches!(
            err,
            LarakitError::Application(ApplicationError::WriteFailed { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn mkdir_over_a_file_is_a_directory_creation_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = dir.path().join("blocker");
        std::fs::write(&file, "").unwrap();

        let err = fs.create_dir_all(&file.join("child")).unwrap_err();
        assert!(matches!(
            err,
            LarakitError::Application(ApplicationError::DirectoryCreation { .. })
        ));
    }
}

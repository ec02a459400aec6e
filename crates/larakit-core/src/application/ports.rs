//! Driven (output) port - implemented by infrastructure.
//!
//! This trait defines what the application needs from the filesystem.
//! The `larakit-adapters` crate provides implementations.

use crate::error::LarakitResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `larakit_adapters::filesystem::LocalFilesystem` (production)
/// - `larakit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - All generated paths are relative to the scaffold root
/// - `exists` doubles as the "already initialized" probe, which is why it is
///   part of the port: tests simulate both states without a real filesystem
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// "Already exists" is success; any other failure is an error.
    fn create_dir_all(&self, path: &Path) -> LarakitResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> LarakitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

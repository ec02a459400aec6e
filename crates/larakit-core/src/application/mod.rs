//! Application layer for Larakit.
//!
//! This layer contains:
//! - **Service**: Use case orchestration (ScaffoldService)
//! - **Port**: Interface definition (trait) for the filesystem dependency
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod service;

// Re-export the main service
pub use service::ScaffoldService;

// Re-export the port trait (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;

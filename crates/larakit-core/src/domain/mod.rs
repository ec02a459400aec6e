//! Core domain layer for Larakit.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O is handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: A `ScaffoldConfig` never changes during a run

pub mod config;
pub mod error;
pub mod identifiers;
pub mod plan;

// Re-exports for convenience
pub use config::{FeatureFlags, ScaffoldConfig};
pub use error::{DomainError, ErrorCategory};
pub use identifiers::{DerivedIdentifiers, derive_namespace, validate_slug};
pub use plan::{FileToWrite, PackagePlan};

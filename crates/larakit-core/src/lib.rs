//! Larakit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Larakit
//! Laravel package scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          larakit-cli (CLI)              │
//! │     (Prompts, flags, output)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │           (ScaffoldService)             │
//! │   Guard → assemble plan → write out     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Port (Trait)           │
//! │            (Filesystem)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    larakit-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ScaffoldConfig, identifiers, plan,    │
//! │   manifest/provider/stub emitters)      │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use larakit_core::{
//!     application::ScaffoldService,
//!     domain::{FeatureFlags, ScaffoldConfig},
//! };
//! # let filesystem: Box<dyn larakit_core::application::Filesystem> = unimplemented!();
//!
//! // 1. Collect the run configuration (the CLI does this interactively)
//! let config = ScaffoldConfig {
//!     package_slug: "cool-widgets".into(),
//!     description: "Widgets, but cool".into(),
//!     author_slug: "jane-doe".into(),
//!     author_name: "Jane Doe".into(),
//!     author_email: "jane@example.com".into(),
//!     features: FeatureFlags::all(),
//! };
//!
//! // 2. Use the application service (with an injected adapter)
//! let service = ScaffoldService::new(filesystem);
//! let run_date = chrono::NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
//! service.scaffold(&config, std::path::Path::new("."), run_date).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// File emitters: manifest, provider, stubs
pub mod emit;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Filesystem, ScaffoldService};
    pub use crate::domain::{
        DerivedIdentifiers, FeatureFlags, FileToWrite, PackagePlan, ScaffoldConfig,
        derive_namespace,
    };
    pub use crate::error::{LarakitError, LarakitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

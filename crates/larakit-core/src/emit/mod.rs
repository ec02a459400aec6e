//! File emitters.
//!
//! Each emitter is a pure function `(config, derived) -> FileToWrite(s)` for
//! one artifact. They share nothing but the read-only inputs and each touches
//! disjoint paths; the application service decides which to run (feature
//! flags) and in what order the results are written.

pub mod manifest;
pub mod provider;
pub mod stubs;

pub use manifest::{MANIFEST_PATH, Manifest, build_manifest};
pub use provider::{Fragment, boot_fragments, build_provider_source, register_fragments};

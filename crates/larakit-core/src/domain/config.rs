//! The immutable input aggregate for a scaffold run.

use serde::{Deserialize, Serialize};

/// Everything a scaffold run needs to know, collected up-front.
///
/// The CLI gathers this interactively (or from answer flags); the core never
/// prompts. The struct is read-only for the duration of the run — derived
/// identifiers are recomputed from it, never stored on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Hyphenated lowercase package identifier, e.g. `my-package`.
    pub package_slug: String,
    /// Free-text package description.
    pub description: String,
    /// Hyphenated lowercase vendor key, e.g. `jane-doe`.
    pub author_slug: String,
    /// Author's full name.
    pub author_name: String,
    /// Author's contact email.
    pub author_email: String,
    /// Which optional artifacts to generate.
    pub features: FeatureFlags,
}

impl ScaffoldConfig {
    /// The `vendor/package` identity used in the manifest and README.
    pub fn composer_name(&self) -> String {
        format!("{}/{}", self.author_slug, self.package_slug)
    }
}

/// The six optional artifact toggles, answered yes/no at the prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub config: bool,
    pub migration: bool,
    pub routes: bool,
    pub controllers: bool,
    pub language_files: bool,
    pub views: bool,
}

impl FeatureFlags {
    /// Every optional artifact enabled.
    pub const fn all() -> Self {
        Self {
            config: true,
            migration: true,
            routes: true,
            controllers: true,
            language_files: true,
            views: true,
        }
    }

    /// No optional artifacts — README, manifest, and provider only.
    pub const fn none() -> Self {
        Self {
            config: false,
            migration: false,
            routes: false,
            controllers: false,
            language_files: false,
            views: false,
        }
    }
}

//! The `composer.json` package descriptor.
//!
//! Modeled as a typed document rather than ad-hoc JSON so the shape is fixed
//! at compile time and serialization order is the declaration order below —
//! output stays stable and human-diffable across runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{DerivedIdentifiers, ScaffoldConfig};

/// Relative path of the manifest — also the "already initialized" marker.
pub const MANIFEST_PATH: &str = "composer.json";

/// The package descriptor written to `composer.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub description: String,
    pub autoload: Autoload,
    pub extra: Extra,
    #[serde(rename = "type")]
    pub package_type: String,
    pub license: String,
    pub authors: Vec<Author>,
    pub require: BTreeMap<String, String>,
    #[serde(rename = "require-dev")]
    pub require_dev: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Autoload {
    #[serde(rename = "psr-4")]
    pub psr4: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub laravel: LaravelExtra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaravelExtra {
    pub providers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// Build the manifest for a run.
///
/// The PSR-4 autoload entry maps `Author\Package\` to `src`, and the
/// registered provider is `Author\Package\{ClassName}ServiceProvider`.
pub fn build_manifest(config: &ScaffoldConfig, derived: &DerivedIdentifiers) -> Manifest {
    let namespace_prefix = format!("{}\\", derived.php_namespace());

    Manifest {
        name: config.composer_name(),
        description: config.description.clone(),
        autoload: Autoload {
            psr4: BTreeMap::from([(namespace_prefix, "src".to_string())]),
        },
        extra: Extra {
            laravel: LaravelExtra {
                providers: vec![format!(
                    "{}\\{}ServiceProvider",
                    derived.php_namespace(),
                    derived.class_name()
                )],
            },
        },
        package_type: "library".into(),
        license: "MIT".into(),
        authors: vec![Author {
            name: config.author_name.clone(),
            email: config.author_email.clone(),
        }],
        require: BTreeMap::from([("php".to_string(), ">=8.3".to_string())]),
        require_dev: BTreeMap::from([(
            "orchestra/testbench".to_string(),
            "^10.0".to_string(),
        )]),
    }
}

impl Manifest {
    /// Pretty-printed JSON with a trailing newline.
    ///
    /// `serde_json` leaves forward slashes unescaped, so `author/package`
    /// round-trips verbatim.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}

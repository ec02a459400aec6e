//! Slug → PascalCase identifier derivation.
//!
//! # Design
//!
//! These are pure functions of the slug strings — no hidden state, no locale
//! dependency beyond ASCII case folding. Identifiers are recomputed whenever
//! needed and never persisted.
//!
//! Two distinct slugs can collide after derivation (`my-package` and
//! `mypackage` both become `MyPackage`); that is a known limitation and is
//! not enforced against.

use crate::domain::ScaffoldConfig;
use crate::domain::error::DomainError;

/// Derive a PascalCase namespace from a hyphenated slug.
///
/// Splits on `-`, ASCII-uppercases each segment's first character, joins
/// with no separator, and strips any internal whitespace. Total on printable
/// ASCII input; non-ASCII characters pass through untouched.
///
/// ```
/// use larakit_core::domain::derive_namespace;
///
/// assert_eq!(derive_namespace("my-package"), "MyPackage");
/// assert_eq!(derive_namespace("package"), "Package");
/// ```
pub fn derive_namespace(slug: &str) -> String {
    slug.split('-')
        .map(capitalize_first)
        .collect::<String>()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(segment.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Opt-in slug grammar check: `[a-z0-9]+(-[a-z0-9]+)*`.
///
/// The scaffolder interpolates slugs verbatim into generated source and
/// manifest keys without escaping, so a malformed slug produces malformed
/// output. The default behavior passes anything through; this check is only
/// applied when the user asks for it (`--validate-slugs`).
pub fn validate_slug(slug: &str) -> Result<(), DomainError> {
    let well_formed = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if well_formed {
        Ok(())
    } else {
        Err(DomainError::InvalidSlug {
            slug: slug.to_string(),
            reason: "expected lowercase ASCII segments separated by single hyphens".into(),
        })
    }
}

/// PascalCase identifiers derived from the run's slugs.
///
/// `class_name` always equals `package_namespace`; it exists as a separate
/// accessor because the two play different roles in the generated source
/// (namespace segment vs. class-name prefix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedIdentifiers {
    pub author_namespace: String,
    pub package_namespace: String,
}

impl DerivedIdentifiers {
    pub fn from_config(config: &ScaffoldConfig) -> Self {
        Self {
            author_namespace: derive_namespace(&config.author_slug),
            package_namespace: derive_namespace(&config.package_slug),
        }
    }

    /// The class-name stem used for the provider and controller stubs.
    pub fn class_name(&self) -> &str {
        &self.package_namespace
    }

    /// The PHP namespace `Author\Package` (single backslash separator).
    pub fn php_namespace(&self) -> String {
        format!("{}\\{}", self.author_namespace, self.package_namespace)
    }
}

//! The service-provider entry point.
//!
//! The provider class has two lifecycle hooks — `register()` and `boot()` —
//! whose bodies are assembled from an ordered list of named fragments, each
//! gated by a feature flag. Keeping the fragment list first-class (rather
//! than concatenating strings inline) lets tests assert fragment
//! presence/absence without coupling to exact whitespace.

use std::path::PathBuf;

use crate::domain::{DerivedIdentifiers, FeatureFlags, ScaffoldConfig};

/// One named template fragment of the provider body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    ConfigMerge,
    ConfigPublish,
    MigrationPublish,
    RoutesLoad,
    TranslationsLoad,
    TranslationsPublish,
    ViewsLoad,
    ViewsPublish,
}

/// Fragments of the `register()` body, in emission order.
pub fn register_fragments(features: &FeatureFlags) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    if features.config {
        fragments.push(Fragment::ConfigMerge);
    }
    fragments
}

/// Fragments of the `boot()` body, in emission order.
pub fn boot_fragments(features: &FeatureFlags) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    if features.config {
        fragments.push(Fragment::ConfigPublish);
    }
    if features.migration {
        fragments.push(Fragment::MigrationPublish);
    }
    if features.routes {
        fragments.push(Fragment::RoutesLoad);
    }
    if features.language_files {
        fragments.push(Fragment::TranslationsLoad);
        fragments.push(Fragment::TranslationsPublish);
    }
    if features.views {
        fragments.push(Fragment::ViewsLoad);
        fragments.push(Fragment::ViewsPublish);
    }
    fragments
}

impl Fragment {
    /// Render this fragment's PHP, interpolating the slug verbatim.
    fn render(self, config: &ScaffoldConfig) -> String {
        let slug = &config.package_slug;
        match self {
            Self::ConfigMerge => format!(
                "        $this->mergeConfigFrom(\n            \
                 __DIR__.'/../config/{slug}.php', '{slug}'\n        );\n\n"
            ),
            Self::ConfigPublish => format!(
                "        $this->publishes([\n            \
                 __DIR__.'/../config/{slug}.php' => config_path('{slug}.php'),\n        \
                 ], '{slug}-config');\n\n"
            ),
            Self::MigrationPublish => format!(
                "        $this->publishesMigrations([\n            \
                 __DIR__.'/../database/migrations' => database_path('migrations'),\n        \
                 ], '{slug}-migrations');\n\n"
            ),
            Self::RoutesLoad => {
                "        $this->loadRoutesFrom(__DIR__.'/../routes/web.php');\n\n".to_string()
            }
            Self::TranslationsLoad => format!(
                "        $this->loadTranslationsFrom(__DIR__.'/../lang', '{slug}');\n\n"
            ),
            Self::TranslationsPublish => format!(
                "        $this->publishes([\n            \
                 __DIR__.'/../lang' => $this->app->langPath('vendor/{slug}'),\n        \
                 ], '{slug}-lang');\n\n"
            ),
            Self::ViewsLoad => format!(
                "        $this->loadViewsFrom(__DIR__.'/../resources/views', '{slug}');\n\n"
            ),
            Self::ViewsPublish => format!(
                "        $this->publishes([\n            \
                 __DIR__.'/../resources/views' => resource_path('views/vendor/{slug}'),\n        \
                 ], '{slug}-views');\n\n"
            ),
        }
    }
}

/// Relative path of the generated provider file.
pub fn provider_path(derived: &DerivedIdentifiers) -> PathBuf {
    PathBuf::from(format!("src/{}ServiceProvider.php", derived.class_name()))
}

/// Assemble the complete provider source.
///
/// The class is well-formed for every flag combination; with no flags set
/// both hook bodies are simply empty.
pub fn build_provider_source(config: &ScaffoldConfig, derived: &DerivedIdentifiers) -> String {
    let mut src = String::new();

    src.push_str("<?php\n\n");
    src.push_str(&format!("namespace {};\n\n", derived.php_namespace()));
    src.push_str("use Illuminate\\Support\\ServiceProvider;\n\n");
    src.push_str(&format!(
        "class {}ServiceProvider extends ServiceProvider\n",
        derived.class_name()
    ));
    src.push_str("{\n");

    src.push_str("    public function register()\n    {\n");
    for fragment in register_fragments(&config.features) {
        src.push_str(&fragment.render(config));
    }
    src.push_str("    }\n\n");

    src.push_str("    public function boot()\n    {\n");
    for fragment in boot_fragments(&config.features) {
        src.push_str(&fragment.render(config));
    }
    src.push_str("    }\n");

    src.push_str("}\n");
    src
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(features: FeatureFlags) -> ScaffoldConfig {
        ScaffoldConfig {
            package_slug: "cool-widgets".into(),
            description: String::new(),
            author_slug: "jane-doe".into(),
            author_name: String::new(),
            author_email: String::new(),
            features,
        }
    }

    #[test]
    fn no_flags_yields_no_fragments() {
        let features = FeatureFlags::none();
        assert!(register_fragments(&features).is_empty());
        assert!(boot_fragments(&features).is_empty());
    }

    #[test]
    fn config_flag_yields_exactly_merge_and_publish() {
        let features = FeatureFlags {
            config: true,
            ..FeatureFlags::none()
        };
        assert_eq!(register_fragments(&features), vec![Fragment::ConfigMerge]);
        assert_eq!(boot_fragments(&features), vec![Fragment::ConfigPublish]);
    }

    #[test]
    fn language_files_flag_yields_load_then_publish() {
        let features = FeatureFlags {
            language_files: true,
            ..FeatureFlags::none()
        };
        assert_eq!(
            boot_fragments(&features),
            vec![Fragment::TranslationsLoad, Fragment::TranslationsPublish]
        );
    }

    #[test]
    fn all_flags_yield_the_fixed_boot_order() {
        assert_eq!(
            boot_fragments(&FeatureFlags::all()),
            vec![
                Fragment::ConfigPublish,
                Fragment::MigrationPublish,
                Fragment::RoutesLoad,
                Fragment::TranslationsLoad,
                Fragment::TranslationsPublish,
                Fragment::ViewsLoad,
                Fragment::ViewsPublish,
            ]
        );
    }

    #[test]
    fn empty_provider_is_still_a_well_formed_class() {
        let config = config(FeatureFlags::none());
        let derived = DerivedIdentifiers::from_config(&config);
        let src = build_provider_source(&config, &derived);

        assert!(src.starts_with("<?php\n"));
        assert!(src.contains("namespace JaneDoe\\CoolWidgets;"));
        assert!(src.contains("class CoolWidgetsServiceProvider extends ServiceProvider"));
        assert!(src.contains("    public function register()\n    {\n    }\n"));
        assert!(src.contains("    public function boot()\n    {\n    }\n"));
        assert!(src.ends_with("}\n"));
        // Balanced braces: one class + two methods.
        assert_eq!(src.matches('{').count(), src.matches('}').count());
    }

    #[test]
    fn config_only_provider_contains_one_merge_and_one_publish() {
        let config = config(FeatureFlags {
            config: true,
            ..FeatureFlags::none()
        });
        let derived = DerivedIdentifiers::from_config(&config);
        let src = build_provider_source(&config, &derived);

        assert_eq!(src.matches("mergeConfigFrom").count(), 1);
        assert_eq!(src.matches("$this->publishes").count(), 1);
        assert!(src.contains("'cool-widgets-config'"));
        assert!(!src.contains("publishesMigrations"));
        assert!(!src.contains("loadRoutesFrom"));
        assert!(!src.contains("loadTranslationsFrom"));
        assert!(!src.contains("loadViewsFrom"));
    }

    #[test]
    fn full_provider_interpolates_the_slug_verbatim() {
        let config = config(FeatureFlags::all());
        let derived = DerivedIdentifiers::from_config(&config);
        let src = build_provider_source(&config, &derived);

        for needle in [
            "__DIR__.'/../config/cool-widgets.php'",
            "'cool-widgets-migrations'",
            "loadRoutesFrom(__DIR__.'/../routes/web.php')",
            "langPath('vendor/cool-widgets')",
            "resource_path('views/vendor/cool-widgets')",
        ] {
            assert!(src.contains(needle), "missing: {needle}");
        }
    }

    #[test]
    fn provider_path_uses_class_name() {
        let config = config(FeatureFlags::none());
        let derived = DerivedIdentifiers::from_config(&config);
        assert_eq!(
            provider_path(&derived),
            PathBuf::from("src/CoolWidgetsServiceProvider.php")
        );
    }
}

//! End-to-end tests of the scaffold workflow against the in-memory adapter.

use std::path::Path;

use chrono::NaiveDate;

use larakit_adapters::MemoryFilesystem;
use larakit_core::{
    application::{ApplicationError, ScaffoldService},
    domain::{FeatureFlags, ScaffoldConfig},
    error::LarakitError,
};

fn config(features: FeatureFlags) -> ScaffoldConfig {
    ScaffoldConfig {
        package_slug: "cool-widgets".into(),
        description: "Widgets, but cool".into(),
        author_slug: "jane-doe".into(),
        author_name: "Jane Doe".into(),
        author_email: "jane@example.com".into(),
        features,
    }
}

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

#[test]
fn full_scaffold_produces_every_expected_file() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    service
        .scaffold(&config(FeatureFlags::all()), Path::new("pkg"), run_date())
        .unwrap();

    let expected = [
        "pkg/README.md",
        "pkg/composer.json",
        "pkg/src/CoolWidgetsServiceProvider.php",
        "pkg/config/config.php",
        "pkg/database/migrations/2026_08_07_000000_XXX.php",
        "pkg/routes/web.php",
        "pkg/src/Http/Controllers/Controller.php",
        "pkg/src/Http/Controllers/CoolWidgets.php",
        "pkg/lang/en/common.php",
        "pkg/lang/en/specific.php",
        "pkg/resources/views/xxx.blade.php",
    ];
    for path in expected {
        assert!(
            fs.read_file(Path::new(path)).is_some(),
            "missing file: {path}"
        );
    }
    assert_eq!(fs.file_count(), 11);

    // No file came out empty-namespaced.
    for path in [
        "pkg/src/CoolWidgetsServiceProvider.php",
        "pkg/routes/web.php",
        "pkg/src/Http/Controllers/Controller.php",
        "pkg/src/Http/Controllers/CoolWidgets.php",
    ] {
        let content = fs.read_file(Path::new(path)).unwrap();
        assert!(
            content.contains("JaneDoe\\CoolWidgets"),
            "namespace missing in {path}"
        );
        assert!(!content.contains("\\\\Http"), "doubled separator in {path}");
    }
}

#[test]
fn manifest_autoload_key_is_fully_namespaced() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    service
        .scaffold(&config(FeatureFlags::all()), Path::new("pkg"), run_date())
        .unwrap();

    let manifest = fs.read_file(Path::new("pkg/composer.json")).unwrap();
    assert!(manifest.contains(r#""JaneDoe\\CoolWidgets\\": "src""#));
    assert!(manifest.contains(r#""name": "jane-doe/cool-widgets""#));
    assert!(manifest.contains(r#""JaneDoe\\CoolWidgets\\CoolWidgetsServiceProvider""#));
}

#[test]
fn provider_contains_all_six_fragment_kinds_when_everything_is_enabled() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    service
        .scaffold(&config(FeatureFlags::all()), Path::new("pkg"), run_date())
        .unwrap();

    let provider = fs
        .read_file(Path::new("pkg/src/CoolWidgetsServiceProvider.php"))
        .unwrap();
    for needle in [
        "mergeConfigFrom",
        "config_path('cool-widgets.php')",
        "publishesMigrations",
        "loadRoutesFrom",
        "loadTranslationsFrom",
        "loadViewsFrom",
    ] {
        assert!(provider.contains(needle), "missing fragment: {needle}");
    }
}

#[test]
fn guard_aborts_with_no_side_effects_both_times() {
    let fs = MemoryFilesystem::new();
    fs.seed_file("pkg/composer.json", "{}");
    let service = ScaffoldService::new(Box::new(fs.clone()));

    for _ in 0..2 {
        let err = service
            .scaffold(&config(FeatureFlags::all()), Path::new("pkg"), run_date())
            .unwrap_err();
        assert!(matches!(
            err,
            LarakitError::Application(ApplicationError::AlreadyInitialized { .. })
        ));
        assert_eq!(fs.file_count(), 1, "guard must not write anything");
    }
}

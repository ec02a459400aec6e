//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Guard: refuse to run in an already-initialized directory
//! 2. Derive identifiers and assemble the package plan from the emitters
//! 3. Write the plan to the filesystem
//!
//! There is no retry and no partial-success recovery: if one step fails the
//! run stops instead of attempting the remaining independent steps.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DerivedIdentifiers, PackagePlan, ScaffoldConfig},
    emit::{
        MANIFEST_PATH, build_manifest, build_provider_source,
        provider::provider_path,
        stubs::{
            emit_config_stub, emit_controller_stubs, emit_language_stubs, emit_migration_stub,
            emit_readme, emit_routes_stub, emit_view_stub,
        },
    },
    error::{LarakitError, LarakitResult},
};

/// Main scaffolding service.
///
/// Orchestrates the guard, plan assembly, and write-out workflow.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Scaffold a package skeleton under `root`.
    ///
    /// This is the main use case. `run_date` stamps the migration filename;
    /// it is a parameter (not read from a clock here) so the whole plan stays
    /// a pure function of its inputs.
    ///
    /// Returns the written plan so callers can report what was created.
    #[instrument(skip_all, fields(package = %config.package_slug, root = %root.display()))]
    pub fn scaffold(
        &self,
        config: &ScaffoldConfig,
        root: &Path,
        run_date: NaiveDate,
    ) -> LarakitResult<PackagePlan> {
        // 1. Guard - must come before any side effect.
        self.check_not_initialized(root)?;

        // 2. Assemble
        let derived = DerivedIdentifiers::from_config(config);
        let plan = assemble_plan(config, &derived, run_date)?;
        plan.validate().map_err(LarakitError::Domain)?;
        info!(files = plan.file_count(), "Package plan assembled");

        // 3. Write
        self.write_plan(root, &plan)?;

        info!("Scaffold completed successfully");
        Ok(plan)
    }

    /// Refuse to scaffold when the manifest marker already exists.
    ///
    /// The marker is the manifest itself: its presence means a previous run
    /// (or a real package) lives here. Checked through the port so tests can
    /// simulate both states.
    pub fn check_not_initialized(&self, root: &Path) -> LarakitResult<()> {
        let marker = root.join(MANIFEST_PATH);
        if self.filesystem.exists(&marker) {
            return Err(ApplicationError::AlreadyInitialized { path: marker }.into());
        }
        Ok(())
    }

    /// Write all planned files, creating parent directories as needed.
    fn write_plan(&self, root: &Path, plan: &PackagePlan) -> LarakitResult<()> {
        for file in plan.files() {
            let path = root.join(&file.path);

            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            self.filesystem.write_file(&path, &file.content)?;
        }

        Ok(())
    }
}

/// Run every applicable emitter and collect the results.
///
/// Order: README, manifest, provider, then the flag-gated stubs. The steps
/// are independent; the order only keeps diffs familiar.
fn assemble_plan(
    config: &ScaffoldConfig,
    derived: &DerivedIdentifiers,
    run_date: NaiveDate,
) -> LarakitResult<PackagePlan> {
    use crate::domain::FileToWrite;

    let mut plan = PackagePlan::new();

    plan.add_file(emit_readme(config));

    let manifest = build_manifest(config, derived);
    let manifest_json = manifest
        .render()
        .map_err(|e| ApplicationError::Serialization {
            reason: e.to_string(),
        })?;
    plan.add_file(FileToWrite::new(MANIFEST_PATH, manifest_json));

    plan.add_file(FileToWrite::new(
        provider_path(derived),
        build_provider_source(config, derived),
    ));

    let features = &config.features;
    if features.config {
        plan.add_file(emit_config_stub());
    }
    if features.migration {
        plan.add_file(emit_migration_stub(run_date));
    }
    if features.routes {
        plan.add_file(emit_routes_stub(derived));
    }
    if features.controllers {
        plan.add_files(emit_controller_stubs(derived));
    }
    if features.language_files {
        plan.add_files(emit_language_stubs());
    }
    if features.views {
        plan.add_file(emit_view_stub());
    }

    Ok(plan)
}

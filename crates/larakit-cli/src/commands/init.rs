//! Implementation of the `larakit init` command.
//!
//! Responsibility: gather answers, call the core scaffold service, and
//! display results. No business logic lives here.

use std::path::Path;

use tracing::{info, instrument};

use larakit_adapters::LocalFilesystem;
use larakit_core::{application::ScaffoldService, domain::validate_slug};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute the `larakit init` command.
///
/// Dispatch sequence:
/// 1. Bail out before prompting if this directory is already initialized
/// 2. Gather answers (flags first, prompts for the rest)
/// 3. Optionally validate the slugs (`--validate-slugs`)
/// 4. Execute scaffolding via `ScaffoldService`
/// 5. Print the created files and next-steps guidance
#[instrument(skip_all)]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = Path::new(".");
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    // 1. Guard before asking a single question. The service re-checks right
    //    before writing; this early call just spares the user the interview.
    service.check_not_initialized(root).map_err(CliError::Core)?;

    // 2. Gather answers
    let scaffold = prompt::gather_config(&args, &config, !output.supports_color())?;

    // 3. Optional slug grammar check
    if args.validate_slugs {
        validate_slug(&scaffold.package_slug).map_err(|e| CliError::Core(e.into()))?;
        validate_slug(&scaffold.author_slug).map_err(|e| CliError::Core(e.into()))?;
    }

    // 4. Scaffold
    info!(package = %scaffold.package_slug, "Scaffold started");
    let run_date = chrono::Local::now().date_naive();
    let plan = service
        .scaffold(&scaffold, root, run_date)
        .map_err(CliError::Core)?;
    info!(package = %scaffold.package_slug, files = plan.file_count(), "Scaffold completed");

    // 5. Success + next steps
    output.success("Laravel package created successfully.")?;

    if !global.quiet {
        output.print("")?;
        output.print("Created files:")?;
        for file in plan.files() {
            output.print(&format!("  {}", file.path.display()))?;
        }
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  composer install")?;
        if scaffold.features.migration {
            output.print("  # Rename the migration's XXX placeholder to your table name")?;
        }
    }

    Ok(())
}

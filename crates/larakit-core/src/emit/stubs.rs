//! The optional artifact stubs: README, config, migration, routes,
//! controllers, language files, views.
//!
//! Everything here is deliberately a stub — empty arrays, empty bodies, an
//! unreplaced `XXX` placeholder in the migration. The user is expected to
//! fill these in; the scaffolder only guarantees the wiring around them is
//! correct.

use chrono::NaiveDate;

use crate::domain::{DerivedIdentifiers, FileToWrite, ScaffoldConfig};

/// An empty PHP array file, shared by the config and language stubs.
const EMPTY_PHP_ARRAY: &str = "<?php\n\nreturn [\n\n];\n";

/// `README.md` with composer install instructions.
pub fn emit_readme(config: &ScaffoldConfig) -> FileToWrite {
    let content = format!(
        "# {package}\n\n\
         ## Installation\n\n\
         You can install this package via composer:\n\n\
         ```bash\n\
         composer require {name}\n\
         ```",
        package = config.package_slug,
        name = config.composer_name(),
    );
    FileToWrite::new("README.md", content)
}

/// `config/config.php` — an empty key-value mapping.
pub fn emit_config_stub() -> FileToWrite {
    FileToWrite::new("config/config.php", EMPTY_PHP_ARRAY)
}

/// `database/migrations/<date>_000000_XXX.php`.
///
/// The `XXX` table/file token is intentionally left unreplaced: it is a
/// manual-completion point for the user, not a bug.
pub fn emit_migration_stub(run_date: NaiveDate) -> FileToWrite {
    let path = format!(
        "database/migrations/{}_000000_XXX.php",
        run_date.format("%Y_%m_%d")
    );
    let content = "<?php\n\n\
         use Illuminate\\Database\\Migrations\\Migration;\n\
         use Illuminate\\Database\\Schema\\Blueprint;\n\
         use Illuminate\\Support\\Facades\\Schema;\n\n\
         return new class extends Migration\n\
         {\n\
         \x20   public function up(): void\n\
         \x20   {\n\
         \x20       Schema::table('XXX', static function (Blueprint $table) {\n\n\
         \x20       });\n\
         \x20   }\n\n\
         \x20   public function down(): void\n\
         \x20   {\n\
         \x20       Schema::table('XXX', static function (Blueprint $table) {\n\n\
         \x20       });\n\
         \x20   }\n\
         };";
    FileToWrite::new(path, content)
}

/// `routes/web.php` — a grouped route block with an unused controller import.
pub fn emit_routes_stub(derived: &DerivedIdentifiers) -> FileToWrite {
    let content = format!(
        "<?php\n\n\
         use {namespace}\\Http\\Controllers\\{class}Controller;\n\n\
         Route::middleware(['auth', 'web'])->group(function () {{\n\n\
         }});\n",
        namespace = derived.php_namespace(),
        class = derived.class_name(),
    );
    FileToWrite::new("routes/web.php", content)
}

/// The base controller and the derived single-action controller stub.
pub fn emit_controller_stubs(derived: &DerivedIdentifiers) -> Vec<FileToWrite> {
    let base = format!(
        "<?php\n\n\
         namespace {namespace}\\Http\\Controllers;\n\n\
         use Illuminate\\Foundation\\Auth\\Access\\AuthorizesRequests;\n\
         use Illuminate\\Foundation\\Validation\\ValidatesRequests;\n\
         use Illuminate\\Routing\\Controller as BaseController;\n\n\
         class Controller extends BaseController\n\
         {{\n\
         \x20   use AuthorizesRequests, ValidatesRequests;\n\
         }}",
        namespace = derived.php_namespace(),
    );

    let action = format!(
        "<?php\n\n\
         namespace {namespace}\\Http\\Controllers;\n\n\
         use Illuminate\\View\\View;\n\
         use Illuminate\\Http\\RedirectResponse;\n\n\
         class {class} extends Controller\n\
         {{\n\
         \x20   public function __invoke(): View\n\
         \x20   {{\n\n\
         \x20   }}\n\
         }}",
        namespace = derived.php_namespace(),
        class = derived.class_name(),
    );

    vec![
        FileToWrite::new("src/Http/Controllers/Controller.php", base),
        FileToWrite::new(
            format!("src/Http/Controllers/{}.php", derived.class_name()),
            action,
        ),
    ]
}

/// `lang/en/common.php` and `lang/en/specific.php`.
pub fn emit_language_stubs() -> Vec<FileToWrite> {
    vec![
        FileToWrite::new("lang/en/common.php", EMPTY_PHP_ARRAY),
        FileToWrite::new("lang/en/specific.php", EMPTY_PHP_ARRAY),
    ]
}

/// `resources/views/xxx.blade.php` — a single empty markup fragment.
pub fn emit_view_stub() -> FileToWrite {
    FileToWrite::new("resources/views/xxx.blade.php", "<div>\n\n</div>\n")
}

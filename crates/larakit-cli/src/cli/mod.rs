//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "larakit",
    bin_name = "larakit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Laravel package skeletons, interactively",
    long_about = "Larakit asks a handful of questions and writes a ready-to-publish \
                  Laravel package skeleton into the current directory.",
    after_help = "EXAMPLES:\n\
        \x20 larakit init\n\
        \x20 larakit init --name cool-widgets --author jane-doe --all\n\
        \x20 larakit init --name cool-widgets --author jane-doe --features config,routes\n\
        \x20 larakit completions bash > /usr/share/bash-completion/completions/larakit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a Laravel package skeleton in the current directory.
    #[command(
        visible_alias = "i",
        about = "Scaffold a package skeleton here",
        after_help = "EXAMPLES:\n\
            \x20 larakit init                      # fully interactive\n\
            \x20 larakit init --all --name cool-widgets --author jane-doe \\\n\
            \x20     --description 'Widgets' --author-name 'Jane Doe' --author-email jane@example.com\n\
            \x20 larakit init --minimal --name tiny-pkg --author jane-doe"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 larakit completions bash > ~/.local/share/bash-completion/completions/larakit\n\
            \x20 larakit completions zsh  > ~/.zfunc/_larakit\n\
            \x20 larakit completions fish > ~/.config/fish/completions/larakit.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `larakit init`.
///
/// Every answer the interactive flow would ask for can be supplied as a flag;
/// a provided flag skips its prompt, so a fully-flagged invocation never
/// touches stdin (useful in scripts and CI).
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Package slug, e.g. `cool-widgets`.
    #[arg(long = "name", value_name = "SLUG", help = "Package name (format: package-name)")]
    pub name: Option<String>,

    /// Package description.
    #[arg(long = "description", value_name = "TEXT", help = "Package description")]
    pub description: Option<String>,

    /// Author/vendor slug, e.g. `jane-doe`.
    #[arg(long = "author", value_name = "SLUG", help = "Author login (format: username)")]
    pub author: Option<String>,

    /// Author's full name.
    #[arg(long = "author-name", value_name = "NAME", help = "Author's full name")]
    pub author_name: Option<String>,

    /// Author's email address.
    #[arg(long = "author-email", value_name = "EMAIL", help = "Author's email")]
    pub author_email: Option<String>,

    /// Enable every optional artifact, skipping the yes/no prompts.
    #[arg(long = "all", conflicts_with_all = ["minimal", "features"], help = "Generate all optional artifacts")]
    pub all: bool,

    /// Disable every optional artifact, skipping the yes/no prompts.
    #[arg(long = "minimal", conflicts_with = "features", help = "Generate no optional artifacts")]
    pub minimal: bool,

    /// Exactly which optional artifacts to generate, skipping the prompts.
    #[arg(
        long = "features",
        value_name = "LIST",
        value_enum,
        value_delimiter = ',',
        help = "Comma-separated artifact list (config,migration,routes,controllers,lang,views)"
    )]
    pub features: Vec<Feature>,

    /// Reject slugs that don't match `[a-z0-9]+(-[a-z0-9]+)*`.
    ///
    /// By default slugs are interpolated into the generated source verbatim,
    /// malformed or not.
    #[arg(long = "validate-slugs", help = "Reject malformed slugs instead of passing them through")]
    pub validate_slugs: bool,
}

/// The optional artifacts, as accepted by `--features`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Feature {
    Config,
    Migration,
    Routes,
    Controllers,
    #[value(alias = "language-files")]
    Lang,
    Views,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `larakit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_init_with_answer_flags() {
        let cli = Cli::parse_from([
            "larakit",
            "init",
            "--name",
            "cool-widgets",
            "--author",
            "jane-doe",
            "--all",
        ]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.name.as_deref(), Some("cool-widgets"));
                assert_eq!(args.author.as_deref(), Some("jane-doe"));
                assert!(args.all);
                assert!(args.features.is_empty());
            }
            other => panic!("expected Init, got {other:?}"),
        }
    }

    #[test]
    fn features_list_parses_comma_separated() {
        let cli = Cli::parse_from(["larakit", "init", "--features", "config,routes,lang"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(
                args.features,
                vec![Feature::Config, Feature::Routes, Feature::Lang]
            );
        } else {
            panic!("expected Init command");
        }
    }

    #[test]
    fn all_conflicts_with_features() {
        let result = Cli::try_parse_from(["larakit", "init", "--all", "--features", "config"]);
        assert!(result.is_err());
    }

    #[test]
    fn all_conflicts_with_minimal() {
        let result = Cli::try_parse_from(["larakit", "init", "--all", "--minimal"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["larakit", "--quiet", "--verbose", "init"]);
        assert!(result.is_err());
    }

    #[test]
    fn init_has_a_short_alias() {
        let cli = Cli::parse_from(["larakit", "i", "--minimal"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}

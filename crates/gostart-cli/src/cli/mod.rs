//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use gostart_core::domain::UnitFileMode;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand the binary runs the service entry point using the
/// flags in [`ServeArgs`].
#[derive(Debug, Parser)]
#[command(
    name    = "gostart",
    bin_name = "gostart",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Service template with a one-shot project initializer",
    long_about = "Without a subcommand, starts the service and waits for SIGINT/SIGTERM. \
                  Run `gostart init` once in a fresh copy of the template to rename it.",
    after_help = "EXAMPLES:\n\
        \x20 gostart init\n\
        \x20 gostart init --unit-mode in-place\n\
        \x20 gostart --port 8080 --log-format json\n\
        \x20 gostart completions bash > /usr/share/bash-completion/completions/gostart",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Service flags, used when no subcommand is given.
    #[command(flatten)]
    pub serve: ServeArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rename the template project.
    #[command(
        about = "Rename the template project (module path, binary, deploy settings)",
        after_help = "EXAMPLES:\n\
            \x20 gostart init\n\
            \x20 gostart init --unit-mode in-place\n\
            \x20 printf 'app\\ngithub.com/me/app\\n\\n\\n\\ny\\n' | gostart init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gostart completions bash > ~/.local/share/bash-completion/completions/gostart\n\
            \x20 gostart completions zsh  > ~/.zfunc/_gostart\n\
            \x20 gostart completions fish > ~/.config/fish/completions/gostart.fish"
    )]
    Completions(CompletionsArgs),
}

// ── service ───────────────────────────────────────────────────────────────────

/// Flags of the service entry point.
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Port to listen on.
    #[arg(
        long = "port",
        value_name = "PORT",
        default_value_t = 4000,
        help = "Port to listen on"
    )]
    pub port: u16,

    /// Log line format.
    #[arg(
        long = "log-format",
        value_name = "FORMAT",
        value_enum,
        default_value_t = LogFormat::Text,
        help = "Log format"
    )]
    pub log_format: LogFormat,
}

/// How log lines are rendered on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `gostart init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// What to do with service-unit files; defaults to the configured mode.
    #[arg(
        long = "unit-mode",
        value_name = "MODE",
        value_enum,
        help = "Rename unit files to <project>.<ext> or rewrite them in place"
    )]
    pub unit_mode: Option<UnitMode>,

    /// Answer the final confirmation with yes.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip the confirmation prompt"
    )]
    pub yes: bool,
}

/// CLI spelling of [`UnitFileMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitMode {
    Rename,
    InPlace,
}

impl From<UnitMode> for UnitFileMode {
    fn from(mode: UnitMode) -> Self {
        match mode {
            UnitMode::Rename => UnitFileMode::Rename,
            UnitMode::InPlace => UnitFileMode::InPlace,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gostart completions`.
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

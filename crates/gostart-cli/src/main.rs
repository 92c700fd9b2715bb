//! # gostart
//!
//! Service template binary with a one-shot project initializer.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Build the tracing subscriber and install it for the rest of the run.
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                      |
//! |------|----------------------------------------------|
//! |  0   | Success, cancelled init, or clean shutdown   |
//! |  1   | Any init or runtime failure                  |
//! |  2   | Invalid command-line arguments               |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands, LogFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::build_subscriber,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else; a missing file is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `exit` prints help/version to stdout with status 0 and usage
        // errors to stderr with status 2.
        Err(e) => e.exit(),
    };

    // ── 2. Logging, scoped to this run ────────────────────────────────────
    let (baseline, format) = match cli.command {
        None => ("info", cli.serve.log_format),
        Some(_) => ("warn", LogFormat::Text),
    };
    let subscriber = build_subscriber(&cli.global, baseline, format);
    let verbose = cli.global.verbose > 0;

    let result = tracing::subscriber::with_default(subscriber, || {
        debug!(
            verbose = cli.global.verbose,
            quiet = cli.global.quiet,
            no_color = cli.global.no_color,
            "CLI started"
        );
        run(cli).inspect_err(CliError::log)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(&e, verbose),
    }
}

/// Load config and dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = AppConfig::load(cli.global.config.as_deref()).map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: Some(e.into()),
    })?;

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch ───────────────────────────────────────────────────────
    match cli.command {
        None => commands::serve::execute(cli.serve),
        Some(Commands::Init(cmd)) => commands::init::execute(cmd, config, output),
        Some(Commands::Completions(cmd)) => commands::completions::execute(cmd),
    }
}

/// Print a user-facing report for `err` and pick the exit code.
fn handle_error(err: &CliError, verbose: bool) -> ExitCode {
    // Colour only when stderr is a TTY (same rule as logging.rs).
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

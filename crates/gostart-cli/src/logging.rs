//! Tracing subscriber construction.
//!
//! Only the CLI crate builds subscribers; `gostart-core` and
//! `gostart-adapters` only *emit* spans and events. The subscriber is handed
//! back to `main`, which installs it for the duration of the run with
//! [`tracing::subscriber::with_default`] instead of setting a process-wide
//! global.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level                                  |
//! |----------|-----------------------------------------------|
//! | (none)   | the command's baseline (WARN, INFO for serve) |
//! | `-v`     | INFO                                          |
//! | `-vv`    | DEBUG                                         |
//! | `-vvv`   | TRACE                                         |
//! | `--quiet`| ERROR                                         |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt};

use crate::cli::{GlobalArgs, LogFormat};

/// Crates whose events pass the filter.
const TARGETS: [&str; 3] = ["gostart", "gostart_core", "gostart_adapters"];

/// Build the subscriber for this run.
///
/// `baseline` is the level used when neither `-v` nor `--quiet` is given.
/// Every line carries a timestamp plus the file and line it came from.
pub fn build_subscriber(
    args: &GlobalArgs,
    baseline: &'static str,
    format: LogFormat,
) -> impl Subscriber + Send + Sync + 'static {
    let level = derive_level(args, baseline);

    // RUST_LOG wins; otherwise every workspace crate gets the same level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(level)));

    let layer = match format {
        LogFormat::Text => {
            let use_ansi = !args.no_color && std::io::stderr().is_terminal();
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr)
                .boxed()
        }
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_file(true)
            .with_line_number(true)
            .with_current_span(false)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry().with(filter).with(layer)
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(args: &GlobalArgs, baseline: &'static str) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => baseline,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

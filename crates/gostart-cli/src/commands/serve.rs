//! Service entry point: log one startup line, then wait for SIGINT or
//! SIGTERM and exit cleanly.
//!
//! No listener is started; `--port` is accepted and logged so deploy
//! tooling can pass it already.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, info, instrument};

use crate::{
    cli::ServeArgs,
    error::{CliError, CliResult},
};

/// Lifecycle of the running service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Running,
    ShuttingDown,
}

/// Why the main thread stopped waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shutdown {
    /// A termination signal arrived; holds its name, e.g. `SIGINT`.
    Signal(&'static str),
    /// The service's own work finished. Sent by whatever work the service
    /// runs once it grows some; the stub only ever stops on a signal.
    #[cfg_attr(not(test), allow(dead_code))]
    Completed,
}

/// Start the service and block until it is told to stop.
pub fn execute(args: ServeArgs) -> CliResult<()> {
    let (tx, rx) = mpsc::channel();
    spawn_signal_waiter(tx)?;
    run(&args, rx).map(|_| ())
}

/// Log startup, then block on the single shutdown channel.
#[instrument(skip_all, fields(port = args.port))]
fn run(args: &ServeArgs, shutdown: Receiver<Shutdown>) -> CliResult<Shutdown> {
    let mut state = ServiceState::Running;
    info!(
        port = args.port,
        log_format = %args.log_format,
        ?state,
        "Starting gostart service"
    );

    let reason = shutdown.recv().map_err(|e| CliError::SignalError {
        message: "signal waiter stopped before a signal arrived".into(),
        source: Some(Box::new(e)),
    })?;

    state = ServiceState::ShuttingDown;
    match reason {
        Shutdown::Signal(signal) => info!(signal, ?state, "Received shutdown signal"),
        Shutdown::Completed => info!(?state, "Service work completed"),
    }
    debug!("Exiting");
    Ok(reason)
}

/// Block SIGINT and SIGTERM on the calling thread and hand them to a waiter
/// thread that forwards the first one over `tx`.
///
/// Must run on the main thread before any other thread is spawned so every
/// thread inherits the mask.
#[cfg(unix)]
fn spawn_signal_waiter(tx: Sender<Shutdown>) -> CliResult<()> {
    use nix::sys::signal::{SigSet, Signal};

    let mut set = SigSet::empty();
    set.add(Signal::SIGINT);
    set.add(Signal::SIGTERM);
    set.thread_block().map_err(|errno| CliError::SignalError {
        message: "could not block SIGINT/SIGTERM".into(),
        source: Some(Box::new(errno)),
    })?;

    std::thread::Builder::new()
        .name("signal-waiter".into())
        .spawn(move || {
            // On error `tx` is dropped and the main thread's recv fails.
            if let Ok(signal) = set.wait() {
                let _ = tx.send(Shutdown::Signal(signal.as_str()));
            }
        })
        .map_err(|e| CliError::SignalError {
            message: "could not start the signal waiter thread".into(),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}

#[cfg(not(unix))]
fn spawn_signal_waiter(_tx: Sender<Shutdown>) -> CliResult<()> {
    Err(CliError::SignalError {
        message: "waiting for SIGINT/SIGTERM is only supported on Unix".into(),
        source: None,
    })
}

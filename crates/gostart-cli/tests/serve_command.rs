//! The service entry point: startup log line, then a clean exit on
//! SIGINT/SIGTERM.
#![cfg(unix)]

use std::io::{BufRead, BufReader, Read};
use std::process::{Command, ExitStatus, Stdio};

use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use tempfile::TempDir;

const STARTUP: &str = "Starting gostart service";

/// Start the service, wait for its startup line, deliver `signal`, and
/// return the exit status with everything it logged.
fn run_until(signal: Signal, args: &[&str]) -> (ExitStatus, String) {
    let dir = TempDir::new().unwrap();
    let mut child = Command::new(assert_cmd::cargo::cargo_bin!("gostart"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut stderr = BufReader::new(child.stderr.take().unwrap());
    let mut log = String::new();
    loop {
        let mut line = String::new();
        let read = stderr.read_line(&mut line).unwrap();
        assert!(read > 0, "service exited before logging startup:\n{log}");
        log.push_str(&line);
        if line.contains(STARTUP) {
            break;
        }
    }

    kill(Pid::from_raw(child.id() as i32), signal).unwrap();
    stderr.read_to_string(&mut log).unwrap();
    (child.wait().unwrap(), log)
}

#[test]
fn sigint_is_logged_and_exits_zero() {
    let (status, log) = run_until(Signal::SIGINT, &["--port", "8080"]);

    assert!(status.success(), "status {status:?}, log:\n{log}");
    assert!(log.contains("port=8080"), "{log}");
    assert!(log.contains("Received shutdown signal"), "{log}");
    assert!(log.contains("SIGINT"), "{log}");
}

#[test]
fn sigterm_is_logged_and_exits_zero() {
    let (status, log) = run_until(Signal::SIGTERM, &[]);

    assert!(status.success(), "status {status:?}, log:\n{log}");
    assert!(log.contains("port=4000"), "{log}");
    assert!(log.contains("SIGTERM"), "{log}");
}

#[test]
fn json_log_format_emits_json_lines() {
    let (status, log) = run_until(Signal::SIGINT, &["--log-format", "json"]);

    assert!(status.success());
    let startup = log.lines().find(|l| l.contains(STARTUP)).unwrap();
    assert!(startup.starts_with('{'), "{startup}");
    assert!(startup.contains("\"port\":4000"), "{startup}");
    assert!(startup.contains("\"line_number\""), "{startup}");
}


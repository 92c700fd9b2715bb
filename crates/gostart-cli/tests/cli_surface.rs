//! Help, version, completions and argument errors.

use assert_cmd::cargo;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands_and_service_flags() {
    cargo::cargo_bin_cmd!("gostart")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("completions"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--log-format"));
}

#[test]
fn init_help_shows_unit_mode() {
    cargo::cargo_bin_cmd!("gostart")
        .args(["init", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--unit-mode"))
        .stdout(predicate::str::contains("--yes"));
}

#[test]
fn version_flag() {
    cargo::cargo_bin_cmd!("gostart")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn bash_completions_mention_the_binary() {
    cargo::cargo_bin_cmd!("gostart")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gostart"));
}

#[test]
fn non_numeric_port_is_a_usage_error() {
    cargo::cargo_bin_cmd!("gostart")
        .args(["--port", "http"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--port"));
}

#[test]
fn unknown_log_format_is_a_usage_error() {
    cargo::cargo_bin_cmd!("gostart")
        .args(["--log-format", "xml"])
        .assert()
        .code(2);
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    cargo::cargo_bin_cmd!("gostart")
        .arg("deploy")
        .assert()
        .code(2);
}

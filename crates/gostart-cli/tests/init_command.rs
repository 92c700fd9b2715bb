//! Binary-level tests for `gostart init`.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const GO_MOD: &str = "module github.com/acme/go-start\n\ngo 1.22\n";

const MAKEFILE: &str = "\
PROJECT_NAME := \"go-start\"
EXEC_NAME := gostart
SSH_USER := ansible
DEPLOY_TARGET_IP := 192.168.1.100

build:
\tgo build -o bin/$(EXEC_NAME) ./cmd/$(PROJECT_NAME)
";

const UNIT: &str = "[Service]\nExecStart=/usr/local/bin/go-start --port 4000\n";

/// Answers: project name, module path, then defaults for exec name, SSH
/// user and deploy IP, then the confirmation.
const ANSWERS: &str = "myapp\ngithub.com/me/myapp\n\n\n\ny\n";

fn template(with_units: bool) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("go.mod"), GO_MOD).unwrap();
    fs::write(temp.path().join("Makefile"), MAKEFILE).unwrap();
    if with_units {
        fs::create_dir(temp.path().join("remote")).unwrap();
        fs::write(temp.path().join("remote/go-start.service"), UNIT).unwrap();
    }
    temp
}

fn gostart(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("gostart");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn read(dir: &Path, file: &str) -> String {
    fs::read_to_string(dir.join(file)).unwrap()
}

#[test]
fn init_renames_the_project() {
    let temp = template(true);

    gostart(temp.path())
        .arg("init")
        .write_stdin(ANSWERS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Go Project Template Initialization"))
        .stdout(predicate::str::contains("Module path:        github.com/me/myapp"))
        .stdout(predicate::str::contains("Deploy target IP:   <not set>"))
        .stdout(predicate::str::contains("\u{2713} Updated go.mod"))
        .stdout(predicate::str::contains("\u{2713} Updated Makefile"))
        .stdout(predicate::str::contains("\u{2713} Renamed"))
        .stdout(predicate::str::contains("Initialization complete!"));

    assert_eq!(read(temp.path(), "go.mod"), "module github.com/me/myapp\n\ngo 1.22\n");

    let makefile = read(temp.path(), "Makefile");
    assert!(makefile.contains("PROJECT_NAME := \"myapp\"\n"));
    assert!(makefile.contains("EXEC_NAME := myapp\n"));
    assert!(makefile.contains("SSH_USER := ansible\n"));
    assert!(makefile.contains("DEPLOY_TARGET_IP := 192.168.1.100\n"));

    assert_eq!(
        read(temp.path(), "remote/myapp.service"),
        "[Service]\nExecStart=/usr/local/bin/myapp --port 4000\n"
    );
    assert!(!temp.path().join("remote/go-start.service").exists());
}

#[test]
fn anything_but_y_cancels_without_changes() {
    let temp = template(true);

    gostart(temp.path())
        .arg("init")
        .write_stdin("myapp\ngithub.com/me/myapp\n\n\n\nyes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization cancelled."))
        .stdout(predicate::str::contains("Initializing project...").not());

    assert_eq!(read(temp.path(), "go.mod"), GO_MOD);
    assert_eq!(read(temp.path(), "Makefile"), MAKEFILE);
    assert_eq!(read(temp.path(), "remote/go-start.service"), UNIT);
}

#[test]
fn missing_module_line_fails_before_prompting() {
    let temp = template(true);
    fs::write(temp.path().join("go.mod"), "go 1.22\n").unwrap();

    gostart(temp.path())
        .arg("init")
        .write_stdin(ANSWERS)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Project name").not())
        .stderr(predicate::str::contains(
            "reading go.mod: module path not found in go.mod",
        ));

    assert_eq!(read(temp.path(), "Makefile"), MAKEFILE);
}

#[test]
fn missing_manifest_is_an_error() {
    let temp = TempDir::new().unwrap();

    gostart(temp.path())
        .arg("init")
        .write_stdin(ANSWERS)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("reading go.mod"));
}

#[test]
fn missing_unit_directory_is_only_a_warning() {
    let temp = template(false);

    gostart(temp.path())
        .arg("init")
        .write_stdin(ANSWERS)
        .assert()
        .success()
        .stdout(predicate::str::contains("no service-unit directory"))
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(read(temp.path(), "go.mod").contains("module github.com/me/myapp"));
}

#[test]
fn unit_path_that_is_a_file_is_a_warning() {
    let temp = template(false);
    fs::write(temp.path().join("remote"), "not a directory\n").unwrap();

    gostart(temp.path())
        .arg("init")
        .write_stdin(ANSWERS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning:"))
        .stdout(predicate::str::contains("not a directory"))
        .stdout(predicate::str::contains("Initialization complete!"));
}

#[test]
fn module_path_is_asked_again_until_given() {
    let temp = template(true);

    gostart(temp.path())
        .arg("init")
        .write_stdin("myapp\n\ngithub.com/me/myapp\n\n\n\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Module path is required!"));
}

#[test]
fn end_of_input_at_module_path_fails() {
    let temp = template(true);

    gostart(temp.path())
        .arg("init")
        .write_stdin("myapp\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("module path is required"));

    assert_eq!(read(temp.path(), "go.mod"), GO_MOD);
}

#[test]
fn in_place_mode_keeps_unit_names() {
    let temp = template(true);

    gostart(temp.path())
        .args(["init", "--unit-mode", "in-place", "--yes"])
        .write_stdin("myapp\ngithub.com/me/myapp\n\ndeploy\n10.0.0.7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Proceed with these settings?").not());

    assert_eq!(
        read(temp.path(), "remote/go-start.service"),
        "[Service]\nExecStart=/usr/local/bin/myapp --port 4000\n"
    );
    assert!(!temp.path().join("remote/myapp.service").exists());

    let makefile = read(temp.path(), "Makefile");
    assert!(makefile.contains("SSH_USER := deploy\n"));
    assert!(makefile.contains("DEPLOY_TARGET_IP := 10.0.0.7\n"));
}

#[test]
fn unit_mode_from_project_config_file() {
    let temp = template(true);
    fs::write(
        temp.path().join(".gostart.toml"),
        "[init]\nunit_mode = \"in-place\"\n",
    )
    .unwrap();

    gostart(temp.path())
        .arg("init")
        .write_stdin(ANSWERS)
        .assert()
        .success();

    assert!(temp.path().join("remote/go-start.service").exists());
    assert!(!temp.path().join("remote/myapp.service").exists());
}

#[test]
fn unit_mode_from_environment() {
    let temp = template(true);

    gostart(temp.path())
        .env("GOSTART_INIT__UNIT_MODE", "in-place")
        .arg("init")
        .write_stdin(ANSWERS)
        .assert()
        .success();

    assert!(temp.path().join("remote/go-start.service").exists());
}

#[test]
fn rename_conflict_is_downgraded_to_warning() {
    let temp = template(true);
    fs::write(temp.path().join("remote/myapp.service"), "hand-written\n").unwrap();

    gostart(temp.path())
        .arg("init")
        .write_stdin(ANSWERS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: refusing to rename"))
        .stdout(predicate::str::contains("Initialization complete!"));

    assert_eq!(read(temp.path(), "remote/myapp.service"), "hand-written\n");
}

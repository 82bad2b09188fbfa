//! End-to-end tests for the stencil binary.
//!
//! Each test gets its own templates root and working directory, wired in via
//! `STENCIL_TEMPLATES_DIR`; the host Node probe is pinned with
//! `STENCIL_NODE_VERSION` so the runtime gate behaves the same everywhere.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

struct Sandbox {
    templates: TempDir,
    workdir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let sandbox = Self {
            templates: TempDir::new().unwrap(),
            workdir: TempDir::new().unwrap(),
        };
        let base = sandbox.templates.path().join("base");
        fs::create_dir(&base).unwrap();
        fs::write(base.join("index.html"), "<title>{{app-name}}</title>").unwrap();
        fs::write(base.join("README.md"), "# {{app-name}}\n").unwrap();
        sandbox
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("stencil").unwrap();
        cmd.current_dir(self.workdir.path())
            .env("STENCIL_TEMPLATES_DIR", self.templates.path())
            .env("STENCIL_NODE_VERSION", "18.2.0")
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn scaffolds_default_template_with_substitution() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--name", "my-app"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "App \"my-app\" created successfully!",
        ));

    let app = sandbox.workdir.path().join("my-app");
    assert!(app.is_dir());
    assert_eq!(
        fs::read_to_string(app.join("index.html")).unwrap(),
        "<title>my-app</title>"
    );
    assert_eq!(
        fs::read_to_string(app.join("README.md")).unwrap(),
        "# my-app\n"
    );
}

#[test]
fn explicit_template_is_honored() {
    let sandbox = Sandbox::new();
    let minimal = sandbox.templates.path().join("minimal");
    fs::create_dir(&minimal).unwrap();
    fs::write(minimal.join("only.txt"), "{{app-name}}").unwrap();

    sandbox
        .cmd()
        .args(["--name", "demo", "--template", "minimal"])
        .assert()
        .success();

    let app = sandbox.workdir.path().join("demo");
    assert_eq!(fs::read_to_string(app.join("only.txt")).unwrap(), "demo");
    assert!(!app.join("index.html").exists());
}

#[test]
fn yarn_flag_is_accepted() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--name", "with-yarn", "--yarn"])
        .assert()
        .success();
}

#[test]
fn old_node_version_exits_1() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--name", "my-app"])
        .env("STENCIL_NODE_VERSION", "12.22.1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("You are running Node \"12.22.1\""));

    assert!(!sandbox.workdir.path().join("my-app").exists());
}

#[test]
fn unknown_value_key_exits_2() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--name", "ok-app", "--bogus", "value"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown argument \"bogus\"."));
}

#[test]
fn unknown_option_exits_3() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--name", "ok-app", "--bogus"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option \"bogus\"."));
}

#[test]
fn unknown_template_exits_4_and_creates_nothing() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--name", "ok-app", "--template", "nonexistent"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown template \"nonexistent\"."));

    assert!(!sandbox.workdir.path().join("ok-app").exists());
}

#[test]
fn invalid_package_name_exits_5_and_creates_nothing() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--name", "Invalid/Name"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid app name \"Invalid/Name\""));

    assert!(fs::read_dir(sandbox.workdir.path()).unwrap().next().is_none());
}

#[test]
fn missing_name_exits_5() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid app name \"\""));
}

#[test]
fn positional_argument_exits_2() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["stray", "--name", "ok-app"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown argument \"stray\"."));
}

#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `docbase` command isolated from the caller's environment and config.
fn docbase_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("docbase"));
    for var in [
        "DOCBASE_TOKEN",
        "DOCBASE_DOMAIN",
        "DOCBASE_VERBOSE",
        "DOCBASE_DEBUG",
        "DEBUG",
        "DOCBASE_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("DOCBASE_CONFIG", home.path().join("absent.toml"));
    cmd
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    docbase_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("view"))
        .stdout(predicate::str::contains("tags"));
}

#[test]
fn version_is_printed() {
    let home = TempDir::new().unwrap();
    docbase_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn invalid_post_id_fails() {
    let home = TempDir::new().unwrap();
    docbase_cmd(&home)
        .args(["view", "abc"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("illegal post id"));
}

#[test]
fn missing_post_id_fails() {
    let home = TempDir::new().unwrap();
    docbase_cmd(&home)
        .arg("edit")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("need to specify target post id"));
}

#[test]
fn verbose_errors_go_to_stderr() {
    let home = TempDir::new().unwrap();
    docbase_cmd(&home)
        .args(["--verbose", "view", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("illegal post id"));
}

#[test]
fn config_without_default_profile_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.toml");
    fs::write(&config, "[work]\nDomain = \"kray\"\nAccessToken = \"t\"\n").unwrap();

    docbase_cmd(&home)
        .env("DOCBASE_CONFIG", &config)
        .arg("tags")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("'default' profile not found"));
}

#[test]
fn missing_domain_fails_without_a_request() {
    let home = TempDir::new().unwrap();
    docbase_cmd(&home)
        .args(["--token", "t", "list"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("domain is not configured"));
}

#[test]
fn body_and_body_file_are_exclusive() {
    let home = TempDir::new().unwrap();
    docbase_cmd(&home)
        .args(["new", "--body", "x", "--body-file", "post.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

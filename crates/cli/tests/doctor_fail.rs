use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_fails_without_config() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope.toml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kegdex"));
    cmd.args(["doctor", "--config", missing.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL kegdex doctor"))
        .stdout(predicate::str::contains("config file not found"));
}

#[test]
fn doctor_fails_on_unknown_keg() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, "version = 1\n[kegs.notes]\npath = \"/tmp/notes\"\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kegdex"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap(), "--keg", "other"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("keg 'other' not found"));
}

#[test]
fn query_commands_fail_without_config() {
    let tmp = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kegdex"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("list");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error loading config"));
}

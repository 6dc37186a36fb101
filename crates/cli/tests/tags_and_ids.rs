use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::{TempDir, tempdir};

fn sample_keg() -> TempDir {
    let tmp = tempdir().unwrap();
    for id in [0, 1, 5, 12] {
        let dir = tmp.path().join(id.to_string());
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("README.md"), format!("# Node {id}\n")).unwrap();
    }
    fs::create_dir(tmp.path().join("dex")).unwrap();
    fs::write(tmp.path().join("dex/tags"), "foo 2 6 3\nbar 8\n").unwrap();
    tmp
}

fn kegdex(keg: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kegdex"));
    cmd.arg("--keg-dir").arg(keg);
    cmd
}

#[test]
fn tags_in_request_order() {
    let keg = sample_keg();
    kegdex(keg.path()).args(["tags", "foo"]).assert().success().stdout("foo 2 6 3\n");
    kegdex(keg.path())
        .args(["tags", "bar,foo"])
        .assert()
        .success()
        .stdout("bar 8\nfoo 2 6 3\n");
}

#[test]
fn unknown_tag_fails_quietly() {
    let keg = sample_keg();
    kegdex(keg.path()).args(["tags", "nope"]).assert().failure().stdout("");
}

#[test]
fn first_last_next() {
    let keg = sample_keg();
    kegdex(keg.path()).arg("first").assert().success().stdout("1\n");
    kegdex(keg.path()).arg("last").assert().success().stdout("12\n");
    kegdex(keg.path()).arg("next").assert().success().stdout("13\n");
}

#[test]
fn ids_for_missing_keg_fail() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("missing");
    kegdex(&missing).arg("last").assert().failure();
    kegdex(&missing)
        .arg("next")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn updated_after_build() {
    let keg = sample_keg();
    kegdex(keg.path())
        .arg("updated")
        .assert()
        .failure()
        .stderr(predicate::str::contains("kegdex build"));

    kegdex(keg.path()).arg("build").assert().success();
    kegdex(keg.path())
        .arg("updated")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{4}-\d\d-\d\d \d\d:\d\d:\d\dZ\n$").unwrap());
}

#[test]
fn import_takes_next_id() {
    let keg = sample_keg();
    let outside = tempdir().unwrap();
    let draft = outside.path().join("draft");
    fs::create_dir(&draft).unwrap();
    fs::write(draft.join("README.md"), "# Imported\n").unwrap();

    kegdex(keg.path())
        .arg("import")
        .arg(&draft)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("13\n"));
    assert!(keg.path().join("13/README.md").exists());
    assert!(!draft.exists());
}

#[test]
fn import_refuses_taken_id() {
    let keg = sample_keg();
    let outside = tempdir().unwrap();

    kegdex(keg.path())
        .arg("import")
        .arg(outside.path())
        .arg("5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn draft_prints_readme_path() {
    let out = Command::new(assert_cmd::cargo::cargo_bin!("kegdex")).arg("draft").output().unwrap();
    assert!(out.status.success());
    let path = String::from_utf8(out.stdout).unwrap();
    let doc = Path::new(path.trim_end());
    assert!(doc.ends_with("README.md"));
    assert!(doc.is_file());
    let dir = doc.parent().unwrap();
    assert!(dir.file_name().unwrap().to_str().unwrap().starts_with("keg-node-"));
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn completions_for_bash() {
    Command::new(assert_cmd::cargo::cargo_bin!("kegdex"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kegdex"));
}

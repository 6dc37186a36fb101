use kegdex_core::config::loader::ConfigLoader;
use kegdex_core::config::types::ResolvedConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_current_keg_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
current = "notes"

[kegs.notes]
path = "/tmp/kegs/notes"

[kegs.work]
path = "/tmp/kegs/work"

[title]
max_heading_len = 60

[logging]
level = "debug"
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_keg, "notes");
    assert_eq!(rc.keg_root.display().to_string(), "/tmp/kegs/notes");
    assert_eq!(rc.kegs.len(), 2);
    assert_eq!(rc.title.max_heading_len, 60);
    assert_eq!(rc.resolver().max_heading_len(), 60);
    assert_eq!(rc.logging.level, "debug");
    assert!(rc.logging.file.is_none());
}

#[test]
fn load_with_keg_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("kegdex/config.toml");
    let toml = r#"
version = 1
current = "notes"

[kegs.notes]
path = "/tmp/kegs/notes"

[kegs.work]
path = "/tmp/kegs/work"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("work")).expect("should load");
    assert_eq!(rc.active_keg, "work");
    assert_eq!(rc.keg_root.display().to_string(), "/tmp/kegs/work");
}

#[test]
fn single_keg_needs_no_current() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n[kegs.only]\npath = \"/tmp/only\"\n");

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_keg, "only");
    assert_eq!(rc.title.max_heading_len, 100);
    assert_eq!(rc.logging.level, "warn");
}

#[test]
fn home_is_expanded() {
    let Some(home) = dirs::home_dir() else {
        return;
    };
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(
        &cfg_path,
        "version = 1\n[kegs.notes]\npath = \"~/kegs/notes\"\n[logging]\nfile = \"~/kegdex.log\"\n",
    );

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.keg_root, home.join("kegs/notes"));
    assert_eq!(rc.logging.file, Some(home.join("kegdex.log")));
}

#[test]
fn keg_dir_without_config() {
    let rc = ResolvedConfig::for_keg_dir(Path::new("/tmp/kegs/direct"));
    assert_eq!(rc.active_keg, "direct");
    assert_eq!(rc.keg_root, Path::new("/tmp/kegs/direct"));
    assert_eq!(rc.resolver().max_heading_len(), 100);
}

//! Filesystem helpers: recursive change time and locked atomic overwrite.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fs2::FileExt;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

/// Most recently modified file anywhere below `dir`.
///
/// Only regular files are considered. Returns `None` for a directory with no
/// files in it.
pub fn latest_change(dir: &Path) -> Result<Option<(PathBuf, SystemTime)>, walkdir::Error> {
    let mut latest: Option<(PathBuf, SystemTime)> = None;

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let modified = entry
            .metadata()?
            .modified()
            .unwrap_or(std::time::UNIX_EPOCH);
        if latest.as_ref().is_none_or(|(_, t)| modified > *t) {
            latest = Some((entry.into_path(), modified));
        }
    }

    Ok(latest)
}

/// Replace the contents of `path` in one step.
///
/// The new content goes to a temporary file in the same directory which is
/// then renamed over `path`, so readers see either the old or the new file.
/// An exclusive advisory lock on `<path>.lock` is held for the duration of
/// the write. Missing parent directories are created.
pub fn overwrite(path: &Path, contents: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let lock = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path(path))?;
    lock.lock_exclusive()?;

    let result = write_replace(parent, path, contents);

    FileExt::unlock(&lock)?;
    result
}

fn write_replace(dir: &Path, path: &Path, contents: &str) -> io::Result<()> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn lock_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".lock");
    path.with_file_name(name)
}

//! Reading and writing the artifacts kept under `<keg>/dex/`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::{NoExpand, Regex};
use thiserror::Error;

use super::scan;
use crate::dex::{BuildError, BuildStats, Dex, DexBuilder, NodeId, ProgressCallback};
use crate::fsutil;
use crate::tags::{TagError, TagIndex};
use crate::timestamp;
use crate::title::{NODE_DOC, TitleResolver};

/// Directory holding generated artifacts.
pub const DEX_DIR: &str = "dex";
pub const NODES_JSON: &str = "nodes.json";
pub const NODES_MD: &str = "nodes.md";
pub const TAGS_FILE: &str = "tags";
/// Root descriptor of a keg.
pub const KEG_FILE: &str = "keg";

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(timestamp::ISO_DATE_PATTERN).expect("valid timestamp pattern"));

static UPDATED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^updated:[^\r\n]*").expect("valid updated pattern"));

#[derive(Debug, Error)]
pub enum KegError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid dex json in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no timestamp found in {0}")]
    NoTimestamp(PathBuf),

    #[error("bad timestamp {value:?} in {path}: {source}")]
    Timestamp {
        path: PathBuf,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("keg root {0} is not a directory")]
    NoRoot(PathBuf),

    #[error("node already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("failed to move {from} to {to}: {source}")]
    Import {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("bad tag index {path}: {source}")]
    Tags {
        path: PathBuf,
        #[source]
        source: TagError,
    },
}

pub fn dex_dir(root: &Path) -> PathBuf {
    root.join(DEX_DIR)
}

pub fn nodes_json_path(root: &Path) -> PathBuf {
    dex_dir(root).join(NODES_JSON)
}

pub fn nodes_md_path(root: &Path) -> PathBuf {
    dex_dir(root).join(NODES_MD)
}

pub fn tags_path(root: &Path) -> PathBuf {
    dex_dir(root).join(TAGS_FILE)
}

/// Build a dex for `root` without writing anything.
pub fn scan_dex(root: &Path, resolver: &TitleResolver) -> Result<Dex, KegError> {
    Ok(DexBuilder::new(resolver).scan(root)?)
}

/// Rebuild the dex for `root`, overwrite both artifacts, then stamp the keg
/// descriptor with the new freshness time.
///
/// `root` must already be a directory; nothing is created outside it.
pub fn make_dex(
    root: &Path,
    resolver: &TitleResolver,
    progress: Option<ProgressCallback>,
) -> Result<BuildStats, KegError> {
    require_root(root)?;
    let (dex, stats) = DexBuilder::new(resolver).scan_with_stats(root, progress)?;
    write_dex(root, &dex)?;
    update_updated(root)?;
    Ok(stats)
}

/// Overwrite `dex/nodes.json` and `dex/nodes.md` with views of `dex`.
pub fn write_dex(root: &Path, dex: &Dex) -> Result<(), KegError> {
    require_root(root)?;
    let json_path = nodes_json_path(root);
    let json = dex
        .to_json()
        .map_err(|source| KegError::Json { path: json_path.clone(), source })?;
    write_artifact(&json_path, &json)?;
    write_artifact(&nodes_md_path(root), &dex.md())?;
    tracing::info!("wrote {} entries to {}", dex.len(), dex_dir(root).display());
    Ok(())
}

fn require_root(root: &Path) -> Result<(), KegError> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(KegError::NoRoot(root.to_path_buf()))
    }
}

fn write_artifact(path: &Path, contents: &str) -> Result<(), KegError> {
    fsutil::overwrite(path, contents)
        .map_err(|source| KegError::Write { path: path.to_path_buf(), source })
}

/// Load `dex/nodes.json`. A missing file gives an empty dex.
pub fn read_dex(root: &Path) -> Result<Dex, KegError> {
    let path = nodes_json_path(root);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Dex::new()),
        Err(source) => return Err(KegError::Read { path, source }),
    };
    Dex::from_json(&content).map_err(|source| KegError::Json { path, source })
}

/// Whether both generated artifacts exist.
pub fn have_dex(root: &Path) -> bool {
    nodes_json_path(root).is_file() && nodes_md_path(root).is_file()
}

/// Timestamp on the first line of `dex/nodes.md`.
///
/// The markdown view is ordered most recent first, so this is the latest
/// change in the keg as of the last build.
pub fn try_updated(root: &Path) -> Result<DateTime<Utc>, KegError> {
    let path = nodes_md_path(root);
    let content =
        fs::read_to_string(&path).map_err(|source| KegError::Read { path: path.clone(), source })?;
    let first_line = content.lines().next().unwrap_or_default();
    let Some(found) = ISO_DATE_RE.find(first_line) else {
        return Err(KegError::NoTimestamp(path));
    };
    timestamp::parse(found.as_str()).map_err(|source| KegError::Timestamp {
        path,
        value: found.as_str().to_string(),
        source,
    })
}

/// Best-effort [`try_updated`]: failures are logged and give `None`.
pub fn updated(root: &Path) -> Option<DateTime<Utc>> {
    match try_updated(root) {
        Ok(t) => Some(t),
        Err(e) => {
            tracing::warn!("cannot determine when {} was updated: {e}", root.display());
            None
        }
    }
}

/// [`updated`] in canonical form, or an empty string.
pub fn updated_string(root: &Path) -> String {
    updated(root).map(|t| timestamp::format_iso(&t)).unwrap_or_default()
}

/// Rewrite the first `updated:` line of the keg descriptor to the current
/// freshness value. Other lines are left as they are.
pub fn update_updated(root: &Path) -> Result<(), KegError> {
    let path = root.join(KEG_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("no keg file at {}, not stamping update time", path.display());
            return Ok(());
        }
        Err(source) => return Err(KegError::Read { path, source }),
    };

    let line = format!("updated: {}", updated_string(root));
    let replaced = UPDATED_LINE_RE.replace(&content, NoExpand(&line));
    if replaced == content {
        return Ok(());
    }
    write_artifact(&path, &replaced)
}

/// Lowest positive node id in `root`.
pub fn first(root: &Path) -> Option<NodeId> {
    scan::scan_node_dirs(root).ids().find(|&id| id > 0)
}

/// Highest node id in `root`.
pub fn last(root: &Path) -> Option<NodeId> {
    let found = scan::scan_node_dirs(root);
    (!found.is_empty()).then_some(found.max)
}

/// Id for the next new node: one past [`last`], or 1 for an empty keg.
///
/// `None` when `root` is not a directory.
pub fn next_id(root: &Path) -> Option<NodeId> {
    if !root.is_dir() {
        return None;
    }
    Some(last(root).map_or(1, |id| id.saturating_add(1)).max(1))
}

/// Move the node directory `from` into `root` under `id`.
pub fn import_node(from: &Path, root: &Path, id: NodeId) -> Result<PathBuf, KegError> {
    let to = root.join(id.to_string());
    if to.exists() {
        return Err(KegError::AlreadyExists(to));
    }
    fs::rename(from, &to).map_err(|source| KegError::Import {
        from: from.to_path_buf(),
        to: to.clone(),
        source,
    })?;
    tracing::info!("imported {} as node {id}", from.display());
    Ok(to)
}

/// Create a `keg-node-*` temporary directory holding an empty document and
/// return the path of that document. The directory is left in place.
pub fn make_temp_node() -> io::Result<PathBuf> {
    let dir = tempfile::Builder::new().prefix("keg-node-").tempdir()?.keep();
    let doc = dir.join(NODE_DOC);
    fs::File::create(&doc)?;
    Ok(doc)
}

/// Load `dex/tags`. A missing file gives an empty index.
pub fn read_tags(root: &Path) -> Result<TagIndex, KegError> {
    let path = tags_path(root);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(TagIndex::new()),
        Err(source) => return Err(KegError::Read { path, source }),
    };
    content.parse().map_err(|source| KegError::Tags { path, source })
}

/// Tag lines for a comma-separated list of tag names, newline separated.
pub fn grep_tags(root: &Path, names: &str) -> Result<String, KegError> {
    let tags = read_tags(root)?;
    let names: Vec<&str> = names.split(',').map(str::trim).filter(|n| !n.is_empty()).collect();
    Ok(tags.grep(&names).join("\n"))
}

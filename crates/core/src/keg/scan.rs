//! Node directory discovery.

use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

use crate::dex::NodeId;

/// A node directory found directly under a keg root.
#[derive(Debug, Clone)]
pub struct NodeDir {
    pub id: NodeId,
    pub path: PathBuf,
    pub metadata: Metadata,
}

/// Result of scanning a keg root.
///
/// `min` and `max` are zero when `dirs` is empty; check [`NodeDirs::is_empty`]
/// before relying on them.
#[derive(Debug, Clone, Default)]
pub struct NodeDirs {
    /// Node directories ordered by ascending id.
    pub dirs: Vec<NodeDir>,
    pub min: NodeId,
    pub max: NodeId,
}

impl NodeDirs {
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.dirs.iter().map(|d| d.id)
    }
}

/// Parse a directory name as a node id.
///
/// Only plain ASCII digits qualify, without leading zeros, so each id has
/// exactly one directory name.
pub fn parse_node_id(name: &str) -> Option<NodeId> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if name.len() > 1 && name.starts_with('0') {
        return None;
    }
    name.parse().ok()
}

/// Immediate subdirectories of `root` named by a node id.
///
/// Entries that are not directories or whose names are not integers are
/// skipped. A missing or unreadable root yields an empty result.
pub fn scan_node_dirs(root: &Path) -> NodeDirs {
    let reader = match fs::read_dir(root) {
        Ok(reader) => reader,
        Err(e) => {
            tracing::debug!("no node directories in {}: {e}", root.display());
            return NodeDirs::default();
        }
    };

    let mut dirs: Vec<NodeDir> = reader
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let id = parse_node_id(entry.file_name().to_str()?)?;
            let metadata = entry.metadata().ok()?;
            metadata.is_dir().then(|| NodeDir { id, path: entry.path(), metadata })
        })
        .collect();
    dirs.sort_by_key(|d| d.id);

    let min = dirs.first().map_or(0, |d| d.id);
    let max = dirs.last().map_or(0, |d| d.id);
    NodeDirs { dirs, min, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn sample_keg() -> TempDir {
        let dir = TempDir::new().unwrap();
        for id in 0..=12 {
            fs::create_dir(dir.path().join(id.to_string())).unwrap();
        }
        fs::create_dir(dir.path().join("dex")).unwrap();
        fs::create_dir(dir.path().join("drafts")).unwrap();
        fs::create_dir(dir.path().join("-3")).unwrap();
        fs::write(dir.path().join("keg"), "updated: \n").unwrap();
        fs::write(dir.path().join("42"), "a file, not a node").unwrap();
        dir
    }

    #[test]
    fn finds_integer_directories_only() {
        let keg = sample_keg();
        let found = scan_node_dirs(keg.path());

        assert_eq!(found.len(), 13);
        assert_eq!(found.min, 0);
        assert_eq!(found.max, 12);
        assert_eq!(found.ids().collect::<Vec<_>>(), (0..=12).collect::<Vec<_>>());
        assert!(found.dirs.iter().all(|d| d.metadata.is_dir()));
    }

    #[test]
    fn zero_padded_names_are_not_nodes() {
        let keg = sample_keg();
        fs::create_dir(keg.path().join("007")).unwrap();
        let found = scan_node_dirs(keg.path());
        assert_eq!(found.len(), 13);
        assert_eq!(found.ids().filter(|&id| id == 7).count(), 1);
    }

    #[test]
    fn missing_root_is_empty() {
        let found = scan_node_dirs(Path::new("/nonexistent/kegdex/keg"));
        assert!(found.is_empty());
        assert_eq!((found.min, found.max), (0, 0));
    }

    #[test]
    fn file_root_is_empty() {
        let keg = sample_keg();
        assert!(scan_node_dirs(&keg.path().join("keg")).is_empty());
    }

    #[rstest]
    #[case("0", Some(0))]
    #[case("12", Some(12))]
    #[case("007", None)]
    #[case("00", None)]
    #[case("10", Some(10))]
    #[case("", None)]
    #[case("+5", None)]
    #[case("-1", None)]
    #[case("1a", None)]
    #[case("99999999999999999999999", None)]
    fn node_id_parsing(#[case] name: &str, #[case] expected: Option<NodeId>) {
        assert_eq!(parse_node_id(name), expected);
    }
}

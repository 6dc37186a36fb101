//! Building a dex from a keg directory.

use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::types::{Dex, Entry};
use crate::fsutil;
use crate::keg::scan::{self, NodeDir};
use crate::title::TitleResolver;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read change times under {path}: {source}")]
    Walk {
        path: String,
        #[source]
        source: walkdir::Error,
    },
}

/// Statistics from a build.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Node directories found by the scan.
    pub nodes_found: usize,
    /// Entries in the resulting dex.
    pub nodes_indexed: usize,
    /// Entries whose title came out empty.
    pub untitled: usize,
    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Progress callback for builds.
/// Parameters: (current, total, node id)
pub type ProgressCallback = Box<dyn Fn(usize, usize, &str)>;

/// Scans keg directories into a [`Dex`].
///
/// Every build is a full rescan: one metadata walk per node directory and
/// one document read per node.
pub struct DexBuilder<'a> {
    resolver: &'a TitleResolver,
}

impl<'a> DexBuilder<'a> {
    pub fn new(resolver: &'a TitleResolver) -> Self {
        Self { resolver }
    }

    /// Build a dex for `root`, most recently changed first.
    pub fn scan(&self, root: &Path) -> Result<Dex, BuildError> {
        self.scan_with_stats(root, None).map(|(dex, _)| dex)
    }

    pub fn scan_with_stats(
        &self,
        root: &Path,
        progress: Option<ProgressCallback>,
    ) -> Result<(Dex, BuildStats), BuildError> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        let found = scan::scan_node_dirs(root);
        stats.nodes_found = found.len();

        let mut dex = Dex::new();
        for (i, dir) in found.dirs.iter().enumerate() {
            let id = dir.id;
            if let Some(ref cb) = progress {
                cb(i + 1, found.len(), &id.to_string());
            }

            let updated = self.latest_change(dir)?;
            let title = match self.resolver.read_title(&dir.path) {
                Ok(title) => title,
                Err(e) => {
                    tracing::warn!("node {id} has no readable title: {e}");
                    String::new()
                }
            };
            if title.is_empty() {
                stats.untitled += 1;
            }

            tracing::debug!(id, %updated, title = %title, "indexed node");
            dex.add(Entry::new(id, updated, title));
        }

        dex.by_changes();
        stats.nodes_indexed = dex.len();
        stats.duration_ms = start.elapsed().as_millis() as u64;
        Ok((dex, stats))
    }

    /// Latest change among the files of a node, or the directory's own
    /// modification time when it holds no files.
    fn latest_change(&self, dir: &NodeDir) -> Result<DateTime<Utc>, BuildError> {
        let latest = fsutil::latest_change(&dir.path).map_err(|source| BuildError::Walk {
            path: dir.path.display().to_string(),
            source,
        })?;
        let modified = match latest {
            Some((_, modified)) => modified,
            None => dir.metadata.modified().unwrap_or(std::time::UNIX_EPOCH),
        };
        Ok(modified.into())
    }
}

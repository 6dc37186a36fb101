//! Node title resolution.
//!
//! A node's title is the `Title`/`title` key of its front matter when that
//! holds a string, otherwise the text of the first level-1 heading of the
//! body. A node with neither has an empty title; that is not an error.

pub mod heading;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::frontmatter;

pub use heading::{first_heading, scan_title};

/// Document file inside every node directory.
pub const NODE_DOC: &str = "README.md";

/// Longest heading accepted as a title, in characters.
pub const DEFAULT_MAX_HEADING_LEN: usize = 100;

#[derive(Debug, Error)]
pub enum TitleError {
    #[error("failed to read node document {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Resolves titles from node documents.
///
/// Holds no per-call state; build one from configuration and share it.
#[derive(Debug, Clone, Copy)]
pub struct TitleResolver {
    max_heading_len: usize,
}

impl Default for TitleResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HEADING_LEN)
    }
}

impl TitleResolver {
    pub fn new(max_heading_len: usize) -> Self {
        Self { max_heading_len }
    }

    pub fn max_heading_len(&self) -> usize {
        self.max_heading_len
    }

    /// Read the title of the node at `path`.
    ///
    /// `path` may be the node directory or its `README.md` directly.
    pub fn read_title(&self, path: &Path) -> Result<String, TitleError> {
        let doc = node_document(path);
        let content = fs::read_to_string(&doc).map_err(|source| TitleError::Read {
            path: doc.display().to_string(),
            source,
        })?;
        Ok(self.parse_title(&content))
    }

    /// Extract the title from document text.
    pub fn parse_title(&self, content: &str) -> String {
        let (yaml, body) = frontmatter::split(content);

        if let Some(yaml) = yaml {
            match frontmatter::parse_meta(yaml) {
                Ok(meta) => {
                    if let Some(title) = meta.title() {
                        return title.to_string();
                    }
                }
                Err(e) => tracing::warn!("ignoring front matter: {e}"),
            }
        }

        first_heading(body, self.max_heading_len).unwrap_or_default()
    }
}

/// Path of the document for a node directory or document path.
pub fn node_document(path: &Path) -> PathBuf {
    if path.file_name().is_some_and(|name| name == NODE_DOC) {
        path.to_path_buf()
    } else {
        path.join(NODE_DOC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn node(content: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(NODE_DOC), content).unwrap();
        dir
    }

    #[test]
    fn title_from_heading() {
        let dir = node("# This is a title\n\nSome body text.\n");
        let title = TitleResolver::default().read_title(dir.path()).unwrap();
        assert_eq!(title, "This is a title");
    }

    #[test]
    fn accepts_document_path() {
        let dir = node("# This is a title\n");
        let title =
            TitleResolver::default().read_title(&dir.path().join(NODE_DOC)).unwrap();
        assert_eq!(title, "This is a title");
    }

    #[test]
    fn heading_after_front_matter() {
        let dir = node("---\nauthor: me\n---\n\n# This is the title\n");
        let title = TitleResolver::default().read_title(dir.path()).unwrap();
        assert_eq!(title, "This is the title");
    }

    #[test]
    fn front_matter_title_wins() {
        let dir = node("---\ntitle: Example\n---\n\n# Heading title\n");
        let title = TitleResolver::default().read_title(dir.path()).unwrap();
        assert_eq!(title, "Example");
    }

    #[test]
    fn malformed_front_matter_falls_back_to_heading() {
        let resolver = TitleResolver::default();
        let title = resolver.parse_title("---\ntitle: [oops\n---\n# Fallback\n");
        assert_eq!(title, "Fallback");
    }

    #[test]
    fn no_title_is_empty() {
        let resolver = TitleResolver::default();
        assert_eq!(resolver.parse_title("just a paragraph\n"), "");
        assert_eq!(resolver.parse_title(""), "");
    }

    #[test]
    fn missing_document_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = TitleResolver::default().read_title(dir.path()).unwrap_err();
        assert!(matches!(err, TitleError::Read { .. }));
        assert!(err.to_string().contains(NODE_DOC));
    }

    #[test]
    fn max_heading_len_is_configurable() {
        let resolver = TitleResolver::new(4);
        assert_eq!(resolver.parse_title("# Short\n"), "");
        assert_eq!(resolver.parse_title("# Tiny\n"), "Tiny");
    }
}

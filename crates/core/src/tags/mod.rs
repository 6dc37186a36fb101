//! Tag index: tag names mapped to the node ids carrying them.
//!
//! The on-disk format is one line per tag, the tag name followed by its node
//! ids, all separated by whitespace:
//!
//! ```text
//! foo 2 6 3
//! bar 8
//! ```
//!
//! Ids are kept as raw tokens in the order they appear; they are neither
//! validated nor deduplicated.

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::fsutil;
use crate::keg::store;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagError {
    #[error("invalid tag line {line}: {content:?}")]
    InvalidLine { line: usize, content: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tags: BTreeMap<String, Vec<String>>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Ids for `name`, if the tag is known.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.tags.get(name).map(Vec::as_slice)
    }

    /// Set the ids for `name`, replacing any already set.
    pub fn insert(&mut self, name: impl Into<String>, ids: Vec<String>) {
        self.tags.insert(name.into(), ids);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// One `name id id ...` line per requested name, in request order.
    ///
    /// Names that are unknown or have no ids produce no line.
    pub fn grep<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        names
            .iter()
            .filter_map(|name| {
                let name = name.as_ref();
                let ids = self.get(name).filter(|ids| !ids.is_empty())?;
                Some(format_line(name, ids))
            })
            .collect()
    }

    /// Atomically replace `<root>/dex/tags` with this index.
    pub fn write(&self, root: &Path) -> io::Result<()> {
        fsutil::overwrite(&store::tags_path(root), &self.to_string())
    }
}

impl FromStr for TagIndex {
    type Err = TagError;

    /// Parse the tag file format.
    ///
    /// A blank line is an error. A line with only a tag name records the tag
    /// with no ids. A repeated tag name replaces the earlier ids.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut index = TagIndex::new();
        for (i, line) in s.lines().enumerate() {
            let mut tokens = line.split_whitespace();
            let Some(name) = tokens.next() else {
                return Err(TagError::InvalidLine { line: i + 1, content: line.to_string() });
            };
            index.insert(name, tokens.map(str::to_string).collect());
        }
        Ok(index)
    }
}

impl fmt::Display for TagIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, ids) in self.iter() {
            writeln!(f, "{}", format_line(name, ids))?;
        }
        Ok(())
    }
}

fn format_line(name: &str, ids: &[String]) -> String {
    if ids.is_empty() {
        name.to_string()
    } else {
        format!("{name} {}", ids.join(" "))
    }
}

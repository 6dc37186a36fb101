//! Dex data types.

use std::ops::Range;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::fsutil;
use crate::timestamp;
use crate::title::{TitleError, TitleResolver};

/// Node identifier, the integer name of a node directory.
pub type NodeId = u64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DexError {
    #[error("dex is empty")]
    Empty,
}

/// One indexed node.
///
/// `updated` is the latest modification time of any file in the node
/// directory, truncated to whole seconds. The highlight span is a byte range
/// into `title` set by searches; an empty span means no highlight.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEntry")]
pub struct Entry {
    id: NodeId,
    updated: DateTime<Utc>,
    title: String,
    highlight_start: usize,
    highlight_end: usize,
}

impl Entry {
    pub fn new(id: NodeId, updated: DateTime<Utc>, title: impl Into<String>) -> Self {
        Self {
            id,
            updated: timestamp::truncate(updated),
            title: title.into(),
            highlight_start: 0,
            highlight_end: 0,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The highlighted byte range, if any.
    pub fn highlight(&self) -> Option<Range<usize>> {
        (self.highlight_start < self.highlight_end)
            .then_some(self.highlight_start..self.highlight_end)
    }

    /// Set the highlight span.
    ///
    /// A span that does not fall on character boundaries inside the title
    /// clears the highlight instead.
    pub fn set_highlight(&mut self, span: Range<usize>) {
        let valid = span.start <= span.end
            && self.title.is_char_boundary(span.start)
            && self.title.is_char_boundary(span.end);
        if valid {
            self.highlight_start = span.start;
            self.highlight_end = span.end;
        } else {
            self.clear_highlight();
        }
    }

    pub fn clear_highlight(&mut self) {
        self.highlight_start = 0;
        self.highlight_end = 0;
    }

    /// Re-read the change time and title of this node from the keg at
    /// `keg_root`.
    ///
    /// The title is replaced even when the read fails (with an empty one) so
    /// a stale title is never kept for a node whose document is gone.
    pub fn refresh(&mut self, keg_root: &Path, resolver: &TitleResolver) -> Result<(), TitleError> {
        let dir = keg_root.join(self.id.to_string());
        match fsutil::latest_change(&dir) {
            Ok(Some((_, modified))) => self.updated = timestamp::truncate(modified.into()),
            Ok(None) => {}
            Err(e) => tracing::debug!("no change time for {}: {e}", dir.display()),
        }
        self.clear_highlight();
        match resolver.read_title(&dir) {
            Ok(title) => {
                self.title = title;
                Ok(())
            }
            Err(e) => {
                self.title.clear();
                Err(e)
            }
        }
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let highlighted = self.highlight().is_some();
        let mut state =
            serializer.serialize_struct("Entry", if highlighted { 5 } else { 3 })?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("updated", &timestamp::format_json(&self.updated))?;
        state.serialize_field("title", &self.title)?;
        if highlighted {
            state.serialize_field("highlight_start", &self.highlight_start)?;
            state.serialize_field("highlight_end", &self.highlight_end)?;
        }
        state.end()
    }
}

/// Wire form of an entry. Accepts the single-letter keys of older
/// `nodes.json` files.
#[derive(Deserialize)]
struct RawEntry {
    #[serde(alias = "N")]
    id: NodeId,
    #[serde(alias = "U", with = "crate::timestamp::json")]
    updated: DateTime<Utc>,
    #[serde(alias = "T", default)]
    title: String,
    #[serde(default)]
    highlight_start: usize,
    #[serde(default)]
    highlight_end: usize,
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        let mut entry = Entry::new(raw.id, raw.updated, raw.title);
        entry.set_highlight(raw.highlight_start..raw.highlight_end);
        entry
    }
}

/// Ordered collection of entries.
///
/// Order is insertion order until [`Dex::by_id`] or [`Dex::by_changes`] is
/// applied. Positions are plain vector indices: removing an entry shifts
/// every later one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dex {
    pub(crate) entries: Vec<Entry>,
}

impl Dex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Parse the JSON view back into a dex.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<Entry> = serde_json::from_str(s)?;
        Ok(Self { entries })
    }
}

impl From<Vec<Entry>> for Dex {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<Entry> for Dex {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl IntoIterator for Dex {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dex {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

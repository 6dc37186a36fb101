//! Lookup, sorting, search, selection and mutation over a [`Dex`].

use rand::seq::SliceRandom;
use regex::{Regex, RegexBuilder};

use super::chooser::Chooser;
use super::types::{Dex, DexError, Entry, NodeId};

impl Dex {
    /// Position and entry with the given id.
    pub fn lookup(&self, id: NodeId) -> Option<(usize, &Entry)> {
        self.entries.iter().enumerate().find(|(_, e)| e.id() == id)
    }

    /// Entry with the lowest positive id.
    pub fn first(&self) -> Option<&Entry> {
        self.entries.iter().filter(|e| e.id() > 0).min_by_key(|e| e.id())
    }

    /// Entry with the highest positive id.
    pub fn last(&self) -> Option<&Entry> {
        self.entries.iter().filter(|e| e.id() > 0).max_by_key(|e| e.id())
    }

    /// Entry changed longest ago.
    pub fn first_changed(&self) -> Option<&Entry> {
        self.entries.iter().min_by_key(|e| e.updated())
    }

    /// Most recently changed entry.
    pub fn last_changed(&self) -> Option<&Entry> {
        self.entries.iter().max_by_key(|e| e.updated())
    }

    /// Number of digits in the highest id, used to align terminal output.
    pub fn last_id_width(&self) -> usize {
        self.last().map_or(1, |e| e.id().to_string().len())
    }

    /// Sort ascending by id.
    pub fn by_id(&mut self) -> &mut Self {
        self.entries.sort_by_key(Entry::id);
        self
    }

    /// Sort from most to least recently changed.
    pub fn by_changes(&mut self) -> &mut Self {
        self.entries.sort_by(|a, b| b.updated().cmp(&a.updated()));
        self
    }

    /// Append an entry. The caller keeps ids unique.
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove the first entry with the same id as `entry`.
    ///
    /// Returns the removed entry, or `None` when no entry matches. Later
    /// entries shift down by one.
    pub fn delete(&mut self, entry: &Entry) -> Result<Option<Entry>, DexError> {
        if self.entries.is_empty() {
            return Err(DexError::Empty);
        }
        Ok(self
            .entries
            .iter()
            .position(|e| e.id() == entry.id())
            .map(|i| self.entries.remove(i)))
    }

    /// A uniformly chosen entry.
    pub fn random(&self) -> Result<&Entry, DexError> {
        self.entries.choose(&mut rand::thread_rng()).ok_or(DexError::Empty)
    }

    /// Entries whose title contains `keyword`, ignoring case.
    ///
    /// Each hit has its highlight set to the first match, both here and in
    /// the returned dex. An empty keyword matches nothing.
    pub fn with_title_text(&mut self, keyword: &str) -> Dex {
        if keyword.is_empty() {
            return Dex::new();
        }
        match RegexBuilder::new(&regex::escape(keyword)).case_insensitive(true).build() {
            Ok(re) => self.highlight_matches(&re),
            Err(e) => {
                tracing::warn!("cannot search for {keyword:?}: {e}");
                Dex::new()
            }
        }
    }

    /// Entries whose title matches `re`, highlighting the first match.
    pub fn with_title_text_exp(&mut self, re: &Regex) -> Dex {
        self.highlight_matches(re)
    }

    /// Single entry for `keyword`, asking `chooser` when several match.
    pub fn choose_with_title_text(
        &mut self,
        keyword: &str,
        chooser: &dyn Chooser,
    ) -> Option<Entry> {
        self.with_title_text(keyword).choose_one(chooser)
    }

    /// Single entry for `re`, asking `chooser` when several match.
    pub fn choose_with_title_text_exp(
        &mut self,
        re: &Regex,
        chooser: &dyn Chooser,
    ) -> Option<Entry> {
        self.with_title_text_exp(re).choose_one(chooser)
    }

    fn highlight_matches(&mut self, re: &Regex) -> Dex {
        let mut hits = Dex::new();
        for entry in &mut self.entries {
            if let Some(m) = re.find(entry.title()) {
                entry.set_highlight(m.range());
                hits.add(entry.clone());
            }
        }
        hits
    }

    fn choose_one(self, chooser: &dyn Chooser) -> Option<Entry> {
        match self.entries.len() {
            0 => None,
            1 => self.entries.into_iter().next(),
            _ => {
                let index = chooser.choose(&self.pretty_lines())?;
                self.entries.into_iter().nth(index)
            }
        }
    }
}

//! Serialization views of entries and dexes.
//!
//! Every view carries the same fields; only the terminal view adds styling
//! for the search highlight.

use std::fmt;

use crossterm::style::{Color, ResetColor, SetForegroundColor};

use super::types::{Dex, Entry};
use crate::timestamp::{self, SHORT_DATE_FMT};

impl Entry {
    /// Tab separated: id, timestamp, title.
    pub fn tsv(&self) -> String {
        format!("{}\t{}\t{}", self.id(), timestamp::format_iso(&self.updated()), self.title())
    }

    /// Markdown list item as written to `dex/nodes.md`.
    pub fn md(&self) -> String {
        format!(
            "* {} [{}](../{})",
            timestamp::format_iso(&self.updated()),
            self.title(),
            self.id()
        )
    }

    /// Markdown link list item without the timestamp, for include blocks.
    pub fn as_include(&self) -> String {
        format!("* [{}](../{})", self.title(), self.id())
    }

    /// Colored single line with timestamp, id padded to `id_width`, and
    /// highlighted title.
    pub fn pretty(&self, id_width: usize) -> String {
        format!(
            "{}{} {}{:<id_width$} {}{}{}",
            SetForegroundColor(Color::DarkGrey),
            self.updated().format(SHORT_DATE_FMT),
            SetForegroundColor(Color::Green),
            self.id(),
            SetForegroundColor(Color::White),
            self.styled_title(),
            ResetColor,
        )
    }

    fn styled_title(&self) -> String {
        let title = self.title();
        match self.highlight() {
            Some(span) => format!(
                "{}{}{}{}{}",
                &title[..span.start],
                SetForegroundColor(Color::Red),
                &title[span.clone()],
                SetForegroundColor(Color::White),
                &title[span.end..],
            ),
            None => title.to_string(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.md())
    }
}

impl Dex {
    /// JSON array with one entry per line.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let lines = self
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("[{}]\n", lines.join(",\n")))
    }

    pub fn tsv(&self) -> String {
        self.iter().map(|e| e.tsv() + "\n").collect()
    }

    pub fn md(&self) -> String {
        self.iter().map(|e| e.md() + "\n").collect()
    }

    pub fn as_includes(&self) -> String {
        self.iter().map(|e| e.as_include() + "\n").collect()
    }

    /// Colored lines of id and highlighted title, ids aligned to the widest.
    pub fn pretty_lines(&self) -> Vec<String> {
        let width = self.last_id_width();
        self.iter()
            .map(|e| {
                format!(
                    "{}{:<width$} {}{}{}",
                    SetForegroundColor(Color::Green),
                    e.id(),
                    SetForegroundColor(Color::White),
                    e.styled_title(),
                    ResetColor,
                )
            })
            .collect()
    }

    pub fn pretty(&self) -> String {
        self.pretty_lines().into_iter().map(|line| line + "\n").collect()
    }
}

impl fmt::Display for Dex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tsv())
    }
}

//! Front matter types.

use serde::Deserialize;
use serde_yaml::Value;

/// The recognised subset of a node's front matter.
///
/// Values are kept as raw YAML so that a non-string title (a number, a list)
/// is ignored rather than failing the whole block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TitleMeta {
    #[serde(rename = "Title", default)]
    upper: Option<Value>,
    #[serde(rename = "title", default)]
    lower: Option<Value>,
}

impl TitleMeta {
    /// The string title, `Title` taking precedence over `title`.
    pub fn title(&self) -> Option<&str> {
        [&self.upper, &self.lower]
            .into_iter()
            .flatten()
            .find_map(Value::as_str)
    }
}

/// Result of splitting front matter from markdown.
#[derive(Debug, Clone)]
pub struct ParsedDocument<'a> {
    /// Parsed front matter (if present).
    pub meta: Option<TitleMeta>,
    /// The markdown body (everything after the front matter block).
    pub body: &'a str,
}

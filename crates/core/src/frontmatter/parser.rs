//! Front matter parsing from markdown documents.

use super::types::{ParsedDocument, TitleMeta};
use thiserror::Error;

/// Errors that can occur during front matter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML front matter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Split a document into its raw front matter block and body.
///
/// Front matter is delimited by `---` lines at the start of the document:
/// ```markdown
/// ---
/// title: value
/// ---
/// # Document content
/// ```
/// An opening delimiter without a closing one means there is no front matter.
pub fn split(content: &str) -> (Option<&str>, &str) {
    let trimmed = content.trim_start();
    let Some(after_first) = trimmed.strip_prefix("---") else {
        return (None, content);
    };

    let Some(after_newline) =
        after_first.strip_prefix('\n').or_else(|| after_first.strip_prefix("\r\n"))
    else {
        return (None, content);
    };

    match find_closing_delimiter(after_newline) {
        Some((start, end)) => (Some(&after_newline[..start]), &after_newline[end..]),
        None => (None, content),
    }
}

/// Parse the front matter block of `content`, if any.
pub fn parse(content: &str) -> Result<ParsedDocument<'_>, FrontmatterParseError> {
    let (yaml, body) = split(content);
    let meta = yaml.map(parse_meta).transpose()?;
    Ok(ParsedDocument { meta, body })
}

/// Parse a raw front matter block into [`TitleMeta`].
pub fn parse_meta(yaml: &str) -> Result<TitleMeta, FrontmatterParseError> {
    if yaml.trim().is_empty() {
        return Ok(TitleMeta::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Byte range of the closing `---` line, including its line ending.
fn find_closing_delimiter(content: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if line.trim() == "---" {
            return Some((offset, offset + line.len()));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_frontmatter() {
        let content = "# Hello\n\nSome content";
        let result = parse(content).unwrap();
        assert!(result.meta.is_none());
        assert_eq!(result.body, content);
    }

    #[test]
    fn parse_simple_frontmatter() {
        let content = "---\ntitle: Hello\n---\n# Content";
        let result = parse(content).unwrap();
        assert_eq!(result.meta.unwrap().title(), Some("Hello"));
        assert_eq!(result.body, "# Content");
    }

    #[test]
    fn upper_case_key_wins() {
        let content = "---\ntitle: lower\nTitle: Upper\n---\n";
        let result = parse(content).unwrap();
        assert_eq!(result.meta.unwrap().title(), Some("Upper"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let content =
            "---\nauthor: someone\ndate: 2024-01-15\ntags:\n  - rust\n  - cli\n---\n\nBody";
        let result = parse(content).unwrap();
        assert_eq!(result.meta.unwrap().title(), None);
        assert_eq!(result.body, "\nBody");
    }

    #[test]
    fn non_string_title_is_ignored() {
        let content = "---\ntitle: [a, b]\nTitle: 42\n---\n";
        let result = parse(content).unwrap();
        assert_eq!(result.meta.unwrap().title(), None);
    }

    #[test]
    fn parse_empty_frontmatter() {
        let content = "---\n---\n# Content";
        let result = parse(content).unwrap();
        assert!(result.meta.is_some());
        assert_eq!(result.body, "# Content");
    }

    #[test]
    fn crlf_line_endings() {
        let content = "---\r\ntitle: Windows\r\n---\r\n# Body\r\n";
        let result = parse(content).unwrap();
        assert_eq!(result.meta.unwrap().title(), Some("Windows"));
        assert_eq!(result.body, "# Body\r\n");
    }

    #[test]
    fn unclosed_block_is_body() {
        let content = "---\ntitle: Dangling\n# Heading";
        let (yaml, body) = split(content);
        assert!(yaml.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let content = "---\ntitle: [unclosed\n---\n# Body";
        assert!(matches!(parse(content), Err(FrontmatterParseError::InvalidYaml(_))));
        assert_eq!(split(content).1, "# Body");
    }
}

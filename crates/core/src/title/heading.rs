//! First level-1 heading lookup.

use comrak::nodes::NodeValue;
use comrak::{Arena, Options, parse_document};

/// Text of the first level-1 heading in `body`, in document order.
///
/// The heading's source text is returned verbatim, inline markup included.
/// Returns `None` when there is no level-1 heading or when the first one is
/// rejected by the line rules of [`scan_title`].
pub fn first_heading(body: &str, max_len: usize) -> Option<String> {
    let arena = Arena::new();
    let options = Options::default();
    let root = parse_document(&arena, body, &options);

    let node = root.descendants().find(|node| {
        matches!(node.data.borrow().value, NodeValue::Heading(ref h) if h.level == 1)
    })?;

    let ast = node.data.borrow();
    let NodeValue::Heading(ref heading) = ast.value else {
        return None;
    };
    let start = ast.sourcepos.start.line.checked_sub(1)?;
    let end = ast.sourcepos.end.line.checked_sub(1)?.max(start);
    let lines: Vec<&str> = body.lines().collect();

    if heading.setext {
        let text = lines
            .get(start..=end.min(lines.len().saturating_sub(1)))?
            .iter()
            .map(|line| line.trim())
            .filter(|line| !is_setext_underline(line))
            .collect::<Vec<_>>()
            .join(" ");
        accept(&text, max_len).map(str::to_string)
    } else {
        let line = lines.get(start)?;
        let column = ast.sourcepos.start.column.saturating_sub(1);
        let from_marker = line.get(column..)?;
        scan_title(from_marker, max_len).map(str::to_string)
    }
}

/// Apply the title line rule to a single ATX heading line.
///
/// The line must start with `# ` followed by content. Surrounding blanks and
/// an optional closing `#` sequence are dropped. Empty headings and headings
/// longer than `max_len` characters are rejected, never truncated.
pub fn scan_title(line: &str, max_len: usize) -> Option<&str> {
    let line = line.trim_end_matches(['\n', '\r']);
    let content = line.strip_prefix("# ")?.trim();
    accept(strip_closing_sequence(content), max_len)
}

/// `Title ##` becomes `Title`; `C#` stays as it is.
fn strip_closing_sequence(content: &str) -> &str {
    let without = content.trim_end_matches('#');
    if without.len() == content.len() {
        content
    } else if without.is_empty() || without.ends_with([' ', '\t']) {
        without.trim_end()
    } else {
        content
    }
}

fn accept(content: &str, max_len: usize) -> Option<&str> {
    let content = content.trim_end();
    if content.trim_start().is_empty() || content.chars().count() > max_len {
        return None;
    }
    Some(content)
}

fn is_setext_underline(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == '=')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::title::DEFAULT_MAX_HEADING_LEN;
    use rstest::rstest;

    fn heading(body: &str) -> Option<String> {
        first_heading(body, DEFAULT_MAX_HEADING_LEN)
    }

    #[rstest]
    #[case("# A short title", Some("A short title"))]
    #[case("# A short title\n", Some("A short title"))]
    #[case("# Windows line\r\n", Some("Windows line"))]
    #[case("# ", None)]
    #[case("#   \n", None)]
    #[case("#NoSpace", None)]
    #[case("# Some title ##", Some("Some title"))]
    #[case("# Some title #  ", Some("Some title"))]
    #[case("# Learning C#", Some("Learning C#"))]
    #[case("# ##", None)]
    #[case("#  Two", Some("Two"))]
    #[case("## Second level", None)]
    #[case("Plain text", None)]
    fn scan_title_rules(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(scan_title(line, DEFAULT_MAX_HEADING_LEN), expected);
    }

    #[test]
    fn long_heading_is_rejected_not_truncated() {
        let at_limit = format!("# {}", "x".repeat(DEFAULT_MAX_HEADING_LEN));
        let over_limit = format!("# {}", "x".repeat(DEFAULT_MAX_HEADING_LEN + 1));
        assert!(scan_title(&at_limit, DEFAULT_MAX_HEADING_LEN).is_some());
        assert_eq!(scan_title(&over_limit, DEFAULT_MAX_HEADING_LEN), None);
        assert_eq!(heading(&format!("{over_limit}\n\ntext\n")), None);
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let title = format!("# {}", "é".repeat(DEFAULT_MAX_HEADING_LEN));
        assert_eq!(scan_title(&title, DEFAULT_MAX_HEADING_LEN).map(|t| t.chars().count()), Some(100));
    }

    #[test]
    fn first_level_one_heading_in_document_order() {
        let body = "Intro\n\n## Not this\n\n# This one\n\n# Not this either\n";
        assert_eq!(heading(body).as_deref(), Some("This one"));
    }

    #[test]
    fn inline_markup_is_kept() {
        let body = "# Using `cargo` with **care**\n";
        assert_eq!(heading(body).as_deref(), Some("Using `cargo` with **care**"));
    }

    #[test]
    fn closing_sequence_is_not_part_of_title() {
        assert_eq!(heading("# Some title ##\n").as_deref(), Some("Some title"));
        assert_eq!(heading("# **Bold** title #\n").as_deref(), Some("**Bold** title"));
    }

    #[test]
    fn heading_inside_code_block_is_ignored() {
        let body = "```\n# not a heading\n```\n\n# Real\n";
        assert_eq!(heading(body).as_deref(), Some("Real"));
    }

    #[test]
    fn setext_heading() {
        let body = "Setext title\n============\n\nbody\n";
        assert_eq!(heading(body).as_deref(), Some("Setext title"));
    }

    #[test]
    fn no_heading() {
        assert_eq!(heading("just text\n"), None);
        assert_eq!(heading(""), None);
    }
}

use std::sync::OnceLock;

use regex_lite::Regex;

/// One line of generated markdown, classified for display. Projection is
/// strictly line-oriented: no nesting, no tables, no code fences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Bullet(String),
    Ordered(String),
    Divider,
    Paragraph(Vec<Span>),
}

/// A sub-segment of a paragraph line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
}

fn ordered_item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s").expect("ordered item regex"))
}

/// Split a line on the literal `**` marker; odd-indexed segments are bold.
/// An odd marker count leaves the tail toggled however the count says it
/// is. Renderers have always shown unbalanced lines that way; keep it.
fn parse_spans(line: &str) -> Vec<Span> {
    line.split("**")
        .enumerate()
        .map(|(i, part)| {
            if i % 2 == 1 {
                Span::Bold(part.to_string())
            } else {
                Span::Plain(part.to_string())
            }
        })
        .collect()
}

/// Classify one line. First match wins.
fn classify_line(line: &str) -> Block {
    if let Some(rest) = line.strip_prefix("# ") {
        return Block::Heading { level: 1, text: rest.to_string() };
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Block::Heading { level: 2, text: rest.to_string() };
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return Block::Heading { level: 3, text: rest.to_string() };
    }
    if let Some(rest) = line.strip_prefix("* ").or_else(|| line.strip_prefix("- ")) {
        return Block::Bullet(rest.to_string());
    }
    if let Some(found) = ordered_item_re().find(line) {
        return Block::Ordered(line[found.end()..].to_string());
    }
    if line.trim() == "---" {
        return Block::Divider;
    }
    Block::Paragraph(parse_spans(line))
}

/// Project a text body into renderable blocks, one per line. Blank lines
/// become empty paragraphs rather than being dropped, so the output always
/// has exactly as many blocks as the input has lines.
pub fn project(text: &str) -> Vec<Block> {
    text.split('\n').map(classify_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> Span {
        Span::Plain(s.to_string())
    }

    fn bold(s: &str) -> Span {
        Span::Bold(s.to_string())
    }

    #[test]
    fn test_headings() {
        assert_eq!(
            project("# Title"),
            vec![Block::Heading { level: 1, text: "Title".to_string() }]
        );
        assert_eq!(
            project("## Sub"),
            vec![Block::Heading { level: 2, text: "Sub".to_string() }]
        );
        assert_eq!(
            project("### Deep"),
            vec![Block::Heading { level: 3, text: "Deep".to_string() }]
        );
    }

    #[test]
    fn test_heading_requires_trailing_space() {
        // "#Title" is not a heading, it falls through to a paragraph.
        assert_eq!(project("#Title"), vec![Block::Paragraph(vec![plain("#Title")])]);
    }

    #[test]
    fn test_level_four_heading_is_a_paragraph() {
        assert_eq!(
            project("#### Too deep"),
            vec![Block::Paragraph(vec![plain("#### Too deep")])]
        );
    }

    #[test]
    fn test_bullets() {
        assert_eq!(project("- item"), vec![Block::Bullet("item".to_string())]);
        assert_eq!(project("* item"), vec![Block::Bullet("item".to_string())]);
    }

    #[test]
    fn test_ordered_items_strip_their_number() {
        assert_eq!(project("1. first"), vec![Block::Ordered("first".to_string())]);
        assert_eq!(project("12. twelfth"), vec![Block::Ordered("twelfth".to_string())]);
    }

    #[test]
    fn test_ordered_item_needs_dot_and_space() {
        assert_eq!(
            project("1)not ordered"),
            vec![Block::Paragraph(vec![plain("1)not ordered")])]
        );
        assert_eq!(
            project("1.attached"),
            vec![Block::Paragraph(vec![plain("1.attached")])]
        );
    }

    #[test]
    fn test_divider() {
        assert_eq!(project("---"), vec![Block::Divider]);
        assert_eq!(project("  ---  "), vec![Block::Divider]);
        assert_eq!(
            project("----"),
            vec![Block::Paragraph(vec![plain("----")])]
        );
    }

    #[test]
    fn test_bold_spans() {
        assert_eq!(
            project("a **b** c"),
            vec![Block::Paragraph(vec![plain("a "), bold("b"), plain(" c")])]
        );
    }

    #[test]
    fn test_unbalanced_bold_marker_toggles_the_tail() {
        // An odd marker count bolds everything after the last marker.
        assert_eq!(
            project("a **b"),
            vec![Block::Paragraph(vec![plain("a "), bold("b")])]
        );
        assert_eq!(
            project("**a** b **c"),
            vec![Block::Paragraph(vec![plain(""), bold("a"), plain(" b "), bold("c")])]
        );
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let blocks = project("a\n\nb");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1], Block::Paragraph(vec![plain("")]));
    }

    #[test]
    fn test_block_count_equals_line_count() {
        let text = "# h\n- a\n1. b\n\nplain **x**\n---\ntail";
        assert_eq!(project(text).len(), text.split('\n').count());
    }
}

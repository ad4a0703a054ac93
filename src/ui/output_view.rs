use fltk::enums::Font;
use fltk::text::StyleTableEntry;

use crate::app::markdown::{Block, Span};
use crate::ui::theme::palette;

// Style characters for the output TextDisplay, indexing into style_table().
pub const STYLE_BODY: char = 'A';
pub const STYLE_BOLD: char = 'B';
pub const STYLE_H1: char = 'C';
pub const STYLE_H2: char = 'D';
pub const STYLE_H3: char = 'E';
pub const STYLE_MARKER: char = 'F';
pub const STYLE_MUTED: char = 'G';
pub const STYLE_ERROR: char = 'H';

const DIVIDER_WIDTH: usize = 36;

/// Style table matching the STYLE_* characters, in order.
pub fn style_table(font_size: i32, dark: bool) -> Vec<StyleTableEntry> {
    let p = palette(dark);
    vec![
        StyleTableEntry { color: p.text, font: Font::Helvetica, size: font_size },
        StyleTableEntry { color: p.strong, font: Font::HelveticaBold, size: font_size },
        StyleTableEntry { color: p.strong, font: Font::HelveticaBold, size: font_size + 8 },
        StyleTableEntry { color: p.strong, font: Font::HelveticaBold, size: font_size + 4 },
        StyleTableEntry { color: p.text, font: Font::HelveticaBold, size: font_size + 2 },
        StyleTableEntry { color: p.accent, font: Font::Helvetica, size: font_size },
        StyleTableEntry { color: p.muted, font: Font::HelveticaItalic, size: font_size },
        StyleTableEntry { color: p.danger, font: Font::Helvetica, size: font_size },
    ]
}

/// Display text plus the parallel style-char buffer FLTK's highlight data
/// expects: one style char per byte of text.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RenderedOutput {
    pub text: String,
    pub style: String,
}

impl RenderedOutput {
    fn push(&mut self, s: &str, style: char) {
        self.text.push_str(s);
        for _ in 0..s.len() {
            self.style.push(style);
        }
    }
}

fn heading_style(level: u8) -> char {
    match level {
        1 => STYLE_H1,
        2 => STYLE_H2,
        _ => STYLE_H3,
    }
}

/// Flatten projected blocks into one display text. Ordered items are
/// renumbered per consecutive run, since projection stripped their
/// original numbers.
pub fn render_blocks(blocks: &[Block]) -> RenderedOutput {
    let mut out = RenderedOutput::default();
    let mut ordered_index = 0usize;

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push("\n", STYLE_BODY);
        }
        if !matches!(block, Block::Ordered(_)) {
            ordered_index = 0;
        }
        match block {
            Block::Heading { level, text } => {
                out.push(text, heading_style(*level));
            }
            Block::Bullet(text) => {
                out.push("  \u{2022} ", STYLE_MARKER);
                out.push(text, STYLE_BODY);
            }
            Block::Ordered(text) => {
                ordered_index += 1;
                out.push(&format!("  {}. ", ordered_index), STYLE_MARKER);
                out.push(text, STYLE_BODY);
            }
            Block::Divider => {
                out.push(&"\u{2500}".repeat(DIVIDER_WIDTH), STYLE_MARKER);
            }
            Block::Paragraph(spans) => {
                for span in spans {
                    match span {
                        Span::Plain(text) => out.push(text, STYLE_BODY),
                        Span::Bold(text) => out.push(text, STYLE_BOLD),
                    }
                }
            }
        }
    }
    out
}

/// A one-off status line: placeholder, progress note or error banner.
pub fn render_notice(text: &str, style: char) -> RenderedOutput {
    let mut out = RenderedOutput::default();
    out.push(text, style);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::markdown::project;

    fn assert_aligned(out: &RenderedOutput) {
        assert_eq!(out.text.len(), out.style.len(), "style buffer must match byte for byte");
    }

    #[test]
    fn test_style_table_covers_every_style_char() {
        let table = style_table(15, true);
        let last = STYLE_ERROR as usize - STYLE_BODY as usize;
        assert_eq!(table.len(), last + 1);
    }

    #[test]
    fn test_style_runs_match_bytes_for_multibyte_text() {
        let out = render_blocks(&project("# Resumen — ñandú\n- ítem\n---"));
        assert_aligned(&out);
    }

    #[test]
    fn test_heading_and_bold_styles() {
        let out = render_blocks(&project("# T"));
        assert_eq!(out.text, "T");
        assert_eq!(out.style, "C");

        let out = render_blocks(&project("a **b**"));
        assert_eq!(out.text, "a b");
        assert_eq!(out.style, "AAB");
    }

    #[test]
    fn test_line_structure_is_preserved() {
        let out = render_blocks(&project("a\n\nb"));
        assert_eq!(out.text, "a\n\nb");
        assert_aligned(&out);
    }

    #[test]
    fn test_ordered_items_renumber_per_run() {
        let out = render_blocks(&project("1. a\n7. b\nplain\n3. c"));
        assert_eq!(out.text, "  1. a\n  2. b\nplain\n  1. c");
        assert_aligned(&out);
    }

    #[test]
    fn test_divider_renders_a_rule() {
        let out = render_blocks(&project("---"));
        assert_eq!(out.text.chars().filter(|&c| c == '\u{2500}').count(), DIVIDER_WIDTH);
        assert!(out.style.chars().all(|c| c == STYLE_MARKER));
        assert_aligned(&out);
    }

    #[test]
    fn test_notice() {
        let out = render_notice("Generating…", STYLE_MUTED);
        assert_aligned(&out);
        assert!(out.style.chars().all(|c| c == STYLE_MUTED));
    }
}

//! Fixed-width text blocks.
//!
//! Terminal escape sequences take no room on screen, so every width below
//! counts visible columns only.

use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Number of terminal columns `s` takes up once escape sequences are removed.
pub fn visible_width(s: &str) -> usize {
    strip_ansi_escapes::strip_str(s).width()
}

/// Pads `s` with spaces to `width` visible columns.
/// Wider strings are returned unchanged.
pub fn pad_cell(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    let mut out = String::with_capacity(s.len() + fill);
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', fill));
    out
}

/// Ordered lines of text produced by one renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
}

impl Block {
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Appends every line of `other` below this block.
    pub fn append(&mut self, other: Self) {
        self.lines.extend(other.lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Places blocks next to each other.
    ///
    /// Each block becomes a column of cells `width` columns wide, separated
    /// by `gutter` spaces. Shorter blocks are filled with blank cells down to
    /// the height of the tallest one.
    pub fn side_by_side(blocks: &[Self], width: usize, gutter: usize) -> Self {
        let height = blocks.iter().map(Self::len).max().unwrap_or(0);
        let separator = " ".repeat(gutter);

        (0..height)
            .map(|row| {
                blocks
                    .iter()
                    .map(|block| pad_cell(block.lines.get(row).map_or("", String::as_str), width))
                    .collect::<Vec<_>>()
                    .join(&separator)
            })
            .collect()
    }
}

impl FromIterator<String> for Block {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_width_plain() {
        assert_eq!(visible_width(""), 0);
        assert_eq!(visible_width("Week   Sun"), 10);
    }

    #[test]
    fn test_visible_width_ignores_escapes() {
        assert_eq!(visible_width("  \u{1b}[7m19\u{1b}[0m"), 4);
        assert_eq!(visible_width("\u{1b}[4m"), 0);
    }

    #[test]
    fn test_pad_cell_pads() {
        assert_eq!(pad_cell("abc", 5), "abc  ");
        assert_eq!(pad_cell("", 3), "   ");
    }

    #[test]
    fn test_pad_cell_highlighted_keeps_visible_width() {
        let cell = pad_cell("  \u{1b}[7m19\u{1b}[0m", 6);
        assert_eq!(cell, "  \u{1b}[7m19\u{1b}[0m  ");
        assert_eq!(visible_width(&cell), 6);
    }

    #[test]
    fn test_pad_cell_leaves_wide_cells() {
        assert_eq!(pad_cell("abcdef", 3), "abcdef");
    }

    #[test]
    fn test_visible_width_ignores_hyperlinks() {
        let link = "\u{1b}]8;;http://x\u{7}19\u{1b}]8;;\u{7}";
        assert_eq!(visible_width(link), 2);
        assert_eq!(visible_width(&pad_cell(link, 4)), 4);
    }

    #[test]
    fn test_visible_width_wide_characters() {
        assert_eq!(visible_width("日本"), 4);
    }

    #[test]
    fn test_side_by_side_uses_tallest_block() {
        let left: Block = ["a".to_owned()].into_iter().collect();
        let middle: Block = ["b".to_owned(), "bb".to_owned()].into_iter().collect();
        let right: Block = ["c".to_owned(), "cc".to_owned(), "ccc".to_owned()]
            .into_iter()
            .collect();

        let joined = Block::side_by_side(&[left, middle, right], 3, 1);
        assert_eq!(joined.lines(), ["a   b   c  ", "    bb  cc ", "        ccc"]);
    }

    #[test]
    fn test_side_by_side_empty() {
        assert!(Block::side_by_side(&[], 34, 4).is_empty());
        assert!(Block::side_by_side(&[Block::new(), Block::new()], 34, 4).is_empty());
    }

    #[test]
    fn test_append_and_display() {
        let mut block = Block::new();
        block.push("one");
        let mut other = Block::new();
        other.push(String::new());
        other.push("two");
        block.append(other);
        assert_eq!(block.len(), 3);
        assert_eq!(block.to_string(), "one\n\ntwo");
    }
}

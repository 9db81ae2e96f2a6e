use crate::document::Document;

/// `len` consecutive lines of a document starting at `start`
/// (0-based), with the lines already joined for scoring.
#[derive(Debug, Clone)]
pub struct Window<'a> {
    pub start: usize,
    pub lines: &'a [String],
    pub text: String,
}

impl<'a> Window<'a> {
    pub fn first_line(&self) -> &'a str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }

    pub fn preview(&self, max_chars: usize) -> String {
        self.first_line().chars().take(max_chars).collect()
    }
}

/// Every full window of `len` lines, in start order, joined lazily.
///
/// Starts run over `0..=line_count - len`, so a document of exactly `len`
/// lines has one window and a shorter one has none. The last full window is
/// included, unlike a scan over `0..line_count - len`, which would skip it.
pub fn windows(doc: &Document, len: usize) -> impl Iterator<Item = Window<'_>> + '_ {
    debug_assert!(len > 0, "window length must be positive");

    doc.lines()
        .windows(len)
        .enumerate()
        .map(|(start, lines)| Window {
            start,
            lines,
            text: lines.join("\n"),
        })
}

/// Number of full windows without building them.
pub fn window_count(line_count: usize, len: usize) -> usize {
    if len == 0 || line_count < len {
        0
    } else {
        line_count - len + 1
    }
}

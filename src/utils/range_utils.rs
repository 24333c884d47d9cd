//! Utilities for byte-offset bookkeeping over lines

use std::ops::Range;

/// A single line of a document with its byte offsets.
///
/// `text` excludes the line terminator (`\n` or `\r\n`); `end` is the offset just
/// past the terminator, so consecutive spans tile the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

impl<'a> LineSpan<'a> {
    /// Byte range of the line content, excluding the terminator
    pub fn content_range(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }

    /// The line terminator (`""`, `"\n"` or `"\r\n"`)
    pub fn terminator<'c>(&self, content: &'c str) -> &'c str {
        &content[self.start + self.text.len()..self.end]
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Number of leading columns, counting a tab as four
    pub fn indent(&self) -> usize {
        let mut width = 0;
        for c in self.text.chars() {
            match c {
                ' ' => width += 1,
                '\t' => width += 4 - (width % 4),
                _ => break,
            }
        }
        width
    }
}

/// Split content into lines, keeping exact byte offsets for both LF and CRLF input.
pub fn line_spans(content: &str) -> Vec<LineSpan<'_>> {
    let mut spans = Vec::new();
    let mut start = 0;
    for raw in content.split_inclusive('\n') {
        let end = start + raw.len();
        let text = raw
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(raw);
        spans.push(LineSpan { start, end, text });
        start = end;
    }
    spans
}

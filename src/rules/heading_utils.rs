use crate::utils::regex_cache::ATX_HEADING;
use std::ops::Range;

/// One ATX heading line, split into its parts.
///
/// Concatenating `indent`, `markers`, `separator`, `text` and `closing` gives back the
/// line exactly (terminator excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLine<'a> {
    pub indent: &'a str,
    pub markers: &'a str,
    pub separator: &'a str,
    pub text: &'a str,
    /// Optional closing `#` sequence plus trailing whitespace
    pub closing: &'a str,
    /// Byte offset of the start of the line
    pub start: usize,
    /// Byte offset of `text`
    pub text_start: usize,
}

impl<'a> HeadingLine<'a> {
    pub fn level(&self) -> usize {
        self.markers.len()
    }

    pub fn text_range(&self) -> Range<usize> {
        self.text_start..self.text_start + self.text.len()
    }

    /// Byte range of the whole line, terminator excluded
    pub fn line_range(&self) -> Range<usize> {
        self.start..self.text_start + self.text.len() + self.closing.len()
    }

    /// The line with `text` replaced and every other part kept
    pub fn rebuild(&self, text: &str) -> String {
        format!("{}{}{}{}{}", self.indent, self.markers, self.separator, text, self.closing)
    }
}

/// Every ATX heading in `content`, in document order.
///
/// Headings are found by pattern only; callers skip the ones inside masked regions.
pub fn atx_headings(content: &str) -> Vec<HeadingLine<'_>> {
    ATX_HEADING
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let text = caps.name("text")?;
            Some(HeadingLine {
                indent: caps.name("indent")?.as_str(),
                markers: caps.name("markers")?.as_str(),
                separator: caps.name("separator")?.as_str(),
                text: text.as_str(),
                closing: caps.name("trailing")?.as_str(),
                start: whole.start(),
                text_start: text.start(),
            })
        })
        .collect()
}

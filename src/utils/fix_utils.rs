//! Applying byte-range edits to a document
//!
//! Rules collect their changes as edits against the text they were given and
//! apply them in one pass, so unchanged bytes are copied verbatim.

use std::ops::Range;

/// Replace `range` of the original text with `replacement`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range<usize>,
    pub replacement: String,
}

impl Edit {
    pub fn new(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    pub fn delete(range: Range<usize>) -> Self {
        Self::new(range, "")
    }
}

/// Apply edits to `content`.
///
/// Edits are applied in start order. An edit that overlaps an earlier one, runs past
/// the end of the content or does not sit on character boundaries is dropped, so the
/// result is always well-formed.
pub fn apply_edits(content: &str, mut edits: Vec<Edit>) -> String {
    if edits.is_empty() {
        return content.to_string();
    }
    edits.sort_by(|a, b| a.range.start.cmp(&b.range.start).then(a.range.end.cmp(&b.range.end)));

    let mut result = String::with_capacity(content.len());
    let mut cursor = 0;
    for edit in edits {
        let Range { start, end } = edit.range;
        if start < cursor
            || start > end
            || end > content.len()
            || !content.is_char_boundary(start)
            || !content.is_char_boundary(end)
        {
            log::trace!("dropping invalid or overlapping edit at {start}..{end}");
            continue;
        }
        result.push_str(&content[cursor..start]);
        result.push_str(&edit.replacement);
        cursor = end;
    }
    result.push_str(&content[cursor..]);
    result
}

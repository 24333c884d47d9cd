use crate::utils::ignore_regions::{IgnoreType, MaskedRanges, masked_ranges};
use crate::utils::range_utils::{LineSpan, line_spans};
use std::ops::Range;

/// The view of a document a rule receives: the text plus the ranges it must not alter.
pub struct LintContext<'a> {
    pub content: &'a str,
    pub masked: MaskedRanges,
    pub line_offsets: Vec<usize>,
}

impl<'a> LintContext<'a> {
    /// Resolve the masked ranges of `content` for the given ignore kinds.
    pub fn new(content: &'a str, ignore_types: &[IgnoreType]) -> Self {
        let mut line_offsets = vec![0];
        for (i, c) in content.char_indices() {
            if c == '\n' {
                line_offsets.push(i + 1);
            }
        }
        Self {
            content,
            masked: masked_ranges(content, ignore_types),
            line_offsets,
        }
    }

    pub fn is_masked(&self, pos: usize) -> bool {
        self.masked.contains(pos)
    }

    /// Check if any byte of `range` lies in a masked region
    pub fn overlaps_masked(&self, range: &Range<usize>) -> bool {
        self.masked.overlaps(range)
    }

    pub fn lines(&self) -> Vec<LineSpan<'a>> {
        line_spans(self.content)
    }

    /// Map a byte offset to (line, column), both 1-based
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        match self.line_offsets.binary_search(&offset) {
            Ok(line) => (line + 1, 1),
            Err(line) => {
                let line_start = self.line_offsets.get(line.wrapping_sub(1)).copied().unwrap_or(0);
                (line, offset - line_start + 1)
            }
        }
    }
}

//!
//! Utility functions for detecting code blocks and code spans in Markdown.
//!
//! Fenced blocks follow CommonMark: up to three spaces of indentation, at least three
//! backticks or tildes, closed by a fence of the same character that is at least as
//! long. A fence that is never closed runs to the end of the document.

use crate::utils::range_utils::{LineSpan, line_spans};
use crate::utils::regex_cache::LIST_ITEM_MARKER;
use std::ops::Range;

/// An opening code fence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence {
    ch: char,
    len: usize,
}

/// Utility functions for detecting and handling code blocks in Markdown
pub struct CodeBlockUtils;

impl CodeBlockUtils {
    /// Byte ranges of fenced and indented code blocks, sorted by start.
    ///
    /// A fenced block spans from the start of its opening fence line to the end of
    /// its closing fence line (terminator excluded).
    pub fn detect_code_blocks(content: &str) -> Vec<Range<usize>> {
        let lines = line_spans(content);
        let mut blocks = Self::detect_fenced_blocks(content, &lines);
        blocks.extend(Self::detect_indented_blocks(&lines, &blocks));
        blocks.sort_by_key(|r| r.start);
        blocks
    }

    fn detect_fenced_blocks(content: &str, lines: &[LineSpan<'_>]) -> Vec<Range<usize>> {
        let mut blocks = Vec::new();
        let mut open: Option<(Fence, usize)> = None;

        for line in lines {
            match open {
                None => {
                    if let Some(fence) = Self::opening_fence(line.text) {
                        open = Some((fence, line.start));
                    }
                }
                Some((fence, start)) => {
                    if Self::is_closing_fence(line.text, fence) {
                        blocks.push(start..line.start + line.text.len());
                        open = None;
                    }
                }
            }
        }

        // Unclosed fences run to the end of the document
        if let Some((_, start)) = open {
            blocks.push(start..content.len());
        }

        blocks
    }

    fn opening_fence(line: &str) -> Option<Fence> {
        let trimmed = line.trim_start_matches(' ');
        if line.len() - trimmed.len() > 3 {
            return None;
        }
        let ch = trimmed.chars().next()?;
        if ch != '`' && ch != '~' {
            return None;
        }
        let len = trimmed.chars().take_while(|&c| c == ch).count();
        if len < 3 {
            return None;
        }
        // Backtick fences cannot carry backticks in their info string
        if ch == '`' && trimmed[len..].contains('`') {
            return None;
        }
        Some(Fence { ch, len })
    }

    fn is_closing_fence(line: &str, fence: Fence) -> bool {
        let trimmed = line.trim_start_matches(' ');
        if line.len() - trimmed.len() > 3 {
            return false;
        }
        let len = trimmed.chars().take_while(|&c| c == fence.ch).count();
        len >= fence.len && trimmed[len * fence.ch.len_utf8()..].trim().is_empty()
    }

    /// Indented code blocks: four columns of indentation, preceded by a blank line (or
    /// the start of the document), and not a continuation of a list item.
    fn detect_indented_blocks(lines: &[LineSpan<'_>], fenced: &[Range<usize>]) -> Vec<Range<usize>> {
        let mut blocks = Vec::new();
        let mut block: Option<Range<usize>> = None;
        let mut in_list = false;
        let mut prev_blank = true;

        for line in lines {
            let in_fence = fenced.iter().any(|r| r.start <= line.start && line.start < r.end.max(r.start + 1));
            if in_fence {
                if let Some(b) = block.take() {
                    blocks.push(b);
                }
                in_list = false;
                prev_blank = false;
                continue;
            }

            if line.is_blank() {
                prev_blank = true;
                continue;
            }

            let indent = line.indent();
            if indent >= 4 && !in_list {
                match block.as_mut() {
                    Some(b) => b.end = line.start + line.text.len(),
                    None if prev_blank => block = Some(line.start..line.start + line.text.len()),
                    None => {}
                }
            } else {
                if let Some(b) = block.take() {
                    blocks.push(b);
                }
                if indent < 4 {
                    if LIST_ITEM_MARKER.is_match(line.text.trim_start()) {
                        in_list = true;
                    } else if prev_blank {
                        in_list = false;
                    }
                    // Otherwise a lazy continuation line keeps the current list alive
                }
            }
            prev_blank = false;
        }

        if let Some(b) = block {
            blocks.push(b);
        }
        blocks
    }

    /// Byte ranges of inline code spans outside the given code blocks.
    ///
    /// An opening backtick run is closed by the next run of exactly the same length.
    /// Spans do not cross a blank line or a code block; a run without a partner is
    /// literal text.
    pub fn detect_code_spans(content: &str, code_blocks: &[Range<usize>]) -> Vec<Range<usize>> {
        let runs = Self::backtick_runs(content, code_blocks);
        let mut spans = Vec::new();
        let mut i = 0;

        while i < runs.len() {
            let open = &runs[i];
            let close = runs[i + 1..].iter().position(|candidate| candidate.len() == open.len());

            let Some(offset) = close else {
                i += 1;
                continue;
            };
            let close_idx = i + 1 + offset;
            let close = &runs[close_idx];
            let between = &content[open.end..close.start];
            let crosses_block = code_blocks
                .iter()
                .any(|b| b.start >= open.end && b.start < close.start);

            if Self::contains_blank_line(between) || crosses_block {
                i += 1;
                continue;
            }

            spans.push(open.start..close.end);
            i = close_idx + 1;
        }

        spans
    }

    fn backtick_runs(content: &str, code_blocks: &[Range<usize>]) -> Vec<Range<usize>> {
        let bytes = content.as_bytes();
        let mut runs = Vec::new();
        let mut pos = 0;

        while pos < bytes.len() {
            if bytes[pos] != b'`' {
                pos += 1;
                continue;
            }
            let mut start = pos;
            while pos < bytes.len() && bytes[pos] == b'`' {
                pos += 1;
            }
            // An escaped backtick is literal text
            if start > 0 && bytes[start - 1] == b'\\' {
                start += 1;
            }
            if start < pos && !code_blocks.iter().any(|b| b.start <= start && start < b.end) {
                runs.push(start..pos);
            }
        }

        runs
    }

    fn contains_blank_line(text: &str) -> bool {
        let mut lines = text.split('\n');
        lines.next();
        let mut remaining: Vec<&str> = lines.collect();
        // The final segment is the start of the closing line, not a full line
        remaining.pop();
        remaining.iter().any(|l| l.trim().is_empty())
    }
}

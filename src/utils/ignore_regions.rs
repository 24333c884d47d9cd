//! Ignore-region resolution
//!
//! A rule declares the kinds of regions it must never alter. Before the rule runs, the
//! resolver turns those kinds into a sorted set of half-open byte ranges. Every rule
//! asking for a kind gets the same detector, so a fenced code block looks the same to
//! a heading rule as to a spacing rule.
//!
//! Unterminated delimiters:
//! - code fences, `$$` math blocks and HTML comments run to the end of the document
//! - front matter without a closing `---` is not front matter
//! - inline code and inline math without a closing delimiter are literal text

use crate::utils::code_block_utils::CodeBlockUtils;
use crate::utils::front_matter_utils::FrontMatterUtils;
use crate::utils::range_utils::line_spans;
use crate::utils::regex_cache::{AUTOLINK, HTML_TAG, INLINE_LINK, INLINE_MATH, TABLE_DELIMITER_ROW, TAG, WIKI_LINK};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Kinds of document regions a rule can declare as off limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IgnoreType {
    /// Fenced and indented code blocks
    Code,
    /// Backtick code spans
    InlineCode,
    /// `$$` display-math blocks
    Math,
    /// `$...$` and `$$...$$` on a single line
    InlineMath,
    /// YAML front matter
    Yaml,
    /// HTML comments and tags
    Html,
    /// GFM tables
    Table,
    /// Inline links, images and autolinks
    Link,
    /// `[[wiki links]]` and `![[embeds]]`
    WikiLink,
    /// `#tags`
    Tag,
}

impl IgnoreType {
    pub const ALL: [IgnoreType; 10] = [
        IgnoreType::Code,
        IgnoreType::InlineCode,
        IgnoreType::Math,
        IgnoreType::InlineMath,
        IgnoreType::Yaml,
        IgnoreType::Html,
        IgnoreType::Table,
        IgnoreType::Link,
        IgnoreType::WikiLink,
        IgnoreType::Tag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IgnoreType::Code => "code",
            IgnoreType::InlineCode => "inline-code",
            IgnoreType::Math => "math",
            IgnoreType::InlineMath => "inline-math",
            IgnoreType::Yaml => "yaml",
            IgnoreType::Html => "html",
            IgnoreType::Table => "table",
            IgnoreType::Link => "link",
            IgnoreType::WikiLink => "wiki-link",
            IgnoreType::Tag => "tag",
        }
    }
}

impl fmt::Display for IgnoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sorted, merged, non-overlapping half-open byte ranges a rule must not alter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskedRanges {
    ranges: Vec<Range<usize>>,
}

impl MaskedRanges {
    /// Build from arbitrary ranges; empty ranges are dropped, overlapping or touching
    /// ranges are merged.
    pub fn from_ranges<I: IntoIterator<Item = Range<usize>>>(ranges: I) -> Self {
        let mut sorted: Vec<Range<usize>> = ranges.into_iter().filter(|r| r.start < r.end).collect();
        sorted.sort_by_key(|r| r.start);

        let mut merged: Vec<Range<usize>> = Vec::with_capacity(sorted.len());
        for range in sorted {
            match merged.last_mut() {
                Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
                _ => merged.push(range),
            }
        }
        Self { ranges: merged }
    }

    /// Check if a byte position is masked. Uses binary search.
    pub fn contains(&self, pos: usize) -> bool {
        let idx = self.ranges.partition_point(|r| r.end <= pos);
        self.ranges.get(idx).is_some_and(|r| r.start <= pos)
    }

    /// Check if any byte of `range` is masked. An empty range is checked as a position.
    pub fn overlaps(&self, range: &Range<usize>) -> bool {
        if range.start >= range.end {
            return self.contains(range.start);
        }
        let idx = self.ranges.partition_point(|r| r.end <= range.start);
        self.ranges.get(idx).is_some_and(|r| r.start < range.end)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Range<usize>> {
        self.ranges.iter()
    }

    pub fn as_slice(&self) -> &[Range<usize>] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Compute the masked ranges of `content` for the requested ignore kinds.
pub fn masked_ranges(content: &str, kinds: &[IgnoreType]) -> MaskedRanges {
    if content.is_empty() || kinds.is_empty() {
        return MaskedRanges::default();
    }

    // Code blocks are structural context for every other detector: nothing inside a
    // code block is math, a link or a tag.
    let code_blocks = CodeBlockUtils::detect_code_blocks(content);
    let mut ranges: Vec<Range<usize>> = Vec::new();

    for kind in kinds {
        match kind {
            IgnoreType::Code => ranges.extend(code_blocks.iter().cloned()),
            IgnoreType::InlineCode => ranges.extend(CodeBlockUtils::detect_code_spans(content, &code_blocks)),
            IgnoreType::Math => ranges.extend(detect_math_blocks(content, &code_blocks)),
            IgnoreType::InlineMath => ranges.extend(detect_inline_math(content, &code_blocks)),
            IgnoreType::Yaml => ranges.extend(FrontMatterUtils::front_matter_range(content)),
            IgnoreType::Html => ranges.extend(detect_html(content, &code_blocks)),
            IgnoreType::Table => ranges.extend(detect_tables(content, &code_blocks)),
            IgnoreType::Link => ranges.extend(detect_links(content, &code_blocks)),
            IgnoreType::WikiLink => ranges.extend(outside_code(
                WIKI_LINK.find_iter(content).map(|m| m.range()),
                &code_blocks,
            )),
            IgnoreType::Tag => ranges.extend(detect_tags(content, &code_blocks)),
        }
    }

    MaskedRanges::from_ranges(ranges)
}

fn starts_in(blocks: &[Range<usize>], pos: usize) -> bool {
    blocks.iter().any(|b| b.start <= pos && pos < b.end)
}

fn outside_code<'a, I>(ranges: I, code_blocks: &'a [Range<usize>]) -> impl Iterator<Item = Range<usize>> + 'a
where
    I: Iterator<Item = Range<usize>> + 'a,
{
    ranges.filter(move |r| !starts_in(code_blocks, r.start))
}

/// `$$` blocks. A line starting with `$$` opens a block; the first later line ending
/// with `$$` closes it. `$$ x $$` on one line is a complete block, and a line whose
/// opening `$$` is closed before the line ends (`$$a$$ is the area`) is inline math.
fn detect_math_blocks(content: &str, code_blocks: &[Range<usize>]) -> Vec<Range<usize>> {
    let mut blocks = Vec::new();
    let mut open: Option<usize> = None;

    for line in line_spans(content) {
        if starts_in(code_blocks, line.start) {
            continue;
        }
        let trimmed = line.text.trim();
        match open {
            None => {
                if let Some(rest) = trimmed.strip_prefix("$$") {
                    if rest.ends_with("$$") {
                        blocks.push(line.content_range());
                    } else if !rest.contains("$$") {
                        open = Some(line.start);
                    }
                }
            }
            Some(start) => {
                if trimmed.ends_with("$$") {
                    blocks.push(start..line.start + line.text.len());
                    open = None;
                }
            }
        }
    }

    if let Some(start) = open {
        blocks.push(start..content.len());
    }
    blocks
}

fn detect_inline_math(content: &str, code_blocks: &[Range<usize>]) -> Vec<Range<usize>> {
    outside_code(INLINE_MATH.find_iter(content).map(|m| m.range()), code_blocks).collect()
}

/// HTML comments (an unclosed comment runs to the end of the document) and tags.
fn detect_html(content: &str, code_blocks: &[Range<usize>]) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut search_from = 0;

    while let Some(offset) = content[search_from..].find("<!--") {
        let start = search_from + offset;
        if starts_in(code_blocks, start) {
            search_from = start + 4;
            continue;
        }
        let end = content[start + 4..]
            .find("-->")
            .map(|close| start + 4 + close + 3)
            .unwrap_or(content.len());
        ranges.push(start..end);
        search_from = end;
    }

    let comments = ranges.clone();
    ranges.extend(
        HTML_TAG
            .find_iter(content)
            .map(|m| m.range())
            .filter(|r| !starts_in(code_blocks, r.start) && !starts_in(&comments, r.start)),
    );
    ranges
}

/// GFM tables: a row containing `|` followed by a delimiter row; the table continues
/// while lines are non-blank and contain `|`.
fn detect_tables(content: &str, code_blocks: &[Range<usize>]) -> Vec<Range<usize>> {
    let lines = line_spans(content);
    let mut tables = Vec::new();
    let mut i = 0;

    while i + 1 < lines.len() {
        let header = &lines[i];
        let delimiter = &lines[i + 1];
        let is_table = !starts_in(code_blocks, header.start)
            && header.text.contains('|')
            && delimiter.text.contains('|')
            && TABLE_DELIMITER_ROW.is_match(delimiter.text);

        if !is_table {
            i += 1;
            continue;
        }

        let mut last = i + 1;
        while last + 1 < lines.len() {
            let row = &lines[last + 1];
            if row.is_blank() || !row.text.contains('|') || starts_in(code_blocks, row.start) {
                break;
            }
            last += 1;
        }
        tables.push(header.start..lines[last].start + lines[last].text.len());
        i = last + 1;
    }

    tables
}

fn detect_links(content: &str, code_blocks: &[Range<usize>]) -> Vec<Range<usize>> {
    let inline = INLINE_LINK.find_iter(content).map(|m| m.range());
    let autolinks = AUTOLINK.find_iter(content).map(|m| m.range());
    outside_code(inline.chain(autolinks), code_blocks).collect()
}

fn detect_tags(content: &str, code_blocks: &[Range<usize>]) -> Vec<Range<usize>> {
    let tags = TAG
        .captures_iter(content)
        .filter_map(|caps| caps.name("tag").map(|m| m.range()));
    outside_code(tags, code_blocks).collect()
}

//! Lazily compiled regex patterns shared by the ignore-region detectors and the rules.
//!
//! Every pattern here is compiled once per process. All of them are plain `regex`
//! patterns, so matching is linear in the input and cannot backtrack catastrophically.

use regex::Regex;
use std::sync::LazyLock;

/// ATX heading line: indent (any spaces or tabs), 1-6 `#` markers, separator, heading
/// text, and the trailing part (optional closing `#` sequence plus trailing whitespace).
///
/// Deeper indentation is accepted so headings nested in list items are found; indented
/// code is excluded by the `Code` ignore region, not by this pattern.
///
/// The text group is lazy so trailing whitespace and closing markers always land in
/// `trailing`. `R` makes `$` treat `\r\n` as a line terminator.
pub static ATX_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?mR)^(?P<indent>[ \t]*)(?P<markers>#{1,6})(?P<separator>[ \t]+)(?P<text>[^\r\n]*?)(?P<trailing>(?:[ \t]+#+)?[ \t]*)$",
    )
    .unwrap()
});

/// A complete HTML entity reference at the end of a string (`&amp;`, `&#35;`, `&#x23;`).
pub static HTML_ENTITY_AT_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]{1,7}|#[xX][0-9A-Fa-f]{1,6});$").unwrap());

/// Inline math: `$$...$$` is tried before `$...$`. Both allow empty content so a lone
/// `$$` is consumed and cannot pair with a later dollar sign.
pub static INLINE_MATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\$[^$\n]*\$\$|\$[^$\n]*\$").unwrap());

/// Opening or closing HTML tag on a single line.
pub static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][A-Za-z0-9-]*(?:[ \t][^<>\n]*)?/?>").unwrap());

/// Inline link or image: `[text](dest)` / `![alt](dest)`.
pub static INLINE_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!?\[[^\]\n]*\]\([^)\n]*\)").unwrap());

/// Autolink: `<https://example.com>`, `<mailto:someone@example.com>`.
pub static AUTOLINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z][A-Za-z0-9+.-]{1,31}:[^\s<>]*>").unwrap());

/// Wiki link or embed: `[[target]]` / `![[embed]]`.
pub static WIKI_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!?\[\[[^\]\n]+\]\]").unwrap());

/// Tag token preceded by start of line or whitespace. A tag needs at least one
/// non-digit character, so `#123` is not a tag and `# Heading` never matches.
pub static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(?:^|[ \t])(?P<tag>#[\p{L}\p{N}_/-]*[\p{L}_/-][\p{L}\p{N}_/-]*)").unwrap()
});

/// GFM table delimiter row, e.g. `| --- | :-: |`. Callers must also check for a `|`.
pub static TABLE_DELIMITER_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*\|?[ \t]*:?-+:?[ \t]*(?:\|[ \t]*:?-+:?[ \t]*)*\|?[ \t]*$").unwrap()
});

/// Unordered or ordered list item marker at the start of a (trimmed) line.
pub static LIST_ITEM_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[*+-]|\d{1,9}[.)])(?:[ \t]|$)").unwrap());

/// Two or more consecutive spaces.
pub static MULTIPLE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

use mdtidy_lib::utils::ignore_regions::{IgnoreType, MaskedRanges, masked_ranges};
use pretty_assertions::assert_eq;

fn masked_texts<'a>(content: &'a str, kinds: &[IgnoreType]) -> Vec<&'a str> {
    masked_ranges(content, kinds)
        .iter()
        .map(|r| &content[r.clone()])
        .collect()
}

#[test]
fn test_empty_document() {
    assert!(masked_ranges("", &IgnoreType::ALL).is_empty());
}

#[test]
fn test_ranges_are_sorted_and_disjoint() {
    let content = "---\nk: v\n---\n`a` $b$ [c](d) #e <i>f</i>\n\n```\ng\n```\n";
    let masked = masked_ranges(content, &IgnoreType::ALL);
    for pair in masked.as_slice().windows(2) {
        assert!(pair[0].end < pair[1].start, "{pair:?}");
    }
}

#[test]
fn test_nothing_inside_code_is_anything_else() {
    let content = "```\n$x$ [l](u) #tag <b>\n```\n";
    let kinds = [IgnoreType::InlineMath, IgnoreType::Link, IgnoreType::Tag, IgnoreType::Html];
    assert!(masked_ranges(content, &kinds).is_empty());
}

#[test]
fn test_multi_backtick_code_span() {
    let content = "Use ``a ` b`` here and `c`.";
    assert_eq!(masked_texts(content, &[IgnoreType::InlineCode]), vec!["``a ` b``", "`c`"]);
}

#[test]
fn test_code_span_does_not_cross_blank_line() {
    let content = "`open\n\nclose and `done`";
    assert_eq!(masked_texts(content, &[IgnoreType::InlineCode]), vec!["`done`"]);
}

#[test]
fn test_unclosed_inline_code_and_math_are_text() {
    assert!(masked_ranges("a `b c", &[IgnoreType::InlineCode]).is_empty());
    assert!(masked_ranges("costs $5 today", &[IgnoreType::InlineMath]).is_empty());
}

#[test]
fn test_indented_code_block() {
    let content = "Paragraph\n\n    let x = 1;\n    let y = 2;\n\nAfter";
    assert_eq!(
        masked_texts(content, &[IgnoreType::Code]),
        vec!["    let x = 1;\n    let y = 2;"]
    );
}

#[test]
fn test_list_continuation_is_not_code() {
    let content = "- item\n\n    continuation\n";
    assert!(masked_ranges(content, &[IgnoreType::Code]).is_empty());
}

#[test]
fn test_unterminated_fence_runs_to_end() {
    let content = "text\n````\ncode\n```\nstill code";
    let masked = masked_ranges(content, &[IgnoreType::Code]);
    assert_eq!(masked.as_slice(), &[5..content.len()]);
}

#[test]
fn test_front_matter_must_start_document() {
    let content = "\n---\na: 1\n---\n";
    assert!(masked_ranges(content, &[IgnoreType::Yaml]).is_empty());
}

#[test]
fn test_from_ranges_merges() {
    let masked = MaskedRanges::from_ranges(vec![4..6, 0..2, 1..3]);
    assert_eq!(masked.as_slice(), &[0..3, 4..6]);
    assert_eq!(masked.len(), 2);
}

#[test]
fn test_math_closed_on_its_line_then_text() {
    let content = "$$a$$ text\n\n# Heading.\n";
    assert!(masked_ranges(content, &[IgnoreType::Math]).is_empty());
    assert_eq!(masked_texts(content, &IgnoreType::ALL), vec!["$$a$$"]);
}

#[test]
fn test_comment_opener_in_code_block_leaves_later_comment_masked() {
    let content = "```\n<!--\n```\n# heading <!-- keep me -->\n";
    assert_eq!(
        masked_texts(content, &[IgnoreType::Code, IgnoreType::Html]),
        vec!["```\n<!--\n```", "<!-- keep me -->"]
    );
}

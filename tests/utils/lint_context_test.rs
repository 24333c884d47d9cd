use mdtidy_lib::LintContext;
use mdtidy_lib::utils::ignore_regions::IgnoreType;

#[test]
fn test_masks_follow_requested_kinds() {
    let content = "# Title\n```\ncode\n```\n";
    let with_code = LintContext::new(content, &[IgnoreType::Code]);
    let without = LintContext::new(content, &[IgnoreType::Tag]);
    let code_pos = content.find("code").unwrap();
    assert!(with_code.is_masked(code_pos));
    assert!(!without.is_masked(code_pos));
}

#[test]
fn test_lines_cover_document() {
    let content = "a\r\nb\nc";
    let ctx = LintContext::new(content, &[]);
    let texts: Vec<&str> = ctx.lines().iter().map(|l| l.text).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[test]
fn test_offset_to_line_col() {
    let ctx = LintContext::new("ab\ncd\n", &[]);
    assert_eq!(ctx.offset_to_line_col(0), (1, 1));
    assert_eq!(ctx.offset_to_line_col(1), (1, 2));
    assert_eq!(ctx.offset_to_line_col(3), (2, 1));
    assert_eq!(ctx.offset_to_line_col(4), (2, 2));
}

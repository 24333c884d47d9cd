use mdtidy_lib::config::Config;
use mdtidy_lib::rule::{Rule, apply_rule};
use mdtidy_lib::rules::{DEFAULT_PUNCTUATION, RemoveTrailingPunctuationInHeading};
use pretty_assertions::assert_eq;

fn fix(content: &str) -> String {
    apply_rule(&RemoveTrailingPunctuationInHeading::default(), content).unwrap()
}

fn fix_with(punctuation: &str, content: &str) -> String {
    apply_rule(&RemoveTrailingPunctuationInHeading::new(punctuation), content).unwrap()
}

#[test]
fn test_removes_each_default_mark() {
    for mark in DEFAULT_PUNCTUATION.chars() {
        let content = format!("# Heading{mark}\n");
        assert_eq!(fix(&content), "# Heading\n", "mark {mark:?}");
    }
}

#[test]
fn test_keeps_question_mark_by_default() {
    let content = "# Why not?\n";
    assert_eq!(fix(content), content);
}

#[test]
fn test_only_one_mark_per_run() {
    assert_eq!(fix("# Wait...\n"), "# Wait..\n");
}

#[test]
fn test_document_without_headings_unchanged() {
    let content = "Plain paragraph.\n\n- list item!\n\n> quote;\n";
    assert_eq!(fix(content), content);
}

#[test]
fn test_heading_inside_fenced_code_unchanged() {
    let content = "```md\n# Not a heading.\n```\n\n# Real heading.\n";
    assert_eq!(fix(content), "```md\n# Not a heading.\n```\n\n# Real heading\n");
}

#[test]
fn test_unterminated_fence_masks_rest_of_document() {
    let content = "# Before.\n~~~\n# Inside.\n";
    assert_eq!(fix(content), "# Before\n~~~\n# Inside.\n");
}

#[test]
fn test_heading_inside_math_block_unchanged() {
    let content = "$$\n# x.\n$$\n# After.";
    assert_eq!(fix(content), "$$\n# x.\n$$\n# After");
}

#[test]
fn test_front_matter_unchanged() {
    let content = "---\ntitle: x\n# comment.\n---\n# Title.\n";
    assert_eq!(fix(content), "---\ntitle: x\n# comment.\n---\n# Title\n");
}

#[test]
fn test_entity_guard_for_any_punctuation_set() {
    let content = "## Heading &amp;\n";
    for set in ["", ";", DEFAULT_PUNCTUATION, "&;p"] {
        assert_eq!(fix_with(set, content), content, "set {set:?}");
    }
}

#[test]
fn test_whitespace_after_mark_is_kept() {
    assert_eq!(fix("# Heading 1!  \n## Heading 2.\t"), "# Heading 1  \n## Heading 2\t");
}

#[test]
fn test_closing_markers_are_kept() {
    assert_eq!(
        fix("## Other heading ends in an exclamation mark! ##"),
        "## Other heading ends in an exclamation mark ##"
    );
}

#[test]
fn test_configured_set() {
    assert_eq!(fix_with("", "# Heading."), "# Heading.");
    assert_eq!(fix_with("!", "# Heading."), "# Heading.");
    assert_eq!(fix_with("!", "# Heading!"), "# Heading");
}

#[test]
fn test_full_width_marks() {
    assert_eq!(fix("# 标题。\n"), "# 标题\n");
    assert_eq!(fix("# 标题！"), "# 标题");
}

#[test]
fn test_setext_headings_untouched() {
    let content = "Heading.\n========\n";
    assert_eq!(fix(content), content);
}

#[test]
fn test_from_config_camel_case_key() {
    let config = Config::from_toml_str("[remove-trailing-punctuation-in-heading]\npunctuationToRemove = \";\"\n").unwrap();
    let rule = RemoveTrailingPunctuationInHeading::from_config(&config).unwrap();
    assert_eq!(apply_rule(rule.as_ref(), "# A.\n# B;").unwrap(), "# A.\n# B");
}

#[test]
fn test_heading_of_only_punctuation() {
    assert_eq!(fix("# ...\n"), "# ..\n");
    assert_eq!(fix("## !\n"), "## \n");
}

#[test]
fn test_one_line_math_does_not_hide_later_headings() {
    let content = "$$a$$ is the area.\n\n# Heading one.\n## Heading two!\n";
    assert_eq!(fix(content), "$$a$$ is the area.\n\n# Heading one\n## Heading two\n");
}

#[test]
fn test_headings_nested_in_list_items_and_tab_indented() {
    let content = "1. Step\n\n    # Sub heading.\n\t# Tab heading.\n";
    assert_eq!(fix(content), "1. Step\n\n    # Sub heading\n\t# Tab heading\n");
}

#[test]
fn test_indented_code_block_heading_unchanged() {
    let content = "Paragraph\n\n    # not a heading.\n\nAfter\n";
    assert_eq!(fix(content), content);
}

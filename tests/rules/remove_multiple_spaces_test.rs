use mdtidy_lib::rule::apply_rule;
use mdtidy_lib::rules::RemoveMultipleSpaces;
use pretty_assertions::assert_eq;

fn fix(content: &str) -> String {
    apply_rule(&RemoveMultipleSpaces, content).unwrap()
}

#[test]
fn test_paragraph_spaces_collapsed() {
    assert_eq!(fix("One  two.   Three\n"), "One two. Three\n");
}

#[test]
fn test_list_indentation_kept() {
    let content = "- item  one\n    - nested  item\n";
    assert_eq!(fix(content), "- item one\n    - nested item\n");
}

#[test]
fn test_math_and_tags_kept() {
    let content = "$a  +  b$ and #some-tag\n";
    assert_eq!(fix(content), content);
}

#[test]
fn test_fenced_code_kept() {
    let content = "```\nlet  x  =  1;\n```\n";
    assert_eq!(fix(content), content);
}

#[test]
fn test_unclosed_inline_code_is_text() {
    assert_eq!(fix("a `b  c\n"), "a `b c\n");
}

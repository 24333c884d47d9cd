use mdtidy_lib::rule::apply_rule;
use mdtidy_lib::rules::ConsecutiveBlankLines;
use pretty_assertions::assert_eq;

fn fix(content: &str) -> String {
    apply_rule(&ConsecutiveBlankLines, content).unwrap()
}

#[test]
fn test_collapses_runs() {
    assert_eq!(fix("# Title\n\n\n\nText\n\n\nMore\n"), "# Title\n\nText\n\nMore\n");
}

#[test]
fn test_front_matter_blank_lines_kept() {
    let content = "---\na: 1\n\n\nb: 2\n---\n\n\nbody\n";
    assert_eq!(fix(content), "---\na: 1\n\n\nb: 2\n---\n\nbody\n");
}

#[test]
fn test_unclosed_front_matter_is_ordinary_text() {
    assert_eq!(fix("---\na: 1\n\n\nb: 2\n"), "---\na: 1\n\nb: 2\n");
}

#[test]
fn test_math_block_blank_lines_kept() {
    let content = "$$\na\n\n\nb\n$$\n";
    assert_eq!(fix(content), content);
}

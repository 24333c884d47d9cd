use mdtidy_lib::config::Config;
use mdtidy_lib::rule::{Rule, apply_rule};
use mdtidy_lib::rules::TrailingSpaces;
use pretty_assertions::assert_eq;

#[test]
fn test_mixed_trailing_whitespace_removed() {
    let rule = TrailingSpaces::default();
    assert_eq!(apply_rule(&rule, "one \t \ntwo\t\nthree").unwrap(), "one\ntwo\nthree");
}

#[test]
fn test_math_block_preserved() {
    let rule = TrailingSpaces::default();
    let content = "$$\nx = 1  \n$$\nafter  \n";
    assert_eq!(apply_rule(&rule, content).unwrap(), "$$\nx = 1  \n$$\nafter\n");
}

#[test]
fn test_two_space_line_break_from_config() {
    let config = Config::from_toml_str("[trailing-spaces]\ntwo_space_line_break = true\n").unwrap();
    let rule = TrailingSpaces::from_config(&config).unwrap();
    assert_eq!(
        apply_rule(rule.as_ref(), "keep  \nshrink     \ndrop \n").unwrap(),
        "keep  \nshrink  \ndrop\n"
    );
}

#[test]
fn test_tab_before_spaces_is_not_a_line_break() {
    let rule = TrailingSpaces::new(true);
    assert_eq!(apply_rule(&rule, "text\t  \n").unwrap(), "text\n");
}

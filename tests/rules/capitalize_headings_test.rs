use mdtidy_lib::config::Config;
use mdtidy_lib::rule::{Rule, apply_rule};
use mdtidy_lib::rules::{CapitalizeHeadings, HeadingCaseStyle};
use pretty_assertions::assert_eq;

fn fix(style: HeadingCaseStyle, content: &str) -> String {
    apply_rule(&CapitalizeHeadings::new(style), content).unwrap()
}

#[test]
fn test_title_case_lowercases_connectors() {
    assert_eq!(
        fix(HeadingCaseStyle::TitleCase, "## the state of the art\n"),
        "## The State of the Art\n"
    );
}

#[test]
fn test_body_text_untouched() {
    let content = "# title\n\nsome body text\n";
    assert_eq!(fix(HeadingCaseStyle::TitleCase, content), "# Title\n\nsome body text\n");
}

#[test]
fn test_all_caps_keeps_inline_code() {
    assert_eq!(
        fix(HeadingCaseStyle::AllCaps, "# run `cargo test` now"),
        "# RUN `cargo test` NOW"
    );
}

#[test]
fn test_links_keep_their_text() {
    assert_eq!(
        fix(HeadingCaseStyle::TitleCase, "# read [the docs](docs.md) first"),
        "# Read [the docs](docs.md) First"
    );
}

#[test]
fn test_first_letter_leaves_other_words() {
    assert_eq!(
        fix(HeadingCaseStyle::FirstLetter, "# getting started With Rust"),
        "# Getting started With Rust"
    );
}

#[test]
fn test_configured_word_lists() {
    let config = Config::from_toml_str(
        "[capitalize-headings]\nignore-words = [\"mdtidy\"]\nlowercase-words = [\"is\"]\n",
    )
    .unwrap();
    let rule = CapitalizeHeadings::from_config(&config).unwrap();
    assert_eq!(
        apply_rule(rule.as_ref(), "# MDTIDY is great").unwrap(),
        "# mdtidy is Great"
    );
}

#[test]
fn test_invalid_style_rejected() {
    let config = Config::from_toml_str("[capitalize-headings]\nstyle = \"shouting\"\n").unwrap();
    let err = CapitalizeHeadings::from_config(&config).err().unwrap();
    let message = err.to_string();
    assert!(message.contains("capitalize-headings"), "{message}");
    assert!(message.contains("style"), "{message}");
}

#[test]
fn test_comment_after_code_with_comment_opener_is_kept() {
    let content = "```\n<!--\n```\n# heading <!-- keep me -->\n";
    assert_eq!(
        fix(HeadingCaseStyle::TitleCase, content),
        "```\n<!--\n```\n# Heading <!-- keep me -->\n"
    );
}

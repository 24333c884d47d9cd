use mdtidy_lib::rule::{Rule, apply_rule};
use mdtidy_lib::rules::{
    CapitalizeHeadings, ConsecutiveBlankLines, HeadingCaseStyle, RemoveMultipleSpaces,
    RemoveTrailingPunctuationInHeading, TrailingSpaces,
};
use proptest::prelude::*;

fn apply_twice(rule: &dyn Rule, content: &str) -> (String, String) {
    let once = apply_rule(rule, content).unwrap();
    let twice = apply_rule(rule, &once).unwrap();
    (once, twice)
}

/// Lines mixing headings, paragraphs, blank and whitespace-only lines, and fences
fn document() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        Just(String::new()),
        "[ \t]{1,4}",
        "#{1,6} [a-zA-Z ]{0,20}[.!?:]?[ \t]{0,3}",
        "[a-zA-Z`$]{1,8}( {1,4}[a-zA-Z`$]{1,8}){0,5}[ \t]{0,3}",
        Just("```".to_string()),
        Just("$$".to_string()),
    ];
    prop::collection::vec(line, 0..20).prop_map(|lines| lines.join("\n"))
}

/// Headings whose text never ends in two removable marks
fn headings_document() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        "#{1,6} [a-zA-Z]{1,10}( [a-zA-Z]{1,10}){0,3}[.,;:!]?[ \t]{0,2}",
        "#{1,6} [a-zA-Z]{1,10}[.!]? #{1,6}",
        "[a-zA-Z .]{0,20}",
        Just(String::new()),
    ];
    prop::collection::vec(line, 0..12).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn trailing_punctuation_is_idempotent(content in headings_document()) {
        let (once, twice) = apply_twice(&RemoveTrailingPunctuationInHeading::default(), &content);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn trailing_punctuation_keeps_line_count(content in headings_document()) {
        let once = apply_rule(&RemoveTrailingPunctuationInHeading::default(), &content).unwrap();
        prop_assert_eq!(once.lines().count(), content.lines().count());
    }

    #[test]
    fn trailing_spaces_is_idempotent(content in document(), hard_break in any::<bool>()) {
        let (once, twice) = apply_twice(&TrailingSpaces::new(hard_break), &content);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn consecutive_blank_lines_is_idempotent(content in document()) {
        let (once, twice) = apply_twice(&ConsecutiveBlankLines, &content);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn remove_multiple_spaces_is_idempotent(content in document()) {
        let (once, twice) = apply_twice(&RemoveMultipleSpaces, &content);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn capitalize_headings_is_idempotent(content in document(), style in 0..3usize) {
        let style = [HeadingCaseStyle::TitleCase, HeadingCaseStyle::AllCaps, HeadingCaseStyle::FirstLetter][style];
        let (once, twice) = apply_twice(&CapitalizeHeadings::new(style), &content);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn documents_without_headings_are_untouched(content in "[a-z .!,\n]{0,80}") {
        let once = apply_rule(&RemoveTrailingPunctuationInHeading::default(), &content).unwrap();
        prop_assert_eq!(once, content);
    }
}

//! Every documented example must hold exactly.

use mdtidy_lib::config::Config;
use mdtidy_lib::rule::{Rule, apply_rule};
use mdtidy_lib::rules::{all_rules, find_rule};
use pretty_assertions::assert_eq;

fn configured_rule(rule: &dyn Rule, options: Option<&str>) -> Box<dyn Rule> {
    let descriptor = find_rule(rule.name()).unwrap();
    match options {
        Some(options) => descriptor.build_with_options(options).unwrap(),
        None => (descriptor.build)(&Config::default()).unwrap(),
    }
}

#[test]
fn test_every_rule_has_examples() {
    for rule in all_rules(&Config::default()) {
        assert!(!rule.examples().is_empty(), "{} has no examples", rule.name());
    }
}

#[test]
fn test_examples_hold() {
    for rule in all_rules(&Config::default()) {
        for example in rule.examples() {
            let configured = configured_rule(rule.as_ref(), example.options);
            let actual = apply_rule(configured.as_ref(), example.before).unwrap();
            assert_eq!(actual, example.after, "{}: {}", rule.name(), example.description);
        }
    }
}

#[test]
fn test_examples_are_stable() {
    for rule in all_rules(&Config::default()) {
        for example in rule.examples() {
            let configured = configured_rule(rule.as_ref(), example.options);
            let again = apply_rule(configured.as_ref(), example.after).unwrap();
            assert_eq!(again, example.after, "{}: {}", rule.name(), example.description);
        }
    }
}

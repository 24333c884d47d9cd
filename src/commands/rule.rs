//! Handler for the `rule` command.

use anyhow::{Result, bail};
use colored::*;

use mdtidy_lib::exit_codes;
use mdtidy_lib::rule::Rule;
use mdtidy_lib::rules::{all_rules, find_rule, rule_names};

use super::load_config;
use crate::GlobalArgs;

/// Handle the rule command: show info about a rule or list all rules.
pub fn handle_rule(name: Option<&str>, global: &GlobalArgs) -> Result<i32> {
    let config = load_config(global)?;
    let rules = all_rules(&config);

    let Some(name) = name else {
        list_rules(&rules, &config);
        return Ok(exit_codes::SUCCESS);
    };

    let Some(descriptor) = find_rule(name) else {
        bail!("Unknown rule '{name}'. Available rules: {}", rule_names().join(", "));
    };
    match rules.iter().find(|r| r.name() == descriptor.name) {
        Some(rule) => print_rule(rule.as_ref()),
        None => bail!("Rule '{name}' could not be built"),
    }
    Ok(exit_codes::SUCCESS)
}

fn list_rules(rules: &[Box<dyn Rule>], config: &mdtidy_lib::Config) {
    println!("Available rules:");
    let mut current_category = None;
    for rule in rules {
        if current_category != Some(rule.category()) {
            current_category = Some(rule.category());
            println!("\n{}", rule.category().as_str().bold());
        }
        let marker = if config.is_rule_enabled(rule.name()) {
            " ".normal()
        } else {
            "(disabled)".dimmed()
        };
        println!("  {:<40} {} {}", rule.name().cyan(), rule.description(), marker);
    }
}

fn print_rule(rule: &dyn Rule) {
    println!("{} - {}", rule.name().cyan().bold(), rule.description());
    println!("Category: {}", rule.category());

    let ignored: Vec<&str> = rule.ignore_types().iter().map(|t| t.as_str()).collect();
    if !ignored.is_empty() {
        println!("Leaves untouched: {}", ignored.join(", "));
    }

    let options = rule.options();
    if !options.is_empty() {
        println!("\n{}", "Options:".bold());
        for option in options {
            println!(
                "  {} ({}, default: {})",
                option.name.green(),
                option.kind,
                option.default
            );
            println!("      {}", option.description);
        }
    }

    let examples = rule.examples();
    if !examples.is_empty() {
        println!("\n{}", "Examples:".bold());
    }
    for example in examples {
        println!("\n  {}", example.description);
        if let Some(options) = example.options {
            println!("  {}", "With:".dimmed());
            print_block(options);
        }
        println!("  {}", "Before:".dimmed());
        print_block(example.before);
        println!("  {}", "After:".dimmed());
        print_block(example.after);
    }
}

fn print_block(text: &str) {
    for line in text.lines() {
        println!("    {line}");
    }
}

//! Handler for the `check` and `fix` commands.

use anyhow::{Context, Result};
use colored::*;
use log::LevelFilter;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use mdtidy_lib::exit_codes;
use mdtidy_lib::pipeline::Pipeline;
use mdtidy_lib::rules::{RuleSet, build_rules};

use super::{load_config, print_config_warnings};
use crate::file_processor::{self, FileOutcome};
use crate::{CheckArgs, GlobalArgs};

const STDIN_NAME: &str = "<stdin>";

/// Handle `check` (report only) and `fix` (rewrite in place).
pub fn handle_check(args: &CheckArgs, global: &GlobalArgs, fix: bool) -> Result<i32> {
    let mut config = load_config(global)?;
    config.apply_overrides(
        args.enable.clone(),
        args.disable.clone(),
        args.exclude.clone(),
        args.on_rule_error,
    );

    let RuleSet { rules, errors } = build_rules(&config);
    print_config_warnings(&errors);
    if rules.is_empty() && !global.quiet {
        eprintln!("{}: No rules enabled", "Warning".yellow().bold());
    }
    let pipeline = Pipeline::new(rules, config.global.on_rule_error);
    let log_level = if global.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Error
    };

    if args.stdin {
        return handle_stdin(&pipeline, global, fix, log_level);
    }

    let start = Instant::now();
    let files = file_processor::find_markdown_files(&args.paths, &config)?;
    if files.is_empty() {
        if !global.quiet {
            println!("No markdown files found");
        }
        return Ok(exit_codes::SUCCESS);
    }

    let mut changed = 0;
    let mut written = 0;
    let mut failed = 0;
    let mut io_errors = 0;
    for outcome in file_processor::process_files(&files, &pipeline, fix, log_level) {
        match outcome {
            Ok(outcome) => {
                print_outcome(&outcome, global);
                changed += usize::from(outcome.result.changed());
                written += usize::from(outcome.written);
                failed += usize::from(outcome.result.has_failures());
            }
            Err(err) => {
                eprintln!("{}: {err:#}", "Error".red().bold());
                io_errors += 1;
            }
        }
    }

    if !global.quiet {
        let summary = Summary {
            total: files.len(),
            changed,
            written,
            failed,
        };
        print_summary(&summary, fix, start.elapsed().as_millis());
    }

    Ok(if io_errors > 0 {
        exit_codes::TOOL_ERROR
    } else if failed > 0 || (!fix && changed > 0) {
        exit_codes::CHANGES_NEEDED
    } else {
        exit_codes::SUCCESS
    })
}

fn handle_stdin(pipeline: &Pipeline, global: &GlobalArgs, fix: bool, log_level: LevelFilter) -> Result<i32> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read from stdin")?;

    let outcome = file_processor::process_content(PathBuf::from(STDIN_NAME), &content, pipeline, log_level);
    if fix {
        print_log(&outcome, global);
        print_failures(&outcome);
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(outcome.result.content.as_bytes())
            .context("Failed to write to stdout")?;
        stdout.flush().context("Failed to write to stdout")?;
        return Ok(if outcome.result.has_failures() {
            exit_codes::CHANGES_NEEDED
        } else {
            exit_codes::SUCCESS
        });
    }

    print_outcome(&outcome, global);
    Ok(if outcome.result.changed() || outcome.result.has_failures() {
        exit_codes::CHANGES_NEEDED
    } else {
        exit_codes::SUCCESS
    })
}

fn print_outcome(outcome: &FileOutcome, global: &GlobalArgs) {
    print_log(outcome, global);
    print_failures(outcome);

    if let Some((line, column)) = outcome.first_change {
        let verb = if outcome.written { "Fixed" } else { "Would change" };
        let location = format!("{}:{line}:{column}", outcome.path.display());
        println!("{}: {} [{}]", location.bold(), verb, outcome.result.applied.join(", ").yellow());
    } else if global.verbose {
        println!("{}: {}", outcome.path.display().to_string().bold(), "unchanged".dimmed());
    }
}

fn print_failures(outcome: &FileOutcome) {
    for failure in &outcome.result.failures {
        eprintln!(
            "{}: {}: {}",
            "Error".red().bold(),
            outcome.path.display(),
            failure.error
        );
    }
    if outcome.result.aborted {
        eprintln!(
            "{}: {} left unchanged (use --on-rule-error skip to continue past failing rules)",
            "Warning".yellow().bold(),
            outcome.path.display()
        );
    }
}

fn print_log(outcome: &FileOutcome, global: &GlobalArgs) {
    if !global.verbose {
        return;
    }
    for line in &outcome.log_lines {
        eprintln!("{} {}", format!("{}:", outcome.path.display()).dimmed(), line);
    }
}

struct Summary {
    total: usize,
    changed: usize,
    written: usize,
    failed: usize,
}

fn print_summary(summary: &Summary, fix: bool, duration_ms: u128) {
    let Summary {
        total,
        changed,
        written,
        failed,
    } = *summary;
    let file_text = |n: usize| if n == 1 { "file" } else { "files" };

    if failed > 0 {
        println!(
            "\n{} Rules failed on {} {}",
            "Errors:".red().bold(),
            failed,
            file_text(failed)
        );
    }
    if changed == 0 {
        println!(
            "\n{} No changes needed in {} {} ({}ms)",
            "Success:".green().bold(),
            total,
            file_text(total),
            duration_ms
        );
    } else if fix {
        println!(
            "\n{} Tidied {}/{} {} ({}ms)",
            "Fixed:".green().bold(),
            written,
            total,
            file_text(total),
            duration_ms
        );
    } else {
        println!(
            "\n{} {}/{} {} would change ({}ms)",
            "Issues:".yellow().bold(),
            changed,
            total,
            file_text(total),
            duration_ms
        );
        println!("Run `mdtidy fix` to apply the changes");
    }
}

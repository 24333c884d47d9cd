use mdtidy_lib::config::{Config, ConfigError};
use mdtidy_lib::lint_context::LintContext;
use mdtidy_lib::pipeline::{ErrorPolicy, Pipeline};
use mdtidy_lib::rule::{LintError, LintResult, Rule, RuleCategory, RuleExample};
use mdtidy_lib::rules::{ConsecutiveBlankLines, TrailingSpaces};
use mdtidy_lib::{IgnoreType, RunLog, lint};
use pretty_assertions::assert_eq;

/// Fails on every document
#[derive(Clone)]
struct Broken;

impl Rule for Broken {
    fn name(&self) -> &'static str {
        "broken"
    }
    fn description(&self) -> &'static str {
        "Always fails"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Content
    }
    fn ignore_types(&self) -> &'static [IgnoreType] {
        &[]
    }
    fn apply(&self, _ctx: &LintContext) -> LintResult {
        Err(LintError::RuleFailed {
            rule: self.name().to_string(),
            message: "cannot tidy".to_string(),
        })
    }
    fn examples(&self) -> Vec<RuleExample> {
        Vec::new()
    }
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn from_config(_config: &Config) -> Result<Box<dyn Rule>, ConfigError> {
        Ok(Box::new(Broken))
    }
}

fn rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(TrailingSpaces::default()), Box::new(Broken), Box::new(ConsecutiveBlankLines)]
}

const DOC: &str = "a  \n\n\nb\n";

#[test]
fn test_abort_returns_original_text() {
    let mut log = RunLog::default();
    let result = Pipeline::new(rules(), ErrorPolicy::Abort).run(DOC, &mut log);
    assert_eq!(result.content, DOC);
    assert!(result.aborted);
    assert!(!result.changed());
    assert!(result.applied.is_empty());
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].rule, "broken");
    assert!(log.lines().any(|l| l.contains("cannot tidy")));
}

#[test]
fn test_skip_continues_with_next_rule() {
    let mut log = RunLog::default();
    let result = Pipeline::new(rules(), ErrorPolicy::Skip).run(DOC, &mut log);
    assert_eq!(result.content, "a\n\nb\n");
    assert!(!result.aborted);
    assert_eq!(result.applied, vec!["trailing-spaces", "consecutive-blank-lines"]);
    assert!(result.has_failures());
}

#[test]
fn test_run_log_is_reset_per_run() {
    let mut log = RunLog::new(log::LevelFilter::Trace, 64);
    let pipeline = Pipeline::new(rules(), ErrorPolicy::Skip);
    pipeline.run(DOC, &mut log);
    let first = log.len();
    pipeline.run(DOC, &mut log);
    assert_eq!(log.len(), first);
}

#[test]
fn test_lint_uses_configured_policy() {
    let config = Config::from_toml_str("[global]\non-rule-error = \"skip\"\ndisable = [\"capitalize-headings\"]\n").unwrap();
    let report = lint("# Title.\n\n\n", &config, &mut RunLog::default());
    assert!(report.config_errors.is_empty());
    assert_eq!(report.result.content, "# Title\n\n");
}

#[test]
fn test_lint_runs_rules_in_registry_order() {
    let report = lint("# the end.  \n", &Config::default(), &mut RunLog::default());
    assert_eq!(report.result.content, "# The End\n");
    assert_eq!(
        report.result.applied,
        vec!["capitalize-headings", "remove-trailing-punctuation-in-heading", "trailing-spaces"]
    );
}

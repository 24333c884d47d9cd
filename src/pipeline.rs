//! Sequential application of the enabled rules to one document
//!
//! Each rule sees the output of the previous one, with its own ignore regions resolved
//! against that text. A failing or panicking rule is contained and handled according
//! to the configured `ErrorPolicy`.

use log::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;

use crate::rule::{LintError, LintResult, Rule, apply_rule};
use crate::run_log::RunLog;

/// What the pipeline does when a rule fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop and return the document exactly as it was given
    #[default]
    Abort,
    /// Drop the failing rule's output and continue with the next rule
    Skip,
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(ErrorPolicy::Abort),
            "skip" => Ok(ErrorPolicy::Skip),
            other => Err(format!("unknown rule error policy '{other}' (expected 'abort' or 'skip')")),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Abort => f.write_str("abort"),
            ErrorPolicy::Skip => f.write_str("skip"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFailure {
    pub rule: &'static str,
    pub error: LintError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    pub content: String,
    /// Rules whose output differed from their input, in run order
    pub applied: Vec<&'static str>,
    pub failures: Vec<RuleFailure>,
    /// The run stopped early and `content` is the original document
    pub aborted: bool,
    changed: bool,
}

impl PipelineResult {
    /// Whether the output differs from the input
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[derive(Clone)]
pub struct Pipeline {
    rules: Vec<Box<dyn Rule>>,
    policy: ErrorPolicy,
}

impl Pipeline {
    pub fn new(rules: Vec<Box<dyn Rule>>, policy: ErrorPolicy) -> Self {
        Self { rules, policy }
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Run every rule in order over `content`. The run log is cleared first.
    pub fn run(&self, content: &str, run_log: &mut RunLog) -> PipelineResult {
        run_log.clear();
        run_log.record(
            Level::Debug,
            format!("running {} rule(s) with policy '{}'", self.rules.len(), self.policy),
        );

        let mut current = content.to_string();
        let mut applied = Vec::new();
        let mut failures = Vec::new();

        for rule in &self.rules {
            let name = rule.name();
            run_log.record(Level::Trace, format!("[{name}] start"));

            match run_rule(rule.as_ref(), &current) {
                Ok(output) => {
                    if output != current {
                        run_log.record(Level::Info, format!("[{name}] changed the document"));
                        applied.push(name);
                        current = output;
                    } else {
                        run_log.record(Level::Debug, format!("[{name}] no change"));
                    }
                }
                Err(error) => {
                    run_log.record(Level::Error, error.to_string());
                    failures.push(RuleFailure { rule: name, error });
                    if self.policy == ErrorPolicy::Abort {
                        run_log.record(Level::Warn, "aborting run; document left unchanged");
                        return PipelineResult {
                            content: content.to_string(),
                            applied: Vec::new(),
                            failures,
                            aborted: true,
                            changed: false,
                        };
                    }
                    run_log.record(Level::Warn, format!("[{name}] skipped"));
                }
            }
        }

        let changed = current != content;
        PipelineResult {
            content: current,
            applied,
            failures,
            aborted: false,
            changed,
        }
    }
}

/// Apply one rule, turning a panic into `LintError::Panicked`
fn run_rule(rule: &dyn Rule, content: &str) -> LintResult {
    match panic::catch_unwind(AssertUnwindSafe(|| apply_rule(rule, content))) {
        Ok(result) => result,
        Err(payload) => Err(LintError::Panicked {
            rule: rule.name().to_string(),
            message: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

pub mod config;
pub mod exit_codes;
pub mod lint_context;
pub mod pipeline;
pub mod rule;
pub mod rule_config_serde;
pub mod rules;
pub mod run_log;
pub mod utils;

pub use crate::config::{Config, ConfigError};
pub use crate::lint_context::LintContext;
pub use crate::pipeline::{ErrorPolicy, Pipeline, PipelineResult, RuleFailure};
pub use crate::rule::{LintError, Rule, RuleCategory, apply_rule};
pub use crate::run_log::RunLog;
pub use crate::utils::ignore_regions::{IgnoreType, MaskedRanges, masked_ranges};

use crate::rules::{RuleSet, build_rules};

/// Outcome of tidying one document
#[derive(Debug)]
pub struct LintReport {
    pub result: PipelineResult,
    /// Rules left out of the run because their configuration is invalid
    pub config_errors: Vec<ConfigError>,
}

/// Tidy `content` with every rule `config` enables.
///
/// Rules with an invalid table are not run and are reported in `config_errors`; the
/// remaining rules still run, under the configured error policy.
pub fn lint(content: &str, config: &Config, run_log: &mut RunLog) -> LintReport {
    let RuleSet { rules, errors } = build_rules(config);
    let pipeline = Pipeline::new(rules, config.global.on_rule_error);
    LintReport {
        result: pipeline.run(content, run_log),
        config_errors: errors,
    }
}

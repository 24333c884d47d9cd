/// Rule: consecutive blank lines
///
/// Collapses runs of blank lines into a single blank line.
use crate::config::{Config, ConfigError};
use crate::lint_context::LintContext;
use crate::rule::{LintResult, Rule, RuleCategory, RuleExample};
use crate::rule_config_serde::{RuleConfig, load_rule_config};
use crate::utils::fix_utils::{Edit, apply_edits};
use crate::utils::ignore_regions::IgnoreType;
use serde::{Deserialize, Serialize};

const IGNORE_TYPES: &[IgnoreType] = &[IgnoreType::Code, IgnoreType::Math, IgnoreType::Yaml];

/// The rule has no options; the struct only rejects unknown keys
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConsecutiveBlankLinesConfig {}

impl RuleConfig for ConsecutiveBlankLinesConfig {
    const RULE_NAME: &'static str = "consecutive-blank-lines";
}

#[derive(Debug, Clone, Default)]
pub struct ConsecutiveBlankLines;

impl Rule for ConsecutiveBlankLines {
    fn name(&self) -> &'static str {
        ConsecutiveBlankLinesConfig::RULE_NAME
    }

    fn description(&self) -> &'static str {
        "There should be at most one consecutive blank line"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Spacing
    }

    fn ignore_types(&self) -> &'static [IgnoreType] {
        IGNORE_TYPES
    }

    fn apply(&self, ctx: &LintContext) -> LintResult {
        let mut edits = Vec::new();
        let mut prev_blank = false;

        for line in ctx.lines() {
            let blank = line.is_blank() && !ctx.overlaps_masked(&(line.start..line.end));
            if blank && prev_blank {
                edits.push(Edit::delete(line.start..line.end));
            }
            prev_blank = blank;
        }

        Ok(apply_edits(ctx.content, edits))
    }

    fn examples(&self) -> Vec<RuleExample> {
        vec![RuleExample::new(
            "Runs of blank lines become one blank line",
            "Some text\n\n\nSome more text\n\n\n\nText again",
            "Some text\n\nSome more text\n\nText again",
        )]
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn from_config(config: &Config) -> Result<Box<dyn Rule>, ConfigError>
    where
        Self: Sized,
    {
        load_rule_config::<ConsecutiveBlankLinesConfig>(config)?;
        Ok(Box::new(Self))
    }
}

/// Rule: remove multiple spaces
///
/// Replaces runs of spaces between two non-whitespace characters with a single space.
/// Indentation and trailing spaces are left to other rules.
use crate::config::{Config, ConfigError};
use crate::lint_context::LintContext;
use crate::rule::{LintResult, Rule, RuleCategory, RuleExample};
use crate::rule_config_serde::{RuleConfig, load_rule_config};
use crate::utils::fix_utils::{Edit, apply_edits};
use crate::utils::ignore_regions::IgnoreType;
use crate::utils::regex_cache::MULTIPLE_SPACES;
use serde::{Deserialize, Serialize};

const IGNORE_TYPES: &[IgnoreType] = &[
    IgnoreType::Code,
    IgnoreType::InlineCode,
    IgnoreType::Math,
    IgnoreType::InlineMath,
    IgnoreType::Yaml,
    IgnoreType::Link,
    IgnoreType::WikiLink,
    IgnoreType::Tag,
    IgnoreType::Table,
];

/// The rule has no options; the struct only rejects unknown keys
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RemoveMultipleSpacesConfig {}

impl RuleConfig for RemoveMultipleSpacesConfig {
    const RULE_NAME: &'static str = "remove-multiple-spaces";
}

#[derive(Debug, Clone, Default)]
pub struct RemoveMultipleSpaces;

impl Rule for RemoveMultipleSpaces {
    fn name(&self) -> &'static str {
        RemoveMultipleSpacesConfig::RULE_NAME
    }

    fn description(&self) -> &'static str {
        "Removes two or more consecutive spaces between words, ignoring indentation and trailing spaces"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Content
    }

    fn ignore_types(&self) -> &'static [IgnoreType] {
        IGNORE_TYPES
    }

    fn apply(&self, ctx: &LintContext) -> LintResult {
        let mut edits = Vec::new();

        for line in ctx.lines() {
            for run in MULTIPLE_SPACES.find_iter(line.text) {
                let before = line.text[..run.start()].chars().next_back();
                let after = line.text[run.end()..].chars().next();
                let between_words = matches!((before, after), (Some(b), Some(a)) if !b.is_whitespace() && !a.is_whitespace());
                if !between_words {
                    continue;
                }
                let range = line.start + run.start()..line.start + run.end();
                if !ctx.overlaps_masked(&range) {
                    edits.push(Edit::new(range, " "));
                }
            }
        }

        Ok(apply_edits(ctx.content, edits))
    }

    fn examples(&self) -> Vec<RuleExample> {
        vec![RuleExample::new(
            "Removes double spaces from `Lorem  ipsum   dolor  sit amet.`",
            "Lorem  ipsum   dolor  sit amet.\n  Indented and `code  span`.",
            "Lorem ipsum dolor sit amet.\n  Indented and `code  span`.",
        )]
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn from_config(config: &Config) -> Result<Box<dyn Rule>, ConfigError>
    where
        Self: Sized,
    {
        load_rule_config::<RemoveMultipleSpacesConfig>(config)?;
        Ok(Box::new(Self))
    }
}

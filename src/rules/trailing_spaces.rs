/// Rule: trailing spaces
///
/// Removes spaces and tabs at the end of lines, optionally keeping a two-space hard
/// line break.
use crate::config::{Config, ConfigError};
use crate::lint_context::LintContext;
use crate::rule::{LintResult, OptionDescriptor, OptionKind, OptionValue, Rule, RuleCategory, RuleExample};
use crate::rule_config_serde::{RuleConfig, config_section, load_rule_config};
use crate::utils::StrExt;
use crate::utils::fix_utils::{Edit, apply_edits};
use crate::utils::ignore_regions::IgnoreType;

mod trailing_spaces_config;
pub use trailing_spaces_config::TrailingSpacesConfig;

const IGNORE_TYPES: &[IgnoreType] = &[IgnoreType::Code, IgnoreType::Math, IgnoreType::Yaml];

const HARD_BREAK: &str = "  ";

#[derive(Debug, Clone, Default)]
pub struct TrailingSpaces {
    config: TrailingSpacesConfig,
}

impl TrailingSpaces {
    pub fn new(two_space_line_break: bool) -> Self {
        Self {
            config: TrailingSpacesConfig { two_space_line_break },
        }
    }

    pub fn from_config_struct(config: TrailingSpacesConfig) -> Self {
        Self { config }
    }
}

impl Rule for TrailingSpaces {
    fn name(&self) -> &'static str {
        TrailingSpacesConfig::RULE_NAME
    }

    fn description(&self) -> &'static str {
        "Removes extra spaces after every line"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Spacing
    }

    fn ignore_types(&self) -> &'static [IgnoreType] {
        IGNORE_TYPES
    }

    fn apply(&self, ctx: &LintContext) -> LintResult {
        let mut edits = Vec::new();

        for line in ctx.lines() {
            let trailing = line.text.trailing_whitespace_len();
            if trailing == 0 {
                continue;
            }
            let content_end = line.start + line.text.len();
            let range = content_end - trailing..content_end;
            if ctx.overlaps_masked(&range) {
                continue;
            }

            let is_hard_break = self.config.two_space_line_break
                && !line.is_blank()
                && line.text.trailing_spaces() == trailing
                && trailing >= HARD_BREAK.len();
            if !is_hard_break {
                edits.push(Edit::delete(range));
            } else if trailing > HARD_BREAK.len() {
                edits.push(Edit::new(range, HARD_BREAK));
            }
        }

        Ok(apply_edits(ctx.content, edits))
    }

    fn examples(&self) -> Vec<RuleExample> {
        vec![
            RuleExample::new(
                "Removes trailing spaces and tabs",
                "# H1   \nLine with trailing spaces and tabs.    \t\t",
                "# H1\nLine with trailing spaces and tabs.",
            ),
            RuleExample::new(
                "With `two-space-line-break = true`",
                "# H1\nLine with trailing spaces and tabs.    \nLine ending in a single space. \n",
                "# H1\nLine with trailing spaces and tabs.  \nLine ending in a single space.\n",
            )
            .with_options("two-space-line-break = true"),
        ]
    }

    fn options(&self) -> Vec<OptionDescriptor> {
        vec![OptionDescriptor {
            name: "two-space-line-break",
            kind: OptionKind::Boolean,
            default: OptionValue::Boolean(false),
            description: "Ignore two spaces followed by a line break (\"Two-space Rule\")",
        }]
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn default_config_section(&self) -> Option<(String, toml::Value)> {
        config_section(self.name(), &self.config)
    }

    fn from_config(config: &Config) -> Result<Box<dyn Rule>, ConfigError>
    where
        Self: Sized,
    {
        let rule_config = load_rule_config::<TrailingSpacesConfig>(config)?;
        Ok(Box::new(Self::from_config_struct(rule_config)))
    }
}

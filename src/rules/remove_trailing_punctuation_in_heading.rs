/// Rule: remove trailing punctuation in headings
///
/// Strips the last character of an ATX heading's text when it is one of the configured
/// punctuation marks. Trailing whitespace and closing `#` markers are kept.
use crate::config::{Config, ConfigError};
use crate::lint_context::LintContext;
use crate::rule::{LintResult, OptionDescriptor, OptionKind, OptionValue, Rule, RuleCategory, RuleExample};
use crate::rule_config_serde::{RuleConfig, config_section, load_rule_config};
use crate::rules::heading_utils::{HeadingLine, atx_headings};
use crate::utils::fix_utils::{Edit, apply_edits};
use crate::utils::ignore_regions::IgnoreType;
use crate::utils::regex_cache::HTML_ENTITY_AT_END;

mod trailing_punctuation_config;
pub use trailing_punctuation_config::{DEFAULT_PUNCTUATION, TrailingPunctuationConfig};

const IGNORE_TYPES: &[IgnoreType] = &[IgnoreType::Code, IgnoreType::Math, IgnoreType::Yaml];

#[derive(Debug, Clone, Default)]
pub struct RemoveTrailingPunctuationInHeading {
    config: TrailingPunctuationConfig,
}

impl RemoveTrailingPunctuationInHeading {
    pub fn new(punctuation: impl Into<String>) -> Self {
        Self {
            config: TrailingPunctuationConfig {
                punctuation_to_remove: punctuation.into(),
            },
        }
    }

    pub fn from_config_struct(config: TrailingPunctuationConfig) -> Self {
        Self { config }
    }

    /// Deletion of the heading's last punctuation mark, if it has one to remove
    fn trailing_punctuation_edit(&self, heading: &HeadingLine<'_>) -> Option<Edit> {
        let trimmed = heading.text.trim_end();
        if trimmed.is_empty() || HTML_ENTITY_AT_END.is_match(trimmed) {
            return None;
        }

        let last = trimmed.chars().next_back()?;
        if !self.config.punctuation_to_remove.contains(last) {
            return None;
        }

        let start = heading.text_start + trimmed.len() - last.len_utf8();
        Some(Edit::delete(start..start + last.len_utf8()))
    }
}

impl Rule for RemoveTrailingPunctuationInHeading {
    fn name(&self) -> &'static str {
        TrailingPunctuationConfig::RULE_NAME
    }

    fn description(&self) -> &'static str {
        "Removes the specified punctuation from the end of headings, leaving HTML entity references alone"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Heading
    }

    fn ignore_types(&self) -> &'static [IgnoreType] {
        IGNORE_TYPES
    }

    fn apply(&self, ctx: &LintContext) -> LintResult {
        if self.config.punctuation_to_remove.is_empty() {
            return Ok(ctx.content.to_string());
        }

        let edits: Vec<Edit> = atx_headings(ctx.content)
            .iter()
            .filter(|heading| !ctx.overlaps_masked(&heading.line_range()))
            .filter_map(|heading| self.trailing_punctuation_edit(heading))
            .collect();

        Ok(apply_edits(ctx.content, edits))
    }

    fn examples(&self) -> Vec<RuleExample> {
        vec![
            RuleExample::new(
                "Removes punctuation from the end of a heading",
                "# Heading ends in a period.\n## Other heading ends in an exclamation mark! ##",
                "# Heading ends in a period\n## Other heading ends in an exclamation mark ##",
            ),
            RuleExample::new(
                "HTML Entities at the end of a heading is ignored",
                "# Heading 1\n## Heading &amp;",
                "# Heading 1\n## Heading &amp;",
            ),
            RuleExample::new(
                "Removes punctuation from the end of a heading when followed by whitespace",
                "# Heading 1!  \n## Heading 2.\t",
                "# Heading 1  \n## Heading 2\t",
            ),
            RuleExample::new(
                "Only the configured characters are removed",
                "# Heading.\n# Heading!",
                "# Heading.\n# Heading",
            )
            .with_options("punctuation-to-remove = \"!\""),
        ]
    }

    fn options(&self) -> Vec<OptionDescriptor> {
        vec![OptionDescriptor {
            name: "punctuation-to-remove",
            kind: OptionKind::Text,
            default: OptionValue::Text(DEFAULT_PUNCTUATION.to_string()),
            description: "The trailing punctuation to remove from the headings in the file",
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
        let rule_config = load_rule_config::<TrailingPunctuationConfig>(config)?;
        Ok(Box::new(Self::from_config_struct(rule_config)))
    }
}

use crate::rule_config_serde::RuleConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PUNCTUATION: &str = ".,;:!。，；：！";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TrailingPunctuationConfig {
    /// Characters stripped from the end of heading text; empty disables the rule
    #[serde(default = "default_punctuation")]
    pub punctuation_to_remove: String,
}

impl Default for TrailingPunctuationConfig {
    fn default() -> Self {
        Self {
            punctuation_to_remove: default_punctuation(),
        }
    }
}

fn default_punctuation() -> String {
    DEFAULT_PUNCTUATION.to_string()
}

impl RuleConfig for TrailingPunctuationConfig {
    const RULE_NAME: &'static str = "remove-trailing-punctuation-in-heading";
}

use crate::rule_config_serde::RuleConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How heading text is cased
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadingCaseStyle {
    #[default]
    TitleCase,
    AllCaps,
    FirstLetter,
}

impl HeadingCaseStyle {
    pub const CHOICES: &'static [&'static str] = &["title-case", "all-caps", "first-letter"];

    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingCaseStyle::TitleCase => "title-case",
            HeadingCaseStyle::AllCaps => "all-caps",
            HeadingCaseStyle::FirstLetter => "first-letter",
        }
    }
}

impl fmt::Display for HeadingCaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_IGNORE_WORDS: &[&str] = &[
    "macOS",
    "iOS",
    "iPhone",
    "iPad",
    "JavaScript",
    "TypeScript",
    "AppleScript",
    "I",
];

pub const DEFAULT_LOWERCASE_WORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "nor", "for", "so", "yet", "as", "at", "by", "in", "of", "off", "on",
    "per", "to", "up", "via", "vs", "vs.", "with", "from", "into", "onto", "upon", "than",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CapitalizeHeadingsConfig {
    #[serde(default)]
    pub style: HeadingCaseStyle,

    /// Leave words alone that already have a capital letter after their first letter
    #[serde(default = "default_ignore_cased_words")]
    pub ignore_cased_words: bool,

    /// Words always written exactly as listed
    #[serde(default = "default_ignore_words")]
    pub ignore_words: Vec<String>,

    /// Words kept lowercase in title case unless they start the heading
    #[serde(default = "default_lowercase_words")]
    pub lowercase_words: Vec<String>,
}

impl Default for CapitalizeHeadingsConfig {
    fn default() -> Self {
        Self {
            style: HeadingCaseStyle::default(),
            ignore_cased_words: default_ignore_cased_words(),
            ignore_words: default_ignore_words(),
            lowercase_words: default_lowercase_words(),
        }
    }
}

fn default_ignore_cased_words() -> bool {
    true
}

pub fn default_ignore_words() -> Vec<String> {
    DEFAULT_IGNORE_WORDS.iter().map(|w| w.to_string()).collect()
}

pub fn default_lowercase_words() -> Vec<String> {
    DEFAULT_LOWERCASE_WORDS.iter().map(|w| w.to_string()).collect()
}

impl RuleConfig for CapitalizeHeadingsConfig {
    const RULE_NAME: &'static str = "capitalize-headings";
}

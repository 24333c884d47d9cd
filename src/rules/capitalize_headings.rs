/// Rule: capitalize headings
///
/// Re-cases the words of ATX headings in title case, all caps, or first-letter style.
/// Words inside code spans, math, links, tags or HTML keep their spelling.
use crate::config::{Config, ConfigError};
use crate::lint_context::LintContext;
use crate::rule::{LintResult, OptionDescriptor, OptionKind, OptionValue, Rule, RuleCategory, RuleExample};
use crate::rule_config_serde::{RuleConfig, config_section, load_rule_config};
use crate::rules::heading_utils::atx_headings;
use crate::utils::fix_utils::{Edit, apply_edits};
use crate::utils::ignore_regions::IgnoreType;

mod capitalize_headings_config;
pub use capitalize_headings_config::{CapitalizeHeadingsConfig, HeadingCaseStyle};
use capitalize_headings_config::{default_ignore_words, default_lowercase_words};

const IGNORE_TYPES: &[IgnoreType] = &[
    IgnoreType::Code,
    IgnoreType::InlineCode,
    IgnoreType::Math,
    IgnoreType::InlineMath,
    IgnoreType::Yaml,
    IgnoreType::Link,
    IgnoreType::WikiLink,
    IgnoreType::Html,
    IgnoreType::Tag,
];

#[derive(Debug, Clone, Default)]
pub struct CapitalizeHeadings {
    config: CapitalizeHeadingsConfig,
}

impl CapitalizeHeadings {
    pub fn new(style: HeadingCaseStyle) -> Self {
        Self {
            config: CapitalizeHeadingsConfig {
                style,
                ..Default::default()
            },
        }
    }

    pub fn from_config_struct(config: CapitalizeHeadingsConfig) -> Self {
        Self { config }
    }

    fn recase(&self, index: usize, word: &str) -> String {
        let (prefix, core, suffix) = split_core(word);
        if core.is_empty() {
            return word.to_string();
        }

        let new_core = match self.config.style {
            HeadingCaseStyle::TitleCase => self.title_case_word(index, core),
            HeadingCaseStyle::AllCaps => self.listed_spelling(core).unwrap_or_else(|| core.to_uppercase()),
            HeadingCaseStyle::FirstLetter if index == 0 => upper_first(core, false),
            HeadingCaseStyle::FirstLetter => core.to_string(),
        };
        format!("{prefix}{new_core}{suffix}")
    }

    fn title_case_word(&self, index: usize, core: &str) -> String {
        if let Some(listed) = self.listed_spelling(core) {
            return listed;
        }
        if self.config.ignore_cased_words && core.chars().skip(1).any(char::is_uppercase) {
            return core.to_string();
        }
        let lower = core.to_lowercase();
        if index > 0 && self.config.lowercase_words.iter().any(|w| w.to_lowercase() == lower) {
            return lower;
        }
        upper_first(core, true)
    }

    /// The `ignore-words` spelling of `core`, compared case-insensitively
    fn listed_spelling(&self, core: &str) -> Option<String> {
        let lower = core.to_lowercase();
        self.config
            .ignore_words
            .iter()
            .find(|w| w.to_lowercase() == lower)
            .cloned()
    }
}

/// Whitespace-separated words of `text` with their byte offsets
fn words(text: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                words.push((s, &text[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        words.push((s, &text[s..]));
    }
    words
}

/// Split a word into leading punctuation, the alphanumeric core, and trailing punctuation
fn split_core(word: &str) -> (&str, &str, &str) {
    let Some(start) = word.find(char::is_alphanumeric) else {
        return (word, "", "");
    };
    let end = word
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(word.len());
    (&word[..start], &word[start..end], &word[end..])
}

fn upper_first(core: &str, lower_rest: bool) -> String {
    let mut chars = core.chars();
    match chars.next() {
        Some(first) => {
            let rest: String = chars.collect();
            let rest = if lower_rest { rest.to_lowercase() } else { rest };
            format!("{}{rest}", first.to_uppercase())
        }
        None => String::new(),
    }
}

impl Rule for CapitalizeHeadings {
    fn name(&self) -> &'static str {
        CapitalizeHeadingsConfig::RULE_NAME
    }

    fn description(&self) -> &'static str {
        "Headings should be formatted with capitalization"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Heading
    }

    fn ignore_types(&self) -> &'static [IgnoreType] {
        IGNORE_TYPES
    }

    fn apply(&self, ctx: &LintContext) -> LintResult {
        let mut edits = Vec::new();

        for heading in atx_headings(ctx.content) {
            for (index, (offset, word)) in words(heading.text).into_iter().enumerate() {
                let start = heading.text_start + offset;
                let range = start..start + word.len();
                if ctx.overlaps_masked(&range) {
                    continue;
                }
                let recased = self.recase(index, word);
                if recased != word {
                    edits.push(Edit::new(range, recased));
                }
            }
        }

        Ok(apply_edits(ctx.content, edits))
    }

    fn examples(&self) -> Vec<RuleExample> {
        vec![
            RuleExample::new(
                "The first letter of each word is capitalized, short connecting words are lowercased",
                "# this is a heading 1\n## this is a heading 2",
                "# This Is a Heading 1\n## This Is a Heading 2",
            ),
            RuleExample::new(
                "Listed words keep their spelling",
                "# using macos and javascript on an iphone",
                "# Using macOS and JavaScript on an iPhone",
            ),
            RuleExample::new(
                "All caps",
                "# this is a heading 1\n## this is a heading 2",
                "# THIS IS A HEADING 1\n## THIS IS A HEADING 2",
            )
            .with_options("style = \"all-caps\""),
            RuleExample::new(
                "First letter only; code spans are left alone",
                "# `code` first\n## this is a heading",
                "# `code` first\n## This is a heading",
            )
            .with_options("style = \"first-letter\""),
        ]
    }

    fn options(&self) -> Vec<OptionDescriptor> {
        vec![
            OptionDescriptor {
                name: "style",
                kind: OptionKind::Dropdown(HeadingCaseStyle::CHOICES),
                default: OptionValue::Text(HeadingCaseStyle::default().to_string()),
                description: "The style of capitalization to use",
            },
            OptionDescriptor {
                name: "ignore-cased-words",
                kind: OptionKind::Boolean,
                default: OptionValue::Boolean(true),
                description: "Only apply title case style to words that are all lowercase",
            },
            OptionDescriptor {
                name: "ignore-words",
                kind: OptionKind::TextList,
                default: OptionValue::TextList(default_ignore_words()),
                description: "Words to write exactly as listed",
            },
            OptionDescriptor {
                name: "lowercase-words",
                kind: OptionKind::TextList,
                default: OptionValue::TextList(default_lowercase_words()),
                description: "Words to keep lowercase in title case, except at the start of a heading",
            },
        ]
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
        let rule_config = load_rule_config::<CapitalizeHeadingsConfig>(config)?;
        Ok(Box::new(Self::from_config_struct(rule_config)))
    }
}

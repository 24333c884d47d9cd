pub mod heading_utils;

mod capitalize_headings;
mod consecutive_blank_lines;
mod remove_multiple_spaces;
mod remove_trailing_punctuation_in_heading;
mod trailing_spaces;

pub use capitalize_headings::{CapitalizeHeadings, CapitalizeHeadingsConfig, HeadingCaseStyle};
pub use consecutive_blank_lines::ConsecutiveBlankLines;
pub use remove_multiple_spaces::RemoveMultipleSpaces;
pub use remove_trailing_punctuation_in_heading::{
    DEFAULT_PUNCTUATION, RemoveTrailingPunctuationInHeading, TrailingPunctuationConfig,
};
pub use trailing_spaces::{TrailingSpaces, TrailingSpacesConfig};

use crate::config::{Config, ConfigError, normalize_key};
use crate::rule::{Rule, RuleCategory};

/// Compile-time entry of the rule registry
pub struct RuleDescriptor {
    pub name: &'static str,
    pub category: RuleCategory,
    pub build: fn(&Config) -> Result<Box<dyn Rule>, ConfigError>,
}

impl RuleDescriptor {
    /// Build the rule from the body of its TOML table (e.g. an example's options)
    pub fn build_with_options(&self, options: &str) -> Result<Box<dyn Rule>, ConfigError> {
        let config = Config::from_toml_str(&format!("[{}]\n{options}\n", self.name))?;
        (self.build)(&config)
    }
}

impl std::fmt::Debug for RuleDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleDescriptor")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish()
    }
}

macro_rules! rule {
    ($ty:ty, $name:expr, $category:expr) => {
        RuleDescriptor {
            name: $name,
            category: $category,
            build: <$ty as Rule>::from_config,
        }
    };
}

/// Ordered by category, then registration order
static REGISTRY: &[RuleDescriptor] = &[
    rule!(CapitalizeHeadings, "capitalize-headings", RuleCategory::Heading),
    rule!(
        RemoveTrailingPunctuationInHeading,
        "remove-trailing-punctuation-in-heading",
        RuleCategory::Heading
    ),
    rule!(RemoveMultipleSpaces, "remove-multiple-spaces", RuleCategory::Content),
    rule!(ConsecutiveBlankLines, "consecutive-blank-lines", RuleCategory::Spacing),
    rule!(TrailingSpaces, "trailing-spaces", RuleCategory::Spacing),
];

pub fn registry() -> &'static [RuleDescriptor] {
    REGISTRY
}

pub fn rule_names() -> Vec<&'static str> {
    REGISTRY.iter().map(|d| d.name).collect()
}

/// Look a rule up by name; camelCase and snake_case spellings are accepted
pub fn find_rule(name: &str) -> Option<&'static RuleDescriptor> {
    let name = normalize_key(name);
    REGISTRY.iter().find(|d| d.name == name)
}

/// Every rule, configured from `config` where its table is valid and with defaults
/// otherwise. Used for listings and documentation, never for a run.
pub fn all_rules(config: &Config) -> Vec<Box<dyn Rule>> {
    let defaults = Config::default();
    REGISTRY
        .iter()
        .filter_map(|descriptor| {
            let built = (descriptor.build)(config).or_else(|err| {
                log::debug!("Using defaults for {}: {err}", descriptor.name);
                (descriptor.build)(&defaults)
            });
            match built {
                Ok(rule) => Some(rule),
                Err(err) => {
                    log::error!("Rule {} cannot be built: {err}", descriptor.name);
                    None
                }
            }
        })
        .collect()
}

/// The enabled rules of a configuration, plus the errors of rules that were left out
pub struct RuleSet {
    pub rules: Vec<Box<dyn Rule>>,
    pub errors: Vec<ConfigError>,
}

/// Build the enabled rules in registry order.
///
/// A rule whose table fails validation is not run; its error is recorded and the
/// remaining rules are still built.
pub fn build_rules(config: &Config) -> RuleSet {
    for unknown in config.unknown_rule_names(&rule_names()) {
        log::warn!("Unknown rule '{unknown}' in configuration");
    }

    let mut rules = Vec::new();
    let mut errors = Vec::new();
    for descriptor in REGISTRY.iter().filter(|d| config.is_rule_enabled(d.name)) {
        match (descriptor.build)(config) {
            Ok(rule) => rules.push(rule),
            Err(err) => {
                log::warn!("{err}");
                errors.push(err);
            }
        }
    }
    RuleSet { rules, errors }
}

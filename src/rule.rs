//!
//! This module defines the Rule trait and related types for implementing tidy rules in mdtidy.
//! Includes rule categories, the example catalog and option descriptors every rule publishes.

use dyn_clone::DynClone;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::lint_context::LintContext;
use crate::utils::ignore_regions::IgnoreType;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LintError {
    #[error("rule '{rule}' failed: {message}")]
    RuleFailed { rule: String, message: String },
    #[error("rule '{rule}' panicked: {message}")]
    Panicked { rule: String, message: String },
}

impl LintError {
    /// Name of the rule that produced the error
    pub fn rule(&self) -> &str {
        match self {
            LintError::RuleFailed { rule, .. } | LintError::Panicked { rule, .. } => rule,
        }
    }
}

pub type LintResult = Result<String, LintError>;

/// Type of rule, used to order the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RuleCategory {
    Yaml,
    Heading,
    Footnote,
    Content,
    Spacing,
    Paste,
}

impl RuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Yaml => "yaml",
            RuleCategory::Heading => "heading",
            RuleCategory::Footnote => "footnote",
            RuleCategory::Content => "content",
            RuleCategory::Spacing => "spacing",
            RuleCategory::Paste => "paste",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A documented before/after pair. `before` must transform into `after` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleExample {
    pub description: &'static str,
    pub before: &'static str,
    pub after: &'static str,
    /// Body of the rule's TOML table used for this example, if not the defaults
    pub options: Option<&'static str>,
}

impl RuleExample {
    pub fn new(description: &'static str, before: &'static str, after: &'static str) -> Self {
        Self {
            description,
            before,
            after,
            options: None,
        }
    }

    pub fn with_options(mut self, options: &'static str) -> Self {
        self.options = Some(options);
        self
    }
}

/// Kind of a configuration option, as a settings UI would present it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Text,
    Boolean,
    Dropdown(&'static [&'static str]),
    TextList,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Text => f.write_str("text"),
            OptionKind::Boolean => f.write_str("boolean"),
            OptionKind::Dropdown(choices) => write!(f, "one of {}", choices.join(" | ")),
            OptionKind::TextList => f.write_str("list of text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Text(String),
    Boolean(bool),
    TextList(Vec<String>),
}

impl OptionValue {
    pub fn to_toml(&self) -> toml::Value {
        match self {
            OptionValue::Text(s) => toml::Value::String(s.clone()),
            OptionValue::Boolean(b) => toml::Value::Boolean(*b),
            OptionValue::TextList(items) => {
                toml::Value::Array(items.iter().cloned().map(toml::Value::String).collect())
            }
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_toml())
    }
}

/// Typed description of one configuration key of a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    /// TOML key, as it appears in the rule's table
    pub name: &'static str,
    pub kind: OptionKind,
    pub default: OptionValue,
    pub description: &'static str,
}

pub trait Rule: DynClone + Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn category(&self) -> RuleCategory;

    /// Regions of the document this rule must leave untouched
    fn ignore_types(&self) -> &'static [IgnoreType];

    /// Rewrite the document. Content overlapping `ctx.masked` is left as is.
    fn apply(&self, ctx: &LintContext) -> LintResult;

    fn examples(&self) -> Vec<RuleExample>;

    fn options(&self) -> Vec<OptionDescriptor> {
        Vec::new()
    }

    fn as_any(&self) -> &dyn std::any::Any;

    /// Returns the rule name and default config table if the rule has config.
    fn default_config_section(&self) -> Option<(String, toml::Value)> {
        None
    }

    /// Factory: create a rule from config (if present), or use defaults.
    fn from_config(config: &Config) -> Result<Box<dyn Rule>, ConfigError>
    where
        Self: Sized;
}

// Implement the cloning logic for the Rule trait object
dyn_clone::clone_trait_object!(Rule);

/// Resolve the rule's ignore regions for `content` and apply it.
pub fn apply_rule(rule: &dyn Rule, content: &str) -> LintResult {
    let ctx = LintContext::new(content, rule.ignore_types());
    rule.apply(&ctx)
}

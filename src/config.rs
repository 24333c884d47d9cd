//!
//! This module defines configuration structures, loading and discovery logic for mdtidy.
//! Keys are normalized on load so `punctuationToRemove`, `punctuation_to_remove` and
//! `punctuation-to-remove` all address the same option.

use crate::pipeline::ErrorPolicy;
use crate::rule::Rule;
use crate::rule_config_serde::{ENABLED_KEY, json_to_toml_value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Configuration file names, in order of precedence within one directory
pub const CONFIG_FILES: &[&str] = &[".mdtidy.toml", "mdtidy.toml"];

const MAX_DISCOVERY_DEPTH: usize = 100;

/// Special `disable` entry switching off every rule not named in `enable`
pub const ALL_RULES: &str = "all";

const GLOBAL_KEYS: &[&str] = &["enable", "disable", "exclude", "on-rule-error", "respect-gitignore"];

/// Normalizes configuration keys (rule names, option names) to lowercase kebab-case.
///
/// `camelCase` and `snake_case` both become `kebab-case`.
pub fn normalize_key(key: &str) -> String {
    let mut normalized = String::with_capacity(key.len() + 4);
    let mut prev_lower_or_digit = false;
    for c in key.trim().chars() {
        if c == '_' || c == '-' {
            normalized.push('-');
            prev_lower_or_digit = false;
        } else if c.is_uppercase() {
            if prev_lower_or_digit {
                normalized.push('-');
            }
            normalized.extend(c.to_lowercase());
            prev_lower_or_digit = false;
        } else {
            normalized.push(c);
            prev_lower_or_digit = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    normalized
}

/// Represents a rule-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RuleConfig {
    /// Configuration values for the rule
    #[serde(flatten)]
    pub values: BTreeMap<String, toml::Value>,
}

/// Represents the complete configuration loaded from .mdtidy.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Global configuration options
    #[serde(default)]
    pub global: GlobalConfig,

    /// Rule-specific configurations, keyed by normalized rule name
    #[serde(flatten)]
    pub rules: BTreeMap<String, RuleConfig>,
}

/// Global configuration options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Rules to run exclusively; empty means all rules
    pub enable: Vec<String>,

    /// Disabled rules
    pub disable: Vec<String>,

    /// Files to exclude (glob patterns)
    pub exclude: Vec<String>,

    /// What to do when a rule fails
    pub on_rule_error: ErrorPolicy,

    /// Respect .gitignore files when scanning directories
    pub respect_gitignore: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            enable: Vec::new(),
            disable: Vec::new(),
            exclude: Vec::new(),
            on_rule_error: ErrorPolicy::default(),
            respect_gitignore: true,
        }
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    Io { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A rule's table does not match the rule's options
    #[error("Invalid configuration for rule '{rule}': {message}")]
    InvalidRuleConfig { rule: String, message: String },

    /// Configuration file already exists
    #[error("Configuration file already exists at {path}")]
    AlreadyExists { path: String },
}

impl Config {
    /// Parse configuration from TOML text, normalizing rule names and keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = content.parse().map_err(|e: toml::de::Error| ConfigError::Parse(e.to_string()))?;
        let mut config = Config::default();

        for (key, value) in table {
            let name = normalize_key(&key);
            match (name.as_str(), value) {
                ("global", toml::Value::Table(global)) => {
                    config.global = parse_global(global)?;
                }
                ("global", _) => return Err(ConfigError::Parse("[global] must be a table".to_string())),
                (_, toml::Value::Table(rule_table)) => {
                    let entry = config.rules.entry(name).or_default();
                    for (option, option_value) in rule_table {
                        entry.values.insert(normalize_key(&option), option_value);
                    }
                }
                (_, _) => log::warn!("Ignoring top-level key '{key}': rule settings belong in a [{name}] table"),
            }
        }

        Ok(config)
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            source,
            path: path.display().to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|err| match err {
            ConfigError::Parse(message) => ConfigError::Parse(format!("{}: {message}", path.display())),
            other => other,
        })
    }

    /// Load the explicit config file, or discover one upward from the current directory.
    ///
    /// Returns the configuration together with the file it came from, if any.
    pub fn load(config_path: Option<&Path>, no_config: bool) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = config_path {
            log::debug!("[mdtidy-config] Loading explicit config file: {}", path.display());
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }
        if no_config {
            log::debug!("[mdtidy-config] Skipping auto-discovery due to --no-config flag");
            return Ok((Self::default(), None));
        }

        let start = std::env::current_dir().map_err(|source| ConfigError::Io {
            source,
            path: ".".to_string(),
        })?;
        match discover_config_upward(&start) {
            Some(path) => Ok((Self::from_file(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Check whether a rule runs under this configuration.
    ///
    /// A non-empty `enable` list restricts the run to the listed rules; `disable` and a
    /// rule table's `enabled = false` switch a rule off.
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        let name = normalize_key(rule_name);
        let listed_in_enable = self.global.enable.iter().any(|r| normalize_key(r) == name);
        // `disable = ["all"]` leaves only the rules named in `enable`
        if self.global.disable.iter().any(|r| r == ALL_RULES) {
            return listed_in_enable;
        }
        if !self.global.enable.is_empty() && !listed_in_enable {
            return false;
        }
        if self.global.disable.iter().any(|r| normalize_key(r) == name) {
            return false;
        }
        !matches!(
            self.rules.get(&name).and_then(|rc| rc.values.get(ENABLED_KEY)),
            Some(toml::Value::Boolean(false))
        )
    }

    /// Rule names mentioned by this configuration that `known` does not contain
    pub fn unknown_rule_names(&self, known: &[&str]) -> Vec<String> {
        let is_known = |name: &str| name == ALL_RULES || known.contains(&normalize_key(name).as_str());
        let mut unknown: Vec<String> = self
            .global
            .enable
            .iter()
            .chain(self.global.disable.iter())
            .map(String::as_str)
            .chain(self.rules.keys().map(String::as_str))
            .filter(|name| !is_known(name))
            .map(str::to_string)
            .collect();
        unknown.sort();
        unknown.dedup();
        unknown
    }

    /// Apply command-line overrides; a non-empty list replaces the file's list.
    pub fn apply_overrides(
        &mut self,
        enable: Vec<String>,
        disable: Vec<String>,
        exclude: Vec<String>,
        on_rule_error: Option<ErrorPolicy>,
    ) {
        if !enable.is_empty() {
            self.global.enable = enable;
        }
        if !disable.is_empty() {
            self.global.disable = disable;
        }
        if !exclude.is_empty() {
            self.global.exclude = exclude;
        }
        if let Some(policy) = on_rule_error {
            self.global.on_rule_error = policy;
        }
    }

    /// Render this configuration as TOML with every rule's effective options
    pub fn to_effective_toml(&self, rules: &[Box<dyn Rule>]) -> Result<String, ConfigError> {
        let mut table = toml::Table::new();
        table.insert("global".to_string(), global_to_toml(&self.global)?);
        for rule in rules {
            let mut section = match rule.default_config_section() {
                Some((_, toml::Value::Table(section))) => section,
                _ => toml::Table::new(),
            };
            section.insert(ENABLED_KEY.to_string(), toml::Value::Boolean(self.is_rule_enabled(rule.name())));
            table.insert(rule.name().to_string(), toml::Value::Table(section));
        }
        toml::to_string(&table).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

fn parse_global(global: toml::Table) -> Result<GlobalConfig, ConfigError> {
    let mut normalized = toml::Table::new();
    for (key, value) in global {
        let key = normalize_key(&key);
        if !GLOBAL_KEYS.contains(&key.as_str()) {
            log::warn!("Unknown [global] option '{key}' ignored");
            continue;
        }
        normalized.insert(key, value);
    }
    let mut parsed = GlobalConfig::deserialize(toml::Value::Table(normalized))
        .map_err(|e| ConfigError::Parse(format!("[global]: {e}")))?;
    parsed.enable = parsed.enable.iter().map(|r| normalize_key(r)).collect();
    parsed.disable = parsed.disable.iter().map(|r| normalize_key(r)).collect();
    Ok(parsed)
}

fn global_to_toml(global: &GlobalConfig) -> Result<toml::Value, ConfigError> {
    let json_value = serde_json::to_value(global).map_err(|e| ConfigError::Parse(e.to_string()))?;
    json_to_toml_value(&json_value).ok_or_else(|| ConfigError::Parse("empty [global] section".to_string()))
}

/// Walk from `start` towards the filesystem root looking for a config file.
///
/// The search stops at the first directory containing a `.git` entry.
pub fn discover_config_upward(start: &Path) -> Option<PathBuf> {
    for (depth, dir) in start.ancestors().enumerate() {
        if depth >= MAX_DISCOVERY_DEPTH {
            log::debug!("[mdtidy-config] Maximum traversal depth reached");
            break;
        }
        log::debug!("[mdtidy-config] Searching for config in: {}", dir.display());
        for name in CONFIG_FILES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                log::debug!("[mdtidy-config] Found config file: {}", candidate.display());
                return Some(candidate);
            }
        }
        if dir.join(".git").exists() {
            log::debug!("[mdtidy-config] Stopping at .git directory");
            break;
        }
    }
    None
}

/// Default configuration for every rule, as TOML text with a commented header.
pub fn default_config_toml() -> Result<String, ConfigError> {
    let rules = crate::rules::all_rules(&Config::default());
    let mut table = toml::Table::new();
    table.insert("global".to_string(), global_to_toml(&GlobalConfig::default())?);
    for rule in &rules {
        if let Some((name, section)) = rule.default_config_section() {
            table.insert(name, section);
        }
    }
    let body = toml::to_string(&table).map_err(|e| ConfigError::Parse(e.to_string()))?;
    Ok(format!(
        "# mdtidy configuration file\n\
         #\n\
         # [global].enable restricts the run to the listed rules when non-empty.\n\
         # Set `enabled = false` in a rule's table to switch that rule off.\n\
         # on-rule-error is \"abort\" (keep the file unchanged) or \"skip\" (drop the failing rule).\n\n\
         {body}"
    ))
}

/// Create a default configuration file at the specified path
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.display().to_string(),
        });
    }
    let content = default_config_toml()?;
    fs::write(path, content).map_err(|source| ConfigError::Io {
        source,
        path: path.display().to_string(),
    })
}

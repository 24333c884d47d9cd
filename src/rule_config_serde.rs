/// Serde-based configuration system for rules
///
/// Each rule owns a typed config struct. The raw TOML table of the rule is converted to
/// JSON and deserialized into that struct, so missing keys take their defaults while
/// unknown keys and wrongly typed values are rejected.
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{Config, ConfigError};

/// Key consumed by the registry rather than by the rule's config struct
pub const ENABLED_KEY: &str = "enabled";

/// Trait for rule configurations
pub trait RuleConfig: Serialize + DeserializeOwned + Default + Clone {
    /// The rule name (e.g., "trailing-spaces")
    const RULE_NAME: &'static str;
}

/// Load a rule's configuration from the global config.
///
/// The error names the rule and, where it can be pinned down, the offending key.
pub fn load_rule_config<T: RuleConfig>(config: &Config) -> Result<T, ConfigError> {
    let Some(rule_config) = config.rules.get(T::RULE_NAME) else {
        return Ok(T::default());
    };

    let json_map: serde_json::Map<String, serde_json::Value> = rule_config
        .values
        .iter()
        .filter(|(key, _)| key.as_str() != ENABLED_KEY)
        .map(|(key, value)| (key.clone(), toml_value_to_json(value)))
        .collect();

    match serde_json::from_value::<T>(serde_json::Value::Object(json_map.clone())) {
        Ok(parsed) => Ok(parsed),
        Err(err) => Err(ConfigError::InvalidRuleConfig {
            rule: T::RULE_NAME.to_string(),
            message: locate_invalid_key::<T>(&json_map).unwrap_or_else(|| err.to_string()),
        }),
    }
}

/// Deserialize each key on its own to find the first one the struct rejects
fn locate_invalid_key<T: RuleConfig>(map: &serde_json::Map<String, serde_json::Value>) -> Option<String> {
    map.iter().find_map(|(key, value)| {
        let mut single = serde_json::Map::new();
        single.insert(key.clone(), value.clone());
        serde_json::from_value::<T>(serde_json::Value::Object(single))
            .err()
            .map(|err| format!("option '{key}': {err}"))
    })
}

/// Render a rule's config struct as its TOML table
pub fn config_section<T: Serialize>(rule_name: &str, config: &T) -> Option<(String, toml::Value)> {
    let json_value = serde_json::to_value(config).ok()?;
    Some((rule_name.to_string(), json_to_toml_value(&json_value)?))
}

/// Convert TOML value to JSON value for serde deserialization
fn toml_value_to_json(toml_val: &toml::Value) -> serde_json::Value {
    match toml_val {
        toml::Value::String(s) => serde_json::Value::String(s.clone()),
        toml::Value::Integer(i) => serde_json::Value::Number((*i).into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        toml::Value::Boolean(b) => serde_json::Value::Bool(*b),
        toml::Value::Array(arr) => serde_json::Value::Array(arr.iter().map(toml_value_to_json).collect()),
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), toml_value_to_json(v)))
                .collect(),
        ),
        // Rejected by every rule field, but with a readable type in the message
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
    }
}

/// Convert JSON value to TOML value for default config generation
pub fn json_to_toml_value(json_val: &serde_json::Value) -> Option<toml::Value> {
    match json_val {
        serde_json::Value::Null => None,
        serde_json::Value::Bool(b) => Some(toml::Value::Boolean(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(toml::Value::Integer(i))
            } else {
                n.as_f64().map(toml::Value::Float)
            }
        }
        serde_json::Value::String(s) => Some(toml::Value::String(s.clone())),
        serde_json::Value::Array(arr) => {
            let toml_arr: Vec<_> = arr.iter().filter_map(json_to_toml_value).collect();
            Some(toml::Value::Array(toml_arr))
        }
        serde_json::Value::Object(obj) => {
            let mut toml_table = toml::map::Map::new();
            for (k, v) in obj {
                if let Some(toml_v) = json_to_toml_value(v) {
                    toml_table.insert(k.clone(), toml_v);
                }
            }
            Some(toml::Value::Table(toml_table))
        }
    }
}

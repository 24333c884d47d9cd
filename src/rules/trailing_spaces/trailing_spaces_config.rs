use crate::rule_config_serde::RuleConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TrailingSpacesConfig {
    /// Keep two trailing spaces as a markdown hard line break
    #[serde(default)]
    pub two_space_line_break: bool,
}

impl RuleConfig for TrailingSpacesConfig {
    const RULE_NAME: &'static str = "trailing-spaces";
}

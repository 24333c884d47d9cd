//! Handler for the `config` command.

use anyhow::{Context, Result};

use mdtidy_lib::config::default_config_toml;
use mdtidy_lib::exit_codes;
use mdtidy_lib::rules::all_rules;

use super::load_config;
use crate::GlobalArgs;

/// Print the built-in defaults, or the loaded configuration with every rule's
/// effective options
pub fn handle_config(defaults: bool, global: &GlobalArgs) -> Result<i32> {
    let output = if defaults {
        default_config_toml().context("Failed to render default configuration")?
    } else {
        let config = load_config(global)?;
        config
            .to_effective_toml(&all_rules(&config))
            .context("Failed to render configuration")?
    };
    print!("{output}");
    Ok(exit_codes::SUCCESS)
}

//! Command handlers for the mdtidy CLI.
//!
//! Each subcommand has its own module with a public handler function that `main()`
//! dispatches to. Handlers return the process exit code.

pub mod check;
pub mod config;
pub mod init;
pub mod rule;

use anyhow::{Context, Result};
use colored::*;
use mdtidy_lib::config::{Config, ConfigError};
use std::path::Path;

use crate::GlobalArgs;

/// Load the configuration named by `--config`, or discover one unless `--no-config`
pub fn load_config(global: &GlobalArgs) -> Result<Config> {
    let (config, source) =
        Config::load(global.config.as_deref().map(Path::new), global.no_config).context("Failed to load configuration")?;
    match source {
        Some(path) => log::info!("Using configuration from {}", path.display()),
        None => log::info!("Using default configuration"),
    }
    Ok(config)
}

pub fn print_config_warnings(errors: &[ConfigError]) {
    for err in errors {
        eprintln!("{}: {err}", "Warning".yellow().bold());
    }
}

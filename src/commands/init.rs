//! Handler for the `init` command.

use anyhow::Result;
use colored::*;
use std::path::Path;

use mdtidy_lib::config::{ConfigError, create_default_config};
use mdtidy_lib::exit_codes;

use crate::GlobalArgs;

const DEFAULT_CONFIG_FILE: &str = ".mdtidy.toml";

pub fn handle_init(global: &GlobalArgs) -> Result<i32> {
    match create_default_config(Path::new(DEFAULT_CONFIG_FILE)) {
        Ok(()) => {
            if !global.quiet {
                println!("Created default configuration file: {DEFAULT_CONFIG_FILE}");
            }
            Ok(exit_codes::SUCCESS)
        }
        Err(ConfigError::AlreadyExists { path }) => {
            eprintln!("{}: {path} already exists", "Error".red().bold());
            Ok(exit_codes::TOOL_ERROR)
        }
        Err(err) => Err(err.into()),
    }
}

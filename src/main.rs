use clap::{Args, Parser, Subcommand};
use colored::*;
use env_logger::Env;

use mdtidy_lib::exit_codes;
use mdtidy_lib::pipeline::ErrorPolicy;

mod commands;
mod file_processor;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalArgs,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Ignore all configuration files and use built-in defaults
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    /// Show detailed output, including each file's run log
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only errors and the files that change are printed
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files or directories to process (defaults to the current directory)
    pub paths: Vec<String>,

    /// Read the document from stdin instead of files
    #[arg(long, conflicts_with = "paths")]
    pub stdin: bool,

    /// Run only these rules (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub enable: Vec<String>,

    /// Do not run these rules (comma-separated, `all` for every rule)
    #[arg(long, value_delimiter = ',')]
    pub disable: Vec<String>,

    /// Exclude files or directories (comma-separated glob patterns)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// What to do when a rule fails: `abort` keeps the document unchanged, `skip`
    /// drops the failing rule
    #[arg(long, value_name = "POLICY")]
    pub on_rule_error: Option<ErrorPolicy>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report files that would be changed (exit code 1 if any)
    Check(CheckArgs),
    /// Rewrite files in place
    Fix(CheckArgs),
    /// List the available rules, or show one rule in detail
    Rule {
        /// Rule name (e.g. trailing-spaces)
        name: Option<String>,
    },
    /// Print the effective configuration
    Config {
        /// Show the built-in defaults instead of the loaded configuration
        #[arg(long)]
        defaults: bool,
    },
    /// Create a default `.mdtidy.toml` in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.global.verbose {
        "info"
    } else if cli.global.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Commands::Check(args) => commands::check::handle_check(&args, &cli.global, false),
        Commands::Fix(args) => commands::check::handle_check(&args, &cli.global, true),
        Commands::Rule { name } => commands::rule::handle_rule(name.as_deref(), &cli.global),
        Commands::Config { defaults } => commands::config::handle_config(defaults, &cli.global),
        Commands::Init => commands::init::handle_init(&cli.global),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{}: {err:#}", "Error".red().bold());
            std::process::exit(exit_codes::TOOL_ERROR);
        }
    }
}

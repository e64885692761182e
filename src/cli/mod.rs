//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod info;
mod resolve;
mod validate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

// Re-export subcommand types used in Commands enum
pub use info::DictionaryAction;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Iconizer - Resolve display icons for named game entities
#[derive(Parser)]
#[command(name = "iconizer")]
#[command(about = "Iconizer - Resolve display icons for named game entities")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve icons for one or more entity names
    Resolve {
        /// Entity names to resolve
        names: Vec<String>,

        /// Settings file (default: iconizer.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the base dictionary data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Override the local icon prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Override the replacement policy (name or 0-2)
        #[arg(long)]
        replacement_policy: Option<String>,

        /// Override the load policy (name or 0-2)
        #[arg(long)]
        load_policy: Option<String>,

        /// Current icon reference of the entity, if any
        #[arg(long)]
        current_icon: Option<String>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate icon dictionary files
    Validate {
        /// Dictionary files to validate
        files: Vec<PathBuf>,

        /// Validate every .json file under this directory (recursively)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Strict mode: treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Inspect the built-in base dictionary presets
    Dictionaries {
        #[command(subcommand)]
        action: DictionaryAction,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            names,
            config,
            data_dir,
            prefix,
            replacement_policy,
            load_policy,
            current_icon,
            json,
        } => resolve::run_resolve(
            &names,
            config.as_deref(),
            data_dir.as_deref(),
            prefix.as_deref(),
            replacement_policy.as_deref(),
            load_policy.as_deref(),
            current_icon.as_deref(),
            json,
        ),
        Commands::Validate { files, dir, strict } => {
            validate::run_validate(&files, dir.as_deref(), strict)
        }
        Commands::Dictionaries { action } => info::run_dictionaries(action),
    }
}

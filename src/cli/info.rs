//! Dictionary info command implementations (list, show)

use clap::Subcommand;
use std::process::ExitCode;

use crate::dictionaries::BaseDictionary;

use super::{EXIT_ERROR, EXIT_SUCCESS};

#[derive(Subcommand)]
pub enum DictionaryAction {
    /// List all available base dictionary presets
    List,
    /// Show details of a specific preset
    Show {
        /// Name of the preset to show
        name: String,
    },
}

/// Execute the dictionaries command
pub fn run_dictionaries(action: DictionaryAction) -> ExitCode {
    match action {
        DictionaryAction::List => {
            println!("Available base dictionaries:");
            println!();
            for dictionary in BaseDictionary::ALL {
                println!("  {:<16} {}", dictionary.name(), dictionary.label());
            }
            println!();
            println!("Usage: iconizer dictionaries show <name>");
            ExitCode::from(EXIT_SUCCESS)
        }
        DictionaryAction::Show { name } => match BaseDictionary::by_name(&name) {
            Some(dictionary) => {
                println!("{}", dictionary.label());
                println!("  name:   {}", dictionary.name());
                println!("  source: {}", dictionary.file_name());
                match dictionary.remote_base() {
                    Some(remote) => println!("  icons:  {}/<token>", remote),
                    None => println!("  icons:  <prefix>/<token>"),
                }
                ExitCode::from(EXIT_SUCCESS)
            }
            None => {
                eprintln!("Error: Unknown base dictionary '{}'", name);
                eprintln!();
                eprintln!("Available dictionaries:");
                for preset in BaseDictionary::list() {
                    eprintln!("  {}", preset);
                }
                ExitCode::from(EXIT_ERROR)
            }
        },
    }
}

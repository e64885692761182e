//! Iconizer - Command-line tool for resolving game entity icons

use std::process::ExitCode;

use iconizer::cli;

fn main() -> ExitCode {
    cli::run()
}

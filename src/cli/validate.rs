//! Validate command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glob::glob;

use crate::loader::load_source;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Find all .json dictionary files in a directory (recursively).
fn find_dictionary_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(paths) = glob(&format!("{}/**/*.json", dir.display())) {
        files.extend(paths.filter_map(Result::ok));
    }
    files.sort();
    files
}

/// Execute the validate command
pub fn run_validate(files: &[PathBuf], dir: Option<&Path>, strict: bool) -> ExitCode {
    let mut file_list = files.to_vec();
    if let Some(dir) = dir {
        file_list.extend(find_dictionary_files(dir));
    }

    if file_list.is_empty() {
        eprintln!("Error: No dictionary files to validate");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let mut errors = 0usize;
    let mut warnings = 0usize;
    let mut entries = 0usize;

    for path in &file_list {
        match load_source(path) {
            Ok(Some(source)) => {
                entries += source.entries.len();
                warnings += source.warnings.len();
                for warning in &source.warnings {
                    eprintln!("Warning: {}: {}", path.display(), warning);
                }
            }
            Ok(None) => {
                eprintln!("Error: {}: file not found", path.display());
                errors += 1;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                errors += 1;
            }
        }
    }

    println!(
        "{} file(s) checked: {} entries, {} warning(s), {} error(s)",
        file_list.len(),
        entries,
        warnings,
        errors
    );

    if errors > 0 || (strict && warnings > 0) {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

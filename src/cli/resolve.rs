//! Resolve command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::{load_settings, Settings, SETTINGS_FILE};
use crate::loader::load_sources;
use crate::models::{LoadPolicy, ReplacementPolicy, Resolution, ResolveRequest};
use crate::resolver::resolve;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the resolve command
#[allow(clippy::too_many_arguments)]
pub fn run_resolve(
    names: &[String],
    config: Option<&Path>,
    data_dir: Option<&Path>,
    prefix: Option<&str>,
    replacement_policy: Option<&str>,
    load_policy: Option<&str>,
    current_icon: Option<&str>,
    json: bool,
) -> ExitCode {
    if names.is_empty() {
        eprintln!("Error: No entity names given");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let mut settings = match load_base_settings(config) {
        Ok(settings) => settings,
        Err(code) => return code,
    };

    if let Some(dir) = data_dir {
        settings.data_dir = dir.to_path_buf();
    }
    if let Some(prefix) = prefix {
        settings.prefix = prefix.to_string();
    }
    if let Some(value) = replacement_policy {
        match parse_policy_arg(value, ReplacementPolicy::from_name, ReplacementPolicy::from_index) {
            Some(policy) => settings.replacement_policy = policy,
            None => {
                eprintln!(
                    "Error: Unknown replacement policy '{}' (expected one of: {})",
                    value,
                    ReplacementPolicy::NAMES.join(", ")
                );
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        }
    }
    if let Some(value) = load_policy {
        match parse_policy_arg(value, LoadPolicy::from_name, LoadPolicy::from_index) {
            Some(policy) => settings.load_policy = policy,
            None => {
                eprintln!(
                    "Error: Unknown load policy '{}' (expected one of: {})",
                    value,
                    LoadPolicy::NAMES.join(", ")
                );
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        }
    }

    let sources = match load_sources(&settings) {
        Ok(sources) => sources,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    for (path, warning) in sources.warnings() {
        eprintln!("Warning: {}: {}", path.display(), warning);
    }

    let registry = sources.build_registry(settings.load_policy);

    let mut results = Vec::with_capacity(names.len());
    for name in names {
        let mut request = ResolveRequest::new(name.clone());
        if let Some(icon) = current_icon {
            request = request.with_current_icon(icon);
        }
        let resolution = resolve(
            &request,
            &registry,
            settings.replacement_policy,
            settings.base_dictionary,
            &settings.prefix,
        );
        results.push((name, resolution));
    }

    if json {
        let payload: Vec<_> = results
            .iter()
            .map(|(name, resolution)| {
                serde_json::json!({
                    "name": name,
                    "icon": resolution.icon(),
                })
            })
            .collect();
        println!("{}", serde_json::Value::Array(payload));
    } else {
        for (name, resolution) in &results {
            match resolution {
                Resolution::Replaced(icon) => println!("{} -> {}", name, icon),
                Resolution::Unchanged => println!("{} -> (unchanged)", name),
            }
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Load settings from the given file, or from `iconizer.toml` when present.
fn load_base_settings(config: Option<&Path>) -> Result<Settings, ExitCode> {
    let path = match config {
        Some(path) => path.to_path_buf(),
        None => {
            let default = Path::new(SETTINGS_FILE);
            if !default.exists() {
                return Ok(Settings::default());
            }
            default.to_path_buf()
        }
    };
    load_settings(&path).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_ERROR)
    })
}

/// Parse a policy argument in either its named or numeric form.
fn parse_policy_arg<P>(
    value: &str,
    from_name: impl Fn(&str) -> Option<P>,
    from_index: impl Fn(u64) -> Option<P>,
) -> Option<P> {
    match value.parse::<u64>() {
        Ok(index) => from_index(index),
        Err(_) => from_name(value),
    }
}

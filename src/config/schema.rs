//! Configuration schema types for `iconizer.toml`
//!
//! All fields are optional; defaults mirror a fresh world: replace
//! everything, load only the base dictionary, Foundry's shipped icons, the
//! `iconizer` prefix, and missing-icon sharing off.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::dictionaries::BaseDictionary;
use crate::models::{LoadPolicy, ReplacementPolicy};

/// Default settings file name, looked up in the working directory.
pub const SETTINGS_FILE: &str = "iconizer.toml";

/// Session settings consumed by the loader and resolver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Whether/when a resolved icon overwrites an entity's existing icon
    #[serde(default)]
    pub replacement_policy: ReplacementPolicy,
    /// Which dictionary sources feed the effective mapping
    #[serde(default)]
    pub load_policy: LoadPolicy,
    /// Base dictionary preset
    #[serde(default)]
    pub base_dictionary: BaseDictionary,
    /// Local icon prefix; also the directory holding the custom dictionary
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Directory holding the shipped base dictionary files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Offer missing-icon reports to the submission endpoint
    #[serde(default)]
    pub share_missing_icons: bool,
}

fn default_prefix() -> String {
    "iconizer".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            replacement_policy: ReplacementPolicy::default(),
            load_policy: LoadPolicy::default(),
            base_dictionary: BaseDictionary::default(),
            prefix: default_prefix(),
            data_dir: default_data_dir(),
            share_missing_icons: false,
        }
    }
}

/// Error type for settings loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in '{path}': {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    toml::from_str(&content)
        .map_err(|source| ConfigError::Toml { path: path.to_path_buf(), source })
}

//! Dictionary source loading.
//!
//! The resolution core never touches the filesystem; this module is the
//! caller-side collaborator that reads the two dictionary sources for it.
//! A missing file is an empty contribution, not an error — a world without
//! a custom dictionary is the common case.
//!
//! | Source | Location |
//! |--------|----------|
//! | base   | `<data_dir>/<preset file name>` |
//! | custom | `<prefix>/icons.json` |

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Settings;
use crate::models::{IconEntry, LoadPolicy, Warning};
use crate::parser::{parse_entries, ParseError};
use crate::registry::IconRegistry;

/// File name of the custom dictionary inside the icon prefix directory.
pub const CUSTOM_DICTIONARY_FILE: &str = "icons.json";

/// Error type for dictionary loading failures.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dictionary '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// A dictionary source read from disk.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub path: PathBuf,
    pub entries: Vec<IconEntry>,
    pub warnings: Vec<Warning>,
}

/// The two dictionary sources of a session, as far as they exist.
#[derive(Debug, Clone, Default)]
pub struct LoadedSources {
    pub base: Option<LoadedSource>,
    pub custom: Option<LoadedSource>,
}

impl LoadedSources {
    /// Build the effective dictionary from the loaded sources.
    pub fn build_registry(&self, policy: LoadPolicy) -> IconRegistry {
        IconRegistry::build(
            self.base.as_ref().map(|source| source.entries.as_slice()),
            self.custom.as_ref().map(|source| source.entries.as_slice()),
            policy,
        )
    }

    /// All per-entry warnings across both sources, with their file paths.
    pub fn warnings(&self) -> impl Iterator<Item = (&Path, &Warning)> {
        self.base
            .iter()
            .chain(self.custom.iter())
            .flat_map(|source| source.warnings.iter().map(|w| (source.path.as_path(), w)))
    }
}

/// Read a single dictionary source.
///
/// Returns `Ok(None)` when the file does not exist. Unreadable or
/// unparseable documents are errors; malformed entries inside a readable
/// document are warnings on the returned source.
pub fn load_source(path: &Path) -> Result<Option<LoadedSource>, LoadError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(LoadError::Io { path: path.to_path_buf(), source }),
    };
    let result = parse_entries(&content)
        .map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })?;
    Ok(Some(LoadedSource {
        path: path.to_path_buf(),
        entries: result.entries,
        warnings: result.warnings,
    }))
}

/// Read the dictionary sources selected by the session settings.
///
/// Sources excluded by the load policy are not read at all.
pub fn load_sources(settings: &Settings) -> Result<LoadedSources, LoadError> {
    let mut sources = LoadedSources::default();
    if settings.load_policy.includes_base() {
        let path = settings.data_dir.join(settings.base_dictionary.file_name());
        sources.base = load_source(&path)?;
    }
    if settings.load_policy.includes_custom() {
        let path = Path::new(&settings.prefix).join(CUSTOM_DICTIONARY_FILE);
        sources.custom = load_source(&path)?;
    }
    Ok(sources)
}

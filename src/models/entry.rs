//! Icon dictionary entry types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw record from a dictionary source.
///
/// `icon` is an opaque token: an absolute URL, an absolute path, or a bare
/// filename to be combined with the configured icon prefix at format time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IconEntry {
    pub name: String,
    pub icon: String,
}

impl IconEntry {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self { name: name.into(), icon: icon.into() }
    }
}

/// A warning produced while reading a dictionary source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
    /// Position of the offending element in the source array (0-indexed)
    pub index: usize,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry {}: {}", self.index, self.message)
    }
}

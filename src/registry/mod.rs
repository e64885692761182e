//! Icon registry: the effective name→icon mapping for a session.
//!
//! The registry merges up to two dictionary sources (base and custom) under
//! a load policy. It is built once and treated as read-only afterwards;
//! lookups never mutate it.

use std::collections::HashMap;

use crate::models::{IconEntry, LoadPolicy};
use crate::normalize::normalize;

/// The effective dictionary: normalized name → raw icon token.
///
/// Keys are unique; the last write for a given key wins. Custom entries are
/// always inserted after base entries, so on a key collision the custom
/// entry is the survivor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconRegistry {
    icons: HashMap<String, String>,
}

impl IconRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { icons: HashMap::new() }
    }

    /// Build the effective dictionary from the available sources.
    ///
    /// Sources excluded by `policy` are ignored even when present; absent
    /// sources contribute nothing. Within one source, a name that appears
    /// twice resolves to its later occurrence.
    pub fn build(
        base: Option<&[IconEntry]>,
        custom: Option<&[IconEntry]>,
        policy: LoadPolicy,
    ) -> Self {
        let mut registry = Self::new();
        if policy.includes_base() {
            if let Some(entries) = base {
                registry.insert_all(entries);
            }
        }
        if policy.includes_custom() {
            if let Some(entries) = custom {
                registry.insert_all(entries);
            }
        }
        registry
    }

    /// Insert entries keyed by their normalized name, overwriting collisions.
    fn insert_all(&mut self, entries: &[IconEntry]) {
        for entry in entries {
            let key = normalize(&entry.name);
            if key.is_empty() {
                continue;
            }
            self.icons.insert(key, entry.icon.clone());
        }
    }

    /// Get the raw icon token for an already-normalized key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.icons.get(key).map(String::as_str)
    }

    /// Normalize a raw display name and look it up.
    pub fn lookup(&self, raw_name: &str) -> Option<&str> {
        self.get(&normalize(raw_name))
    }

    /// Check if a key exists in the registry.
    pub fn contains(&self, key: &str) -> bool {
        self.icons.contains_key(key)
    }

    /// Get the number of entries in the registry.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Get an iterator over all normalized names in the registry.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }
}

//! Load and replacement policy enumerations.
//!
//! Both policies were historically stored as bare numbers (0-2), so their
//! deserializers accept either the numeric form or the kebab-case name.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Controls which dictionary sources contribute to the effective mapping.
///
/// When both sources are loaded, custom entries are applied after base
/// entries and win on key collision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadPolicy {
    /// Only the built-in base dictionary
    #[default]
    BaseOnly,
    /// Base dictionary first, then the custom dictionary on top
    BaseThenCustom,
    /// Only the custom dictionary
    CustomOnly,
}

impl LoadPolicy {
    pub const NAMES: &'static [&'static str] = &["base-only", "base-then-custom", "custom-only"];

    /// Whether the base dictionary feeds the effective mapping.
    pub fn includes_base(self) -> bool {
        matches!(self, LoadPolicy::BaseOnly | LoadPolicy::BaseThenCustom)
    }

    /// Whether the custom dictionary feeds the effective mapping.
    pub fn includes_custom(self) -> bool {
        matches!(self, LoadPolicy::BaseThenCustom | LoadPolicy::CustomOnly)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "base-only" => Some(LoadPolicy::BaseOnly),
            "base-then-custom" => Some(LoadPolicy::BaseThenCustom),
            "custom-only" => Some(LoadPolicy::CustomOnly),
            _ => None,
        }
    }

    pub fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(LoadPolicy::BaseOnly),
            1 => Some(LoadPolicy::BaseThenCustom),
            2 => Some(LoadPolicy::CustomOnly),
            _ => None,
        }
    }
}

impl fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadPolicy::BaseOnly => write!(f, "base-only"),
            LoadPolicy::BaseThenCustom => write!(f, "base-then-custom"),
            LoadPolicy::CustomOnly => write!(f, "custom-only"),
        }
    }
}

impl<'de> Deserialize<'de> for LoadPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LoadPolicyVisitor;

        impl Visitor<'_> for LoadPolicyVisitor {
            type Value = LoadPolicy;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a load policy name or an integer 0-2")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<LoadPolicy, E> {
                LoadPolicy::from_name(v).ok_or_else(|| E::unknown_variant(v, LoadPolicy::NAMES))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<LoadPolicy, E> {
                LoadPolicy::from_index(v)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<LoadPolicy, E> {
                u64::try_from(v)
                    .ok()
                    .and_then(LoadPolicy::from_index)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
            }
        }

        deserializer.deserialize_any(LoadPolicyVisitor)
    }
}

/// Controls whether a resolved icon overwrites an entity's existing icon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplacementPolicy {
    /// Always overwrite
    #[default]
    ReplaceAll,
    /// Overwrite only when the current icon is absent or the host placeholder
    ReplaceDefaultOnly,
    /// Never overwrite
    ReplaceNone,
}

impl ReplacementPolicy {
    pub const NAMES: &'static [&'static str] =
        &["replace-all", "replace-default-only", "replace-none"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "replace-all" => Some(ReplacementPolicy::ReplaceAll),
            "replace-default-only" => Some(ReplacementPolicy::ReplaceDefaultOnly),
            "replace-none" => Some(ReplacementPolicy::ReplaceNone),
            _ => None,
        }
    }

    pub fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(ReplacementPolicy::ReplaceAll),
            1 => Some(ReplacementPolicy::ReplaceDefaultOnly),
            2 => Some(ReplacementPolicy::ReplaceNone),
            _ => None,
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplacementPolicy::ReplaceAll => write!(f, "replace-all"),
            ReplacementPolicy::ReplaceDefaultOnly => write!(f, "replace-default-only"),
            ReplacementPolicy::ReplaceNone => write!(f, "replace-none"),
        }
    }
}

impl<'de> Deserialize<'de> for ReplacementPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ReplacementPolicyVisitor;

        impl Visitor<'_> for ReplacementPolicyVisitor {
            type Value = ReplacementPolicy;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a replacement policy name or an integer 0-2")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ReplacementPolicy, E> {
                ReplacementPolicy::from_name(v)
                    .ok_or_else(|| E::unknown_variant(v, ReplacementPolicy::NAMES))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ReplacementPolicy, E> {
                ReplacementPolicy::from_index(v)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ReplacementPolicy, E> {
                u64::try_from(v)
                    .ok()
                    .and_then(ReplacementPolicy::from_index)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
            }
        }

        deserializer.deserialize_any(ReplacementPolicyVisitor)
    }
}

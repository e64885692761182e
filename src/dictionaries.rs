//! Built-in base dictionary presets.
//!
//! A preset names the shipped name→icon mapping a world starts from and
//! carries the one piece of identity the formatter needs: whether its icon
//! tokens live on a remote icon host or under the local prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Remote icon host used by the online preset.
pub const WOWHEAD_ICON_BASE: &str = "https://wow.zamimg.com/images/wow/icons/large";

/// A built-in base dictionary preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BaseDictionary {
    /// Icons shipped with the host application
    #[default]
    FoundryIcons,
    /// World of Warcraft icons, served from the local prefix
    WowIcons,
    /// World of Warcraft icons, served from wowhead's icon host
    WowheadIcons,
}

/// List of all available preset names.
const PRESET_NAMES: &[&str] = &["foundry-icons", "wow-icons", "wowhead-icons"];

impl BaseDictionary {
    pub const ALL: &'static [BaseDictionary] =
        &[BaseDictionary::FoundryIcons, BaseDictionary::WowIcons, BaseDictionary::WowheadIcons];

    /// Returns a list of all available preset names.
    pub fn list() -> Vec<&'static str> {
        PRESET_NAMES.to_vec()
    }

    /// Returns a preset by name, or None if not found.
    ///
    /// Accepts both the preset name (`wowhead-icons`) and the source file
    /// name (`wowhead-icons.json`).
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "foundry-icons" | "foundry-icons.json" => Some(BaseDictionary::FoundryIcons),
            "wow-icons" | "wow-icons.json" => Some(BaseDictionary::WowIcons),
            "wowhead-icons" | "wowhead-icons.json" => Some(BaseDictionary::WowheadIcons),
            _ => None,
        }
    }

    /// Preset name, as used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            BaseDictionary::FoundryIcons => "foundry-icons",
            BaseDictionary::WowIcons => "wow-icons",
            BaseDictionary::WowheadIcons => "wowhead-icons",
        }
    }

    /// File name of the shipped dictionary source.
    pub fn file_name(self) -> &'static str {
        match self {
            BaseDictionary::FoundryIcons => "foundry-icons.json",
            BaseDictionary::WowIcons => "wow-icons.json",
            BaseDictionary::WowheadIcons => "wowhead-icons.json",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            BaseDictionary::FoundryIcons => "Foundry Icons",
            BaseDictionary::WowIcons => "World of Warcraft icons (offline, local icons)",
            BaseDictionary::WowheadIcons => "World of Warcraft icons (online, wowhead.com)",
        }
    }

    /// Remote base URL for bare icon tokens, when this preset serves icons
    /// from a remote host rather than the local prefix.
    pub fn remote_base(self) -> Option<&'static str> {
        match self {
            BaseDictionary::WowheadIcons => Some(WOWHEAD_ICON_BASE),
            _ => None,
        }
    }
}

impl fmt::Display for BaseDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for BaseDictionary {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        BaseDictionary::by_name(&value)
            .ok_or_else(|| format!("unknown base dictionary '{value}'"))
    }
}

impl From<BaseDictionary> for String {
    fn from(dictionary: BaseDictionary) -> String {
        dictionary.name().to_string()
    }
}

//! Missing-icon report payloads.
//!
//! When an entity still carries the placeholder icon after creation, its
//! name can be reported so the shared dictionaries grow over time. This
//! module only builds the payload; performing the POST is the embedding
//! application's job.

use serde::Serialize;

use crate::config::Settings;
use crate::dictionaries::BaseDictionary;
use crate::resolver::PLACEHOLDER_ICON;

/// Submission endpoint for missing-icon reports.
pub const SUBMIT_ENDPOINT: &str = "https://www.vttassets.com/api/iconizer/items/submit";

/// A missing-icon report: the entity's name/type/subtype triple.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MissingIconReport {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(rename = "subType")]
    pub sub_type: String,
}

impl MissingIconReport {
    /// Build a report for an entity, when the settings call for one.
    ///
    /// Reports are only produced when sharing is enabled, the entity has a
    /// sub-type, the session uses one of the WoW base dictionaries, and the
    /// entity's icon is still absent or the placeholder.
    pub fn for_item(
        settings: &Settings,
        name: &str,
        item_type: &str,
        sub_type: Option<&str>,
        current_icon: Option<&str>,
    ) -> Option<Self> {
        if !settings.share_missing_icons {
            return None;
        }
        let sub_type = sub_type?;
        if !matches!(
            settings.base_dictionary,
            BaseDictionary::WowIcons | BaseDictionary::WowheadIcons
        ) {
            return None;
        }
        let still_default =
            current_icon.map_or(true, |icon| icon.eq_ignore_ascii_case(PLACEHOLDER_ICON));
        if !still_default {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            item_type: item_type.to_string(),
            sub_type: sub_type.to_string(),
        })
    }
}

//! Icon resolution: the policy-driven replace/keep decision.

use crate::dictionaries::BaseDictionary;
use crate::format::format_icon;
use crate::models::{ReplacementPolicy, Resolution, ResolveRequest};
use crate::normalize::normalize;
use crate::registry::IconRegistry;

/// Substring identifying the host's generic placeholder icon.
pub const PLACEHOLDER_MARKER: &str = "mystery-man";

/// Full path of the host's generic placeholder icon.
pub const PLACEHOLDER_ICON: &str = "icons/svg/mystery-man.svg";

/// Decide the icon reference for an entity.
///
/// Pure function of its arguments: the request, the effective dictionary,
/// the replacement policy, the base dictionary identity, and the local icon
/// prefix. Malformed or missing input degrades to [`Resolution::Unchanged`];
/// this never fails.
pub fn resolve(
    request: &ResolveRequest,
    registry: &IconRegistry,
    policy: ReplacementPolicy,
    base: BaseDictionary,
    prefix: &str,
) -> Resolution {
    if request.name.is_empty() {
        return Resolution::Unchanged;
    }

    match policy {
        ReplacementPolicy::ReplaceNone => return Resolution::Unchanged,
        ReplacementPolicy::ReplaceAll => {}
        ReplacementPolicy::ReplaceDefaultOnly => {
            if !has_default_icon(request.current_icon.as_deref()) {
                return Resolution::Unchanged;
            }
        }
    }

    match registry.get(&normalize(&request.name)) {
        Some(token) => Resolution::Replaced(format_icon(token, base, prefix)),
        // No fallback icon on a miss; the entity keeps what it has
        None => Resolution::Unchanged,
    }
}

/// An entity still has its default icon when none is set or the reference
/// contains the placeholder marker (case-insensitive).
fn has_default_icon(current_icon: Option<&str>) -> bool {
    match current_icon {
        None => true,
        Some(icon) => icon.is_empty() || icon.to_lowercase().contains(PLACEHOLDER_MARKER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IconEntry, LoadPolicy};

    fn registry() -> IconRegistry {
        let entries = vec![
            IconEntry::new("Goblin", "goblin.png"),
            IconEntry::new("Fire Sword", "inv_sword_01.jpg"),
            IconEntry::new("Map", "https://example.com/map.png"),
        ];
        IconRegistry::build(Some(&entries), None, LoadPolicy::BaseOnly)
    }

    fn request(name: &str) -> ResolveRequest {
        ResolveRequest::new(name)
    }

    #[test]
    fn test_replace_all_formats_the_hit() {
        let result = resolve(
            &request("Goblin"),
            &registry(),
            ReplacementPolicy::ReplaceAll,
            BaseDictionary::FoundryIcons,
            "iconizer",
        );
        assert_eq!(result, Resolution::Replaced("iconizer/goblin.png".to_string()));
    }

    #[test]
    fn test_name_is_normalized_before_lookup() {
        let result = resolve(
            &request("  GOBLIN (Elite)  "),
            &registry(),
            ReplacementPolicy::ReplaceAll,
            BaseDictionary::FoundryIcons,
            "iconizer",
        );
        assert!(result.is_replaced());
    }

    #[test]
    fn test_replace_none_never_replaces() {
        let result = resolve(
            &request("Goblin"),
            &registry(),
            ReplacementPolicy::ReplaceNone,
            BaseDictionary::FoundryIcons,
            "iconizer",
        );
        assert_eq!(result, Resolution::Unchanged);
    }

    #[test]
    fn test_replace_default_only_replaces_placeholder() {
        let req = request("Goblin").with_current_icon("icons/svg/mystery-man.svg");
        let result = resolve(
            &req,
            &registry(),
            ReplacementPolicy::ReplaceDefaultOnly,
            BaseDictionary::FoundryIcons,
            "iconizer",
        );
        assert!(result.is_replaced());
    }

    #[test]
    fn test_replace_default_only_matches_marker_case_insensitively() {
        let req = request("Goblin").with_current_icon("Icons/SVG/Mystery-Man.svg");
        let result = resolve(
            &req,
            &registry(),
            ReplacementPolicy::ReplaceDefaultOnly,
            BaseDictionary::FoundryIcons,
            "iconizer",
        );
        assert!(result.is_replaced());
    }

    #[test]
    fn test_replace_default_only_keeps_real_icons() {
        let req = request("Goblin").with_current_icon("custom/real-icon.png");
        let result = resolve(
            &req,
            &registry(),
            ReplacementPolicy::ReplaceDefaultOnly,
            BaseDictionary::FoundryIcons,
            "iconizer",
        );
        assert_eq!(result, Resolution::Unchanged);
    }

    #[test]
    fn test_replace_default_only_treats_missing_icon_as_default() {
        let result = resolve(
            &request("Goblin"),
            &registry(),
            ReplacementPolicy::ReplaceDefaultOnly,
            BaseDictionary::FoundryIcons,
            "iconizer",
        );
        assert!(result.is_replaced());
    }

    #[test]
    fn test_miss_is_unchanged_under_every_policy() {
        for policy in [
            ReplacementPolicy::ReplaceAll,
            ReplacementPolicy::ReplaceDefaultOnly,
            ReplacementPolicy::ReplaceNone,
        ] {
            let result = resolve(
                &request("Unknown Thing"),
                &registry(),
                policy,
                BaseDictionary::FoundryIcons,
                "iconizer",
            );
            assert_eq!(result, Resolution::Unchanged);
        }
    }

    #[test]
    fn test_empty_name_is_unchanged() {
        let result = resolve(
            &request(""),
            &registry(),
            ReplacementPolicy::ReplaceAll,
            BaseDictionary::FoundryIcons,
            "iconizer",
        );
        assert_eq!(result, Resolution::Unchanged);
    }

    #[test]
    fn test_absolute_token_is_not_prefixed() {
        let result = resolve(
            &request("Map"),
            &registry(),
            ReplacementPolicy::ReplaceAll,
            BaseDictionary::FoundryIcons,
            "iconizer",
        );
        assert_eq!(result.icon(), Some("https://example.com/map.png"));
    }

    #[test]
    fn test_online_preset_formats_against_remote_base() {
        let result = resolve(
            &request("Fire Sword"),
            &registry(),
            ReplacementPolicy::ReplaceAll,
            BaseDictionary::WowheadIcons,
            "iconizer",
        );
        assert_eq!(
            result.icon(),
            Some("https://wow.zamimg.com/images/wow/icons/large/inv_sword_01.jpg")
        );
    }
}

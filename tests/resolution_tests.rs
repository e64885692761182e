//! End-to-end resolution tests through the library API
//!
//! These tests exercise the full pipeline: parse dictionary sources, merge
//! them into a registry, and resolve entity names under the different
//! policies.

use iconizer::dictionaries::{BaseDictionary, WOWHEAD_ICON_BASE};
use iconizer::models::{LoadPolicy, ReplacementPolicy, Resolution, ResolveRequest};
use iconizer::parser::parse_entries;
use iconizer::registry::IconRegistry;
use iconizer::resolver::resolve;

const BASE_SOURCE: &str = r#"[
    {"name": "Goblin", "icon": "a.png"},
    {"name": "Fire Sword (Rare)", "icon": "inv_sword_01.jpg"},
    {"name": "Map of the Realm", "icon": "https://example.com/map.png"}
]"#;

const CUSTOM_SOURCE: &str = r#"[
    {"name": "Goblin", "icon": "b.png"},
    {"name": "Homebrew Blade", "icon": "/worlds/mine/blade.png"}
]"#;

fn build_registry(policy: LoadPolicy) -> IconRegistry {
    let base = parse_entries(BASE_SOURCE).unwrap();
    let custom = parse_entries(CUSTOM_SOURCE).unwrap();
    assert!(base.warnings.is_empty());
    assert!(custom.warnings.is_empty());
    IconRegistry::build(Some(&base.entries), Some(&custom.entries), policy)
}

fn resolve_name(
    registry: &IconRegistry,
    name: &str,
    policy: ReplacementPolicy,
    base: BaseDictionary,
) -> Resolution {
    resolve(&ResolveRequest::new(name), registry, policy, base, "iconizer")
}

#[test]
fn custom_entries_win_over_base_entries() {
    let registry = build_registry(LoadPolicy::BaseThenCustom);
    let result = resolve_name(
        &registry,
        "Goblin",
        ReplacementPolicy::ReplaceAll,
        BaseDictionary::FoundryIcons,
    );
    assert_eq!(result, Resolution::Replaced("iconizer/b.png".to_string()));
}

#[test]
fn decorated_names_match_their_dictionary_entry() {
    let registry = build_registry(LoadPolicy::BaseOnly);
    // Both the stored name and the request carry decoration
    let result = resolve_name(
        &registry,
        "Fire Sword (Broken)",
        ReplacementPolicy::ReplaceAll,
        BaseDictionary::FoundryIcons,
    );
    assert_eq!(result.icon(), Some("iconizer/inv_sword_01.jpg"));
}

#[test]
fn online_preset_formats_bare_tokens_against_the_remote_host() {
    let registry = build_registry(LoadPolicy::BaseOnly);
    let result = resolve_name(
        &registry,
        "Fire Sword",
        ReplacementPolicy::ReplaceAll,
        BaseDictionary::WowheadIcons,
    );
    assert_eq!(
        result.icon(),
        Some(format!("{WOWHEAD_ICON_BASE}/inv_sword_01.jpg").as_str())
    );
}

#[test]
fn absolute_tokens_are_never_rewritten() {
    let registry = build_registry(LoadPolicy::BaseThenCustom);

    let url = resolve_name(
        &registry,
        "Map of the Realm",
        ReplacementPolicy::ReplaceAll,
        BaseDictionary::WowheadIcons,
    );
    assert_eq!(url.icon(), Some("https://example.com/map.png"));

    let path = resolve_name(
        &registry,
        "Homebrew Blade",
        ReplacementPolicy::ReplaceAll,
        BaseDictionary::FoundryIcons,
    );
    assert_eq!(path.icon(), Some("/worlds/mine/blade.png"));
}

#[test]
fn replace_none_ignores_dictionary_contents() {
    let registry = build_registry(LoadPolicy::BaseThenCustom);
    for name in ["Goblin", "Fire Sword", "Homebrew Blade", "Unknown"] {
        let result = resolve_name(
            &registry,
            name,
            ReplacementPolicy::ReplaceNone,
            BaseDictionary::FoundryIcons,
        );
        assert_eq!(result, Resolution::Unchanged);
    }
}

#[test]
fn replace_default_only_depends_on_the_current_icon() {
    let registry = build_registry(LoadPolicy::BaseOnly);

    let placeholder = ResolveRequest::new("Goblin").with_current_icon("icons/svg/mystery-man.svg");
    let result = resolve(
        &placeholder,
        &registry,
        ReplacementPolicy::ReplaceDefaultOnly,
        BaseDictionary::FoundryIcons,
        "iconizer",
    );
    assert!(result.is_replaced());

    let custom = ResolveRequest::new("Goblin").with_current_icon("custom/real-icon.png");
    let result = resolve(
        &custom,
        &registry,
        ReplacementPolicy::ReplaceDefaultOnly,
        BaseDictionary::FoundryIcons,
        "iconizer",
    );
    assert_eq!(result, Resolution::Unchanged);
}

#[test]
fn lookup_misses_change_nothing_under_every_policy() {
    let registry = build_registry(LoadPolicy::BaseThenCustom);
    for policy in [
        ReplacementPolicy::ReplaceAll,
        ReplacementPolicy::ReplaceDefaultOnly,
        ReplacementPolicy::ReplaceNone,
    ] {
        let result =
            resolve_name(&registry, "Nonexistent", policy, BaseDictionary::FoundryIcons);
        assert_eq!(result, Resolution::Unchanged);
    }
}

#[test]
fn empty_names_change_nothing() {
    let registry = build_registry(LoadPolicy::BaseThenCustom);
    let result =
        resolve_name(&registry, "", ReplacementPolicy::ReplaceAll, BaseDictionary::FoundryIcons);
    assert_eq!(result, Resolution::Unchanged);
}

#[test]
fn custom_only_policy_drops_base_entries() {
    let registry = build_registry(LoadPolicy::CustomOnly);
    let base_hit = resolve_name(
        &registry,
        "Fire Sword",
        ReplacementPolicy::ReplaceAll,
        BaseDictionary::FoundryIcons,
    );
    assert_eq!(base_hit, Resolution::Unchanged);

    let custom_hit = resolve_name(
        &registry,
        "Homebrew Blade",
        ReplacementPolicy::ReplaceAll,
        BaseDictionary::FoundryIcons,
    );
    assert!(custom_hit.is_replaced());
}

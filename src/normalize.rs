//! Name normalization for dictionary lookup keys.
//!
//! Display names carry decoration that the dictionaries do not: casing,
//! parenthetical suffixes like "(Rare)" or "(5 charges)", and stray
//! whitespace. Both dictionary construction and lookups go through the same
//! normalization so the two always agree on a key.

use regex::Regex;
use std::sync::OnceLock;

fn parenthetical() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\([^)]*\)").expect("static pattern compiles"))
}

/// Canonicalize a raw display name into a lookup key.
///
/// Lowercases, removes every parenthesized substring (non-greedy, multiple
/// occurrences), and trims surrounding whitespace. Idempotent; empty input
/// yields an empty key.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    parenthetical().replace_all(&lowered, "").trim().to_string()
}

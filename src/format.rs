//! Reference formatting: raw icon tokens to usable path/URL references.
//!
//! # Token Forms
//!
//! | Token form | Result |
//! |------------|--------|
//! | Starts with `/` | Returned unchanged (absolute path) |
//! | Starts with `://` or `http` | Returned unchanged (absolute URL) |
//! | Bare name, online preset | Remote icon host + `/` + token |
//! | Bare name, otherwise | Local prefix + `/` + token |

use crate::dictionaries::BaseDictionary;

/// Turn a raw icon token into a usable icon reference.
///
/// `base` is the identity of the base dictionary the session was loaded
/// with; `prefix` is the configured local icon prefix. Always returns a
/// reference, never fails.
pub fn format_icon(token: &str, base: BaseDictionary, prefix: &str) -> String {
    // Accept absolute references as-is, without prefixing
    if token.starts_with('/') || token.starts_with("://") || token.starts_with("http") {
        return token.to_string();
    }
    match base.remote_base() {
        Some(remote) => format!("{remote}/{token}"),
        None => format!("{prefix}/{token}"),
    }
}

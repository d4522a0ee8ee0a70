//! # quickpanel-i18n
//!
//! Localized labels for the quick-settings panel.
//!
//! Uses a simple `translate(key, language)` function over a static table.
//! Supported languages: English (fallback), Russian, Czech.
//!
//! Resolution order for a lookup:
//! 1. the requested language under `key`,
//! 2. the English variant under `key`,
//! 3. `key` itself.
//!
//! Empty variants count as absent.

mod table;
mod validate;


pub use table::{entries, keys, languages, lookup, Entry};
pub use validate::validate;

/// Language used when the requested one has no variant for a key.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Return the localized string for `key` in the given `language`.
/// Falls back to English, then to `key` itself for unknown keys.
pub fn translate<'a>(key: &'a str, language: &str) -> &'a str {
    resolve(lookup(key), key, language)
}

/// Walk the fallback chain over `entry`, the table row found for `key`.
pub fn resolve<'a>(entry: Option<&Entry>, key: &'a str, language: &str) -> &'a str {
    let Some(entry) = entry else {
        return key;
    };
    let found: Option<&'a str> = entry
        .get(language)
        .or_else(|| entry.get(FALLBACK_LANGUAGE));
    found.unwrap_or(key)
}

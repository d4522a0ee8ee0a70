//! Structural checks for a translation table.

use std::collections::HashSet;

use quickpanel_core::error::QuickpanelError;

use crate::table::Entry;
use crate::FALLBACK_LANGUAGE;

/// Check that keys are unique, that no entry lists a language twice, and
/// that every entry has a non-empty English variant.
///
/// Returns the first violation in table order.
pub fn validate(entries: &[Entry]) -> Result<(), QuickpanelError> {
    let mut seen_keys = HashSet::new();
    for entry in entries {
        if !seen_keys.insert(entry.key) {
            return Err(QuickpanelError::DuplicateKey {
                key: entry.key.to_string(),
            });
        }

        let mut seen_languages = HashSet::new();
        for code in entry.languages() {
            if !seen_languages.insert(code) {
                return Err(QuickpanelError::DuplicateLanguage {
                    key: entry.key.to_string(),
                    language: code.to_string(),
                });
            }
        }

        if entry.get(FALLBACK_LANGUAGE).is_none() {
            return Err(QuickpanelError::MissingFallback {
                key: entry.key.to_string(),
            });
        }
    }
    Ok(())
}

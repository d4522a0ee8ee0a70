//! Default value functions used by serde for config deserialization.

pub fn default_language() -> String {
    "en".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

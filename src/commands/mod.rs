//! CLI command handlers. Each returns the text to print.


use quickpanel_core::config::ConfigSource;
use quickpanel_i18n::{entries, languages, lookup, translate, FALLBACK_LANGUAGE};
use std::collections::BTreeMap;
use tracing::debug;

/// Which step of the fallback chain produced a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The requested language.
    Stored,
    /// The English variant.
    English,
    /// No entry; the key itself.
    Key,
}

/// Classify how `key` resolves in `lang`.
pub fn resolution(key: &str, lang: &str) -> Resolution {
    match lookup(key) {
        None => Resolution::Key,
        Some(entry) if entry.get(lang).is_some() => Resolution::Stored,
        Some(entry) if entry.get(FALLBACK_LANGUAGE).is_some() => Resolution::English,
        Some(_) => Resolution::Key,
    }
}

/// Translate `words` (joined by spaces) into `lang`.
pub fn handle_translate(words: &[String], lang: &str) -> String {
    let key = words.join(" ");
    match resolution(&key, lang) {
        Resolution::Stored => {}
        Resolution::English => {
            debug!("no '{lang}' variant for '{key}', using {FALLBACK_LANGUAGE}")
        }
        Resolution::Key => debug!("no translation for '{key}', returning key"),
    }
    translate(&key, lang).to_string()
}

/// Describe where the configuration came from, for the startup log.
pub fn config_status(path: &str, source: ConfigSource) -> String {
    match source {
        ConfigSource::File => format!("loaded config from {path}"),
        ConfigSource::Defaults => format!("Config file not found at {path}, using defaults"),
    }
}

/// List every key with the languages it is available in.
pub fn handle_keys() -> String {
    let mut out = String::new();
    for entry in entries() {
        let langs: Vec<&str> = entry.languages().collect();
        out.push_str(&format!("{}  [{}]\n", entry.key, langs.join(", ")));
    }
    out
}

/// Dump the table as `{ key: { language: text } }` JSON.
pub fn handle_keys_json() -> anyhow::Result<String> {
    let table: BTreeMap<&str, BTreeMap<&str, &str>> = entries()
        .iter()
        .map(|entry| (entry.key, entry.variants.iter().copied().collect()))
        .collect();
    Ok(serde_json::to_string_pretty(&table)?)
}

/// List language codes present in the table.
pub fn handle_languages() -> String {
    let mut out = languages().join("\n");
    out.push('\n');
    out
}

/// Validate the built-in table.
pub fn handle_check() -> anyhow::Result<String> {
    quickpanel_i18n::validate(entries())?;
    Ok(format!(
        "{} keys, {} languages: ok\n",
        entries().len(),
        languages().len()
    ))
}

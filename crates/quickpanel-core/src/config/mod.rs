mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::QuickpanelError;
use defaults::*;

/// Top-level quickpanel configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub panel: PanelConfig,
}

/// Panel display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Language code used when none is given on the command line.
    #[serde(default = "default_language")]
    pub language: String,
    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            log_level: default_log_level(),
        }
    }
}

/// Where [`load`] took the configuration from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from the given file.
    File,
    /// The file does not exist; defaults were used.
    Defaults,
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist; the returned
/// [`ConfigSource`] says which happened.
pub fn load(path: &str) -> Result<(Config, ConfigSource), QuickpanelError> {
    let path = Path::new(path);
    if !path.exists() {
        return Ok((Config::default(), ConfigSource::Defaults));
    }

    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| QuickpanelError::Config(format!("failed to parse config: {}", e)))?;

    Ok((config, ConfigSource::File))
}

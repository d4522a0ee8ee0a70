use thiserror::Error;

/// Top-level error type for quickpanel.
#[derive(Debug, Error)]
pub enum QuickpanelError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// A translation key appears more than once in a table.
    #[error("duplicate translation key '{key}'")]
    DuplicateKey { key: String },

    /// An entry lists the same language twice.
    #[error("translation key '{key}' lists language '{language}' more than once")]
    DuplicateLanguage { key: String, language: String },

    /// An entry has no usable English variant.
    #[error("translation key '{key}' has no English fallback")]
    MissingFallback { key: String },

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

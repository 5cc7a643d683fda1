use super::{CatalogError, CheckerError, FactStoreError};

/// Top-level error type for the insights fact checkers.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum InsightsError {
    #[error("checker error: {0}")]
    CheckerError(#[from] CheckerError),

    #[error("catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("fact store error: {0}")]
    FactStoreError(#[from] FactStoreError),

    #[error("invalid entity ref {input:?}: {reason}")]
    InvalidEntityRef { input: String, reason: String },

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("toml error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Convenience type alias.
pub type InsightsResult<T> = Result<T, InsightsError>;

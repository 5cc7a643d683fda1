pub mod checker_config;
pub mod observability_config;

use serde::{Deserialize, Serialize};

use crate::errors::InsightsResult;

pub use checker_config::{CheckerConfig, ThresholdSource};
pub use observability_config::ObservabilityConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InsightsConfig {
    pub checker: CheckerConfig,
    pub observability: ObservabilityConfig,
}

impl InsightsConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> InsightsResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load config from a JSON string, falling back to defaults for missing fields.
    pub fn from_json(json_str: &str) -> InsightsResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Load and validate config from a `.toml` or `.json` file.
    pub fn load(path: &std::path::Path) -> InsightsResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            crate::errors::InsightsError::ConfigError(format!(
                "failed to read {}: {e}",
                path.display()
            ))
        })?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&raw)?,
            _ => Self::from_toml(&raw)?,
        };
        config.checker.validate()?;
        Ok(config)
    }
}

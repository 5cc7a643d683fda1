//! Threshold checker configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{InsightsError, InsightsResult};
use crate::models::{CheckDefinition, DEFAULT_NAMESPACE};

/// Where a check reads its threshold and operator annotations from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdSource {
    /// The system named by the entity's `spec.system`. Thresholds are governed
    /// per system and shared by all of its components.
    #[default]
    System,
    /// The evaluated entity itself.
    Entity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    pub threshold_source: ThresholdSource,
    /// Namespace for entity references that omit one.
    pub default_namespace: String,
    pub checks: Vec<CheckDefinition>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            threshold_source: ThresholdSource::default(),
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            checks: Vec::new(),
        }
    }
}

impl CheckerConfig {
    /// Reject duplicate ids and structurally invalid checks.
    pub fn validate(&self) -> InsightsResult<()> {
        if self.default_namespace.trim().is_empty() {
            return Err(InsightsError::ConfigError(
                "default_namespace must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        let mut invalid = Vec::new();
        for check in &self.checks {
            if !seen.insert(check.id.as_str()) {
                duplicates.push(check.id.as_str());
            }
            if check.id.trim().is_empty() || !check.validate().valid {
                invalid.push(check.id.as_str());
            }
        }

        if !duplicates.is_empty() {
            return Err(InsightsError::ConfigError(format!(
                "duplicate check ids: {}",
                duplicates.join(", ")
            )));
        }
        if !invalid.is_empty() {
            return Err(InsightsError::ConfigError(format!(
                "invalid check definitions: {}",
                invalid
                    .iter()
                    .map(|id| if id.trim().is_empty() { "<unnamed>" } else { *id })
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }
        Ok(())
    }
}

//! Check definitions and the results produced by evaluating them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::FactRecord;

/// A named rule comparing one stored fact to one catalog-governed threshold.
///
/// Keys follow the catalog app config (`factIds`, `annotationKeyThreshold`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Free-form classification, not used in evaluation.
    #[serde(rename = "type", default)]
    pub check_type: String,
    /// `[retrieverId, factName]`.
    #[serde(default)]
    pub fact_ids: Vec<String>,
    #[serde(default)]
    pub annotation_key_threshold: String,
    #[serde(default)]
    pub annotation_key_operator: String,
}

impl CheckDefinition {
    pub fn retriever_id(&self) -> Option<&str> {
        self.fact_ids.first().map(String::as_str)
    }

    pub fn fact_name(&self) -> Option<&str> {
        self.fact_ids.get(1).map(String::as_str)
    }

    /// Structural validation only. Does not check that the fact or the
    /// annotations exist at runtime.
    pub fn validate(&self) -> CheckValidationResponse {
        let has_fact_ids =
            self.fact_ids.len() >= 2 && self.fact_ids.iter().all(|id| !id.is_empty());
        let has_threshold_key = !self.annotation_key_threshold.trim().is_empty();
        let has_operator_key = !self.annotation_key_operator.trim().is_empty();

        if has_fact_ids && has_threshold_key && has_operator_key {
            CheckValidationResponse::valid()
        } else {
            CheckValidationResponse::invalid(
                "Check must define factIds as [retrieverId, factName] and non-empty \
                 annotationKeyThreshold and annotationKeyOperator",
            )
        }
    }
}

/// Outcome of [`CheckDefinition::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckValidationResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckValidationResponse {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Result of evaluating one check against one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub check: CheckDefinition,
    /// Retriever id → normalized fact. Empty when the threshold or operator
    /// could not be resolved.
    pub facts: BTreeMap<String, FactRecord>,
    pub result: bool,
}

impl CheckResult {
    /// A failed result carrying no facts.
    pub fn unresolved(check: CheckDefinition) -> Self {
        Self {
            check,
            facts: BTreeMap::new(),
            result: false,
        }
    }
}

//! Catalog entities and entity references.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{InsightsError, InsightsResult};

/// Namespace assumed when a reference or entity omits one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Kind assumed for the entity reference passed to a checker.
pub const DEFAULT_ENTITY_KIND: &str = "component";

/// Kind assumed for the `spec.system` reference of a component.
pub const SYSTEM_KIND: &str = "system";

/// Reference to a catalog entity in the form `kind:namespace/name`.
///
/// The kind is stored lower-cased because catalog kinds compare
/// case-insensitively. Namespace and name are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityRef {
    kind: String,
    namespace: String,
    name: String,
}

impl EntityRef {
    pub fn new(
        kind: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into().to_lowercase(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Parse `[kind:][namespace/]name`, defaulting to a `component` in the
    /// `default` namespace.
    pub fn parse(input: &str) -> InsightsResult<Self> {
        Self::parse_with_defaults(input, DEFAULT_ENTITY_KIND, DEFAULT_NAMESPACE)
    }

    /// Parse `[kind:][namespace/]name`, filling omitted parts from the defaults.
    pub fn parse_with_defaults(
        input: &str,
        default_kind: &str,
        default_namespace: &str,
    ) -> InsightsResult<Self> {
        let invalid = |reason: &str| InsightsError::InvalidEntityRef {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid("reference is empty"));
        }

        let (kind, rest) = match trimmed.split_once(':') {
            Some((kind, rest)) => (kind, rest),
            None => (default_kind, trimmed),
        };
        let (namespace, name) = match rest.split_once('/') {
            Some((namespace, name)) => (namespace, name),
            None => (default_namespace, rest),
        };

        if kind.is_empty() {
            return Err(invalid("kind is empty"));
        }
        if namespace.is_empty() {
            return Err(invalid("namespace is empty"));
        }
        if name.is_empty() {
            return Err(invalid("name is empty"));
        }
        if name.contains(':') || name.contains('/') {
            return Err(invalid("name must not contain ':' or '/'"));
        }

        Ok(Self::new(kind, namespace, name))
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.kind, self.namespace, self.name)
    }
}

impl TryFrom<String> for EntityRef {
    type Error = InsightsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EntityRef> for String {
    fn from(value: EntityRef) -> Self {
        value.to_string()
    }
}

/// Metadata block shared by every catalog entity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

/// A catalog-registered component, system, or similar resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    pub kind: String,
    pub metadata: EntityMetadata,
    #[serde(default)]
    pub spec: serde_json::Map<String, Value>,
}

fn default_api_version() -> String {
    "backstage.io/v1alpha1".to_string()
}

impl Entity {
    pub fn namespace(&self) -> &str {
        self.metadata
            .namespace
            .as_deref()
            .filter(|ns| !ns.is_empty())
            .unwrap_or(DEFAULT_NAMESPACE)
    }

    pub fn entity_ref(&self) -> EntityRef {
        EntityRef::new(&self.kind, self.namespace(), &self.metadata.name)
    }

    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.metadata.annotations.get(key).map(String::as_str)
    }

    /// The `spec.system` reference, if it is a non-empty string.
    pub fn system(&self) -> Option<&str> {
        match self.spec.get("system") {
            Some(Value::String(system)) if !system.trim().is_empty() => Some(system.trim()),
            _ => None,
        }
    }
}

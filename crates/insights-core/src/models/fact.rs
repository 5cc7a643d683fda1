//! Fact values as stored by retrievers and as seen by checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::EntityRef;

/// A loosely-typed fact value, classified once at the fact store boundary.
///
/// Output only: `Other` serializes as its JSON text, which reads back as `Text`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FactValue {
    Number(f64),
    Text(String),
    List(Vec<Value>),
    /// Any other JSON shape (bool, object, null), kept as its JSON text.
    Other(String),
}

impl FactValue {
    /// Classify a raw JSON value. A missing fact is treated as JSON `null`.
    pub fn from_json(raw: Option<&Value>) -> Self {
        match raw {
            Some(Value::Number(n)) => match n.as_f64() {
                Some(f) => FactValue::Number(f),
                None => FactValue::Other(n.to_string()),
            },
            Some(Value::String(s)) => FactValue::Text(s.clone()),
            Some(Value::Array(items)) => FactValue::List(items.clone()),
            Some(other) => FactValue::Other(other.to_string()),
            None => FactValue::Other(Value::Null.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FactValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Number or text, the only shapes equality checks accept.
    pub fn is_scalar(&self) -> bool {
        matches!(self, FactValue::Number(_) | FactValue::Text(_))
    }

    pub fn fact_type(&self) -> FactType {
        match self {
            FactValue::Number(_) => FactType::Integer,
            _ => FactType::String,
        }
    }
}

/// Declared type of a normalized fact record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactType {
    Integer,
    String,
}

/// Normalized fact record attached to a check result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub fact_type: FactType,
    pub description: String,
    pub value: FactValue,
}

impl FactRecord {
    pub fn new(retriever_id: &str, value: FactValue) -> Self {
        Self {
            id: retriever_id.to_string(),
            fact_type: value.fact_type(),
            description: format!("Fact for {retriever_id}"),
            value,
        }
    }
}

/// The latest set of facts one retriever recorded for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactSnapshot {
    /// Retriever id.
    pub id: String,
    pub entity: EntityRef,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub facts: serde_json::Map<String, Value>,
}

impl FactSnapshot {
    pub fn fact(&self, name: &str) -> Option<&Value> {
        self.facts.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_json_shapes() {
        assert_eq!(FactValue::from_json(Some(&json!(3))), FactValue::Number(3.0));
        assert_eq!(
            FactValue::from_json(Some(&json!("A"))),
            FactValue::Text("A".into())
        );
        assert_eq!(FactValue::from_json(Some(&json!([]))), FactValue::List(vec![]));
        assert_eq!(
            FactValue::from_json(Some(&json!(true))),
            FactValue::Other("true".into())
        );
        assert_eq!(FactValue::from_json(None), FactValue::Other("null".into()));
    }

    #[test]
    fn record_serializes_like_catalog_facts() {
        let record = FactRecord::new("retrieverA", FactValue::Number(3.0));
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "id": "retrieverA",
                "type": "integer",
                "description": "Fact for retrieverA",
                "value": 3.0
            })
        );
    }

    #[test]
    fn unclassified_values_serialize_as_json_text() {
        let record = FactRecord::new("retrieverA", FactValue::from_json(None));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], json!("string"));
        assert_eq!(json["value"], json!("null"));
    }
}

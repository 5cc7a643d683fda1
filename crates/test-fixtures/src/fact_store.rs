//! In-memory fact store.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use chrono::{DateTime, Utc};
use serde_json::Value;

use insights_core::errors::{FactStoreError, InsightsResult};
use insights_core::traits::IFactStore;
use insights_core::{EntityRef, FactSnapshot};

/// A recorded row. `facts` stays raw JSON until it is read back.
#[derive(Clone)]
struct FactRow {
    id: String,
    entity: EntityRef,
    timestamp: DateTime<Utc>,
    facts: Value,
}

impl FactRow {
    fn into_snapshot(self) -> InsightsResult<FactSnapshot> {
        match self.facts {
            Value::Object(facts) => Ok(FactSnapshot {
                id: self.id,
                entity: self.entity,
                timestamp: self.timestamp,
                facts,
            }),
            other => Err(FactStoreError::Malformed {
                entity_ref: self.entity.to_string(),
                retriever_id: self.id,
                reason: format!("expected a JSON object of facts, got {other}"),
            }
            .into()),
        }
    }
}

/// Fact rows keyed by `(retriever id, entity, timestamp)`. Recording the same
/// key twice replaces the earlier facts.
#[derive(Default)]
pub struct InMemoryFactStore {
    rows: RwLock<Vec<FactRow>>,
    requests: Mutex<Vec<Vec<String>>>,
}

impl InMemoryFactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `facts` for `entity` at `timestamp`. Anything but a JSON object
    /// is stored as-is and fails with `FactStoreError::Malformed` when read.
    pub fn record(
        &self,
        retriever_id: &str,
        entity: &EntityRef,
        timestamp: DateTime<Utc>,
        facts: Value,
    ) {
        let row = FactRow {
            id: retriever_id.to_string(),
            entity: entity.clone(),
            timestamp,
            facts,
        };

        if let Ok(mut rows) = self.rows.write() {
            match rows.iter_mut().find(|existing| {
                existing.id == row.id
                    && existing.entity == row.entity
                    && existing.timestamp == timestamp
            }) {
                Some(existing) => *existing = row,
                None => rows.push(row),
            }
        }
    }

    pub fn record_now(&self, retriever_id: &str, entity: &EntityRef, facts: Value) {
        self.record(retriever_id, entity, Utc::now(), facts);
    }

    /// Retriever id lists passed to each `get_latest_facts` call, in call order.
    pub fn requests(&self) -> Vec<Vec<String>> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl IFactStore for InMemoryFactStore {
    async fn get_latest_facts(
        &self,
        ids: &[String],
        entity_ref: &EntityRef,
    ) -> InsightsResult<HashMap<String, FactSnapshot>> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(ids.to_vec());
        }

        let rows = self
            .rows
            .read()
            .map_err(|e| FactStoreError::Unavailable(e.to_string()))?;

        let mut latest: HashMap<String, &FactRow> = HashMap::new();
        for row in rows
            .iter()
            .filter(|row| row.entity == *entity_ref && ids.contains(&row.id))
        {
            let newer = latest
                .get(&row.id)
                .map_or(true, |current| row.timestamp > current.timestamp);
            if newer {
                latest.insert(row.id.clone(), row);
            }
        }

        latest
            .into_iter()
            .map(|(id, row)| Ok((id, row.clone().into_snapshot()?)))
            .collect()
    }
}

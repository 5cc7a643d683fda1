//! In-memory catalog lookup.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

use serde_json::Value;

use insights_core::errors::{CatalogError, InsightsResult};
use insights_core::traits::ICatalogLookup;
use insights_core::{Entity, EntityRef};

/// Catalog keyed by the canonical `kind:namespace/name` form of each entity.
///
/// Entities are held as catalog JSON and decoded on lookup, so a record that
/// does not decode fails with `CatalogError::Malformed`.
#[derive(Default)]
pub struct InMemoryCatalog {
    entities: RwLock<HashMap<String, Value>>,
    outage: Mutex<Option<String>>,
    lookups: AtomicUsize,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(self, entity: Entity) -> Self {
        self.insert(entity);
        self
    }

    pub fn insert(&self, entity: Entity) {
        if let Ok(raw) = serde_json::to_value(&entity) {
            self.insert_raw(&entity.entity_ref(), raw);
        }
    }

    /// Store a raw catalog record under `entity_ref`, as a catalog backend
    /// would return it.
    pub fn insert_raw(&self, entity_ref: &EntityRef, raw: Value) {
        if let Ok(mut entities) = self.entities.write() {
            entities.insert(entity_ref.to_string(), raw);
        }
    }

    /// Make every subsequent lookup fail with `CatalogError::Unavailable`.
    pub fn set_unavailable(&self, reason: &str) {
        if let Ok(mut outage) = self.outage.lock() {
            *outage = Some(reason.to_string());
        }
    }

    /// Number of `get_entity_by_ref` calls served so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ICatalogLookup for InMemoryCatalog {
    async fn get_entity_by_ref(&self, entity_ref: &EntityRef) -> InsightsResult<Option<Entity>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = self.outage.lock().ok().and_then(|o| o.clone()) {
            return Err(CatalogError::Unavailable(reason).into());
        }
        let entities = self
            .entities
            .read()
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
        let Some(raw) = entities.get(&entity_ref.to_string()) else {
            return Ok(None);
        };
        let entity = serde_json::from_value(raw.clone()).map_err(|e| CatalogError::Malformed {
            entity_ref: entity_ref.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(entity))
    }
}

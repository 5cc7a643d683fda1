//! IFactStore — read side of the persisted facts written by retrievers.

use std::collections::HashMap;

use crate::errors::InsightsResult;
use crate::models::{EntityRef, FactSnapshot};

/// Latest-facts lookup used by checkers.
#[allow(async_fn_in_trait)]
pub trait IFactStore: Send + Sync {
    /// Most recent snapshot per retriever id for `entity_ref`.
    /// Retrievers with nothing recorded are absent from the map.
    async fn get_latest_facts(
        &self,
        ids: &[String],
        entity_ref: &EntityRef,
    ) -> InsightsResult<HashMap<String, FactSnapshot>>;
}

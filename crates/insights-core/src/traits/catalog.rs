//! ICatalogLookup — resolves entity references to catalog entities.

use crate::errors::InsightsResult;
use crate::models::{Entity, EntityRef};

/// Read access to the software catalog.
///
/// `Ok(None)` means the reference is well-formed but nothing is registered
/// under it. `Err` is reserved for the catalog itself failing.
#[allow(async_fn_in_trait)]
pub trait ICatalogLookup: Send + Sync {
    async fn get_entity_by_ref(&self, entity_ref: &EntityRef) -> InsightsResult<Option<Entity>>;
}

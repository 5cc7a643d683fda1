/// Catalog lookup collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error("malformed catalog entity {entity_ref}: {reason}")]
    Malformed { entity_ref: String, reason: String },
}

/// Fact store collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum FactStoreError {
    #[error("fact store unavailable: {0}")]
    Unavailable(String),

    #[error("malformed facts for {entity_ref} from {retriever_id}: {reason}")]
    Malformed {
        entity_ref: String,
        retriever_id: String,
        reason: String,
    },
}

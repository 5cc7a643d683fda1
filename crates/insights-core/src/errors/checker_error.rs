/// Hard failures of a checker run. Any of these aborts the whole evaluation
/// for the entity; per-check problems are absorbed into a `false` result.
#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    #[error("entity not found: {entity_ref}")]
    EntityNotFound { entity_ref: String },

    #[error("entity {entity_ref} has no system reference in spec.system")]
    MissingSystemReference { entity_ref: String },

    #[error("system {system_ref} referenced by {entity_ref} not found")]
    SystemNotFound {
        system_ref: String,
        entity_ref: String,
    },
}

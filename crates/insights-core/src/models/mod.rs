pub mod check;
pub mod entity;
pub mod fact;

pub use check::{CheckDefinition, CheckResult, CheckValidationResponse};
pub use entity::{
    Entity, EntityMetadata, EntityRef, DEFAULT_ENTITY_KIND, DEFAULT_NAMESPACE, SYSTEM_KIND,
};
pub use fact::{FactRecord, FactSnapshot, FactType, FactValue};

//! # insights-core
//!
//! Foundation crate for the component insights fact checkers.
//! Defines the catalog entity model, check definitions and results,
//! collaborator traits, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::InsightsConfig;
pub use errors::{InsightsError, InsightsResult};
pub use models::{
    CheckDefinition, CheckResult, CheckValidationResponse, Entity, EntityRef, FactRecord,
    FactSnapshot, FactType, FactValue,
};

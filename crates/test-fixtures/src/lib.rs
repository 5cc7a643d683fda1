//! # test-fixtures
//!
//! Shared doubles for the checker test suites: an in-memory catalog, an
//! in-memory fact store with latest-per-retriever semantics, entity builders,
//! and a tracing layer that captures log events.

pub mod catalog;
pub mod entities;
pub mod fact_store;
pub mod logs;

pub use catalog::InMemoryCatalog;
pub use entities::{component, system, EntityBuilder};
pub use fact_store::InMemoryFactStore;
pub use logs::{CapturedEvent, LogCapture};

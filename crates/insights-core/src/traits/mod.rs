mod catalog;
mod fact_checker;
mod fact_store;

pub use catalog::ICatalogLookup;
pub use fact_checker::{IFactChecker, IFactCheckerFactory};
pub use fact_store::IFactStore;

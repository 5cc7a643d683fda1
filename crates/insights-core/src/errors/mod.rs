mod catalog_error;
mod checker_error;
mod fact_store_error;
mod insights_error;

pub use catalog_error::CatalogError;
pub use checker_error::CheckerError;
pub use fact_store_error::FactStoreError;
pub use insights_error::{InsightsError, InsightsResult};

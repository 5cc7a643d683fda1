//! IFactChecker / IFactCheckerFactory — the contract exposed to whatever
//! surfaces pass/fail status for entities.

use std::sync::Arc;

use crate::errors::InsightsResult;
use crate::models::{CheckDefinition, CheckResult, CheckValidationResponse};

use super::IFactStore;

#[allow(async_fn_in_trait)]
pub trait IFactChecker: Send + Sync {
    /// Evaluate the configured checks for `entity_ref`. `None` or an empty
    /// filter runs every check; results follow definition order.
    async fn run_checks(
        &self,
        entity_ref: &str,
        check_ids: Option<&[String]>,
    ) -> InsightsResult<Vec<CheckResult>>;

    fn validate(&self, check: &CheckDefinition) -> CheckValidationResponse;

    fn get_checks(&self) -> &[CheckDefinition];
}

/// Binds a concrete fact store to a preconfigured checker.
pub trait IFactCheckerFactory<S: IFactStore> {
    type Checker: IFactChecker;

    fn construct(&self, repository: Arc<S>) -> Self::Checker;
}

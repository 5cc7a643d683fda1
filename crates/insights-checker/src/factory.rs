//! DynamicThresholdFactCheckerFactory — holds the check definitions and the
//! catalog handle, and binds fact stores to produce checkers.

use std::sync::Arc;

use insights_core::config::{CheckerConfig, ThresholdSource};
use insights_core::errors::InsightsResult;
use insights_core::models::DEFAULT_NAMESPACE;
use insights_core::traits::{ICatalogLookup, IFactCheckerFactory, IFactStore};
use insights_core::CheckDefinition;

use crate::checker::DynamicThresholdFactChecker;

/// Factory for [`DynamicThresholdFactChecker`]s.
///
/// The check list is immutable once built and shared read-only by every
/// checker this factory constructs.
pub struct DynamicThresholdFactCheckerFactory<C> {
    checks: Arc<[CheckDefinition]>,
    catalog: Arc<C>,
    threshold_source: ThresholdSource,
    default_namespace: Arc<str>,
}

impl<C: ICatalogLookup> DynamicThresholdFactCheckerFactory<C> {
    pub fn new(checks: Vec<CheckDefinition>, catalog: Arc<C>) -> Self {
        Self {
            checks: checks.into(),
            catalog,
            threshold_source: ThresholdSource::default(),
            default_namespace: Arc::from(DEFAULT_NAMESPACE),
        }
    }

    /// Build from a `[checker]` config section. Fails if the config does not validate.
    pub fn from_config(config: &CheckerConfig, catalog: Arc<C>) -> InsightsResult<Self> {
        config.validate()?;
        Ok(Self::new(config.checks.clone(), catalog)
            .with_threshold_source(config.threshold_source)
            .with_default_namespace(config.default_namespace.as_str()))
    }

    pub fn with_threshold_source(mut self, threshold_source: ThresholdSource) -> Self {
        self.threshold_source = threshold_source;
        self
    }

    pub fn with_default_namespace(mut self, namespace: &str) -> Self {
        self.default_namespace = Arc::from(namespace);
        self
    }

    pub fn checks(&self) -> &[CheckDefinition] {
        &self.checks
    }
}

impl<C, S> IFactCheckerFactory<S> for DynamicThresholdFactCheckerFactory<C>
where
    C: ICatalogLookup,
    S: IFactStore,
{
    type Checker = DynamicThresholdFactChecker<C, S>;

    fn construct(&self, repository: Arc<S>) -> Self::Checker {
        DynamicThresholdFactChecker::new(
            Arc::clone(&self.checks),
            Arc::clone(&self.catalog),
            repository,
            self.threshold_source,
            Arc::clone(&self.default_namespace),
        )
    }
}

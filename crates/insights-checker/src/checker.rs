//! DynamicThresholdFactChecker — evaluates configured checks for one entity.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::{debug, info, warn};

use insights_core::config::ThresholdSource;
use insights_core::errors::{CheckerError, InsightsResult};
use insights_core::models::{DEFAULT_ENTITY_KIND, SYSTEM_KIND};
use insights_core::traits::{ICatalogLookup, IFactChecker, IFactStore};
use insights_core::{
    CheckDefinition, CheckResult, CheckValidationResponse, Entity, EntityRef, FactRecord,
    FactSnapshot, FactValue,
};

use crate::operators::Operator;
use crate::threshold::Threshold;

/// A checker bound to one fact store. Built by
/// [`DynamicThresholdFactCheckerFactory::construct`](crate::DynamicThresholdFactCheckerFactory).
///
/// Stateless per call: thresholds, operators, and facts are read fresh on
/// every [`run_checks`](IFactChecker::run_checks).
pub struct DynamicThresholdFactChecker<C, S> {
    checks: Arc<[CheckDefinition]>,
    catalog: Arc<C>,
    repository: Arc<S>,
    threshold_source: ThresholdSource,
    default_namespace: Arc<str>,
}

impl<C: ICatalogLookup, S: IFactStore> DynamicThresholdFactChecker<C, S> {
    pub(crate) fn new(
        checks: Arc<[CheckDefinition]>,
        catalog: Arc<C>,
        repository: Arc<S>,
        threshold_source: ThresholdSource,
        default_namespace: Arc<str>,
    ) -> Self {
        Self {
            checks,
            catalog,
            repository,
            threshold_source,
            default_namespace,
        }
    }

    pub fn threshold_source(&self) -> ThresholdSource {
        self.threshold_source
    }

    /// Resolve the entity whose annotations hold thresholds and operators:
    /// the parent system, or the entity itself in `ThresholdSource::Entity` mode.
    async fn resolve_annotation_holder(&self, entity_ref: &EntityRef) -> InsightsResult<Entity> {
        let entity = self
            .catalog
            .get_entity_by_ref(entity_ref)
            .await?
            .ok_or_else(|| CheckerError::EntityNotFound {
                entity_ref: entity_ref.to_string(),
            })?;

        if self.threshold_source == ThresholdSource::Entity {
            debug!(entity = %entity_ref, "reading thresholds from entity annotations");
            return Ok(entity);
        }

        let system = entity
            .system()
            .ok_or_else(|| CheckerError::MissingSystemReference {
                entity_ref: entity_ref.to_string(),
            })?;
        let system_ref = EntityRef::parse_with_defaults(system, SYSTEM_KIND, entity.namespace())?;
        debug!(entity = %entity_ref, system = %system_ref, "resolving system for thresholds");

        let system_entity = self
            .catalog
            .get_entity_by_ref(&system_ref)
            .await?
            .ok_or_else(|| CheckerError::SystemNotFound {
                system_ref: system_ref.to_string(),
                entity_ref: entity_ref.to_string(),
            })?;
        Ok(system_entity)
    }

    fn selected_checks<'a>(&'a self, check_ids: Option<&[String]>) -> Vec<&'a CheckDefinition> {
        match check_ids {
            Some(ids) if !ids.is_empty() => self
                .checks
                .iter()
                .filter(|check| ids.iter().any(|id| *id == check.id))
                .collect(),
            _ => self.checks.iter().collect(),
        }
    }

    fn evaluate_check(
        check: &CheckDefinition,
        holder: &Entity,
        facts: &HashMap<String, FactSnapshot>,
        entity_ref: &EntityRef,
    ) -> CheckResult {
        let Some(threshold) =
            Threshold::from_annotation(holder.annotation(&check.annotation_key_threshold))
        else {
            warn!(
                check = %check.id,
                entity = %entity_ref,
                holder = %holder.entity_ref(),
                annotation = %check.annotation_key_threshold,
                "threshold annotation not set, check fails"
            );
            return CheckResult::unresolved(check.clone());
        };

        let Some(operator_name) = holder
            .annotation(&check.annotation_key_operator)
            .filter(|name| !name.trim().is_empty())
        else {
            warn!(
                check = %check.id,
                entity = %entity_ref,
                holder = %holder.entity_ref(),
                annotation = %check.annotation_key_operator,
                "operator annotation not set, check fails"
            );
            return CheckResult::unresolved(check.clone());
        };

        let raw = match (check.retriever_id(), check.fact_name()) {
            (Some(retriever), Some(fact)) => {
                facts.get(retriever).and_then(|snapshot| snapshot.fact(fact))
            }
            _ => None,
        };
        if raw.is_none() {
            warn!(
                check = %check.id,
                entity = %entity_ref,
                fact_ids = ?check.fact_ids,
                "fact value not recorded"
            );
        }
        let value = FactValue::from_json(raw);

        let result = match Operator::parse(operator_name) {
            Some(operator) => operator.evaluate(&value, &threshold),
            None => {
                warn!(
                    check = %check.id,
                    entity = %entity_ref,
                    operator = operator_name,
                    "unknown operator, check fails"
                );
                false
            }
        };

        info!(
            check = %check.id,
            entity = %entity_ref,
            threshold = %threshold,
            operator = operator_name,
            value = ?value,
            result,
            "check evaluated"
        );

        let mut records = BTreeMap::new();
        if let Some(retriever) = check.retriever_id() {
            records.insert(retriever.to_string(), FactRecord::new(retriever, value));
        }
        CheckResult {
            check: check.clone(),
            facts: records,
            result,
        }
    }
}

impl<C: ICatalogLookup, S: IFactStore> IFactChecker for DynamicThresholdFactChecker<C, S> {
    async fn run_checks(
        &self,
        entity_ref: &str,
        check_ids: Option<&[String]>,
    ) -> InsightsResult<Vec<CheckResult>> {
        let entity_ref = EntityRef::parse_with_defaults(
            entity_ref,
            DEFAULT_ENTITY_KIND,
            &self.default_namespace,
        )?;
        let holder = self.resolve_annotation_holder(&entity_ref).await?;

        let checks = self.selected_checks(check_ids);
        if checks.is_empty() {
            debug!(entity = %entity_ref, "no checks selected");
            return Ok(Vec::new());
        }

        // One batched fetch for every retriever the selected checks read from.
        let mut retriever_ids: Vec<String> = Vec::new();
        for retriever in checks.iter().filter_map(|check| check.retriever_id()) {
            if !retriever_ids.iter().any(|id| id == retriever) {
                retriever_ids.push(retriever.to_string());
            }
        }
        let facts = if retriever_ids.is_empty() {
            HashMap::new()
        } else {
            self.repository
                .get_latest_facts(&retriever_ids, &entity_ref)
                .await?
        };

        Ok(checks
            .into_iter()
            .map(|check| Self::evaluate_check(check, &holder, &facts, &entity_ref))
            .collect())
    }

    fn validate(&self, check: &CheckDefinition) -> CheckValidationResponse {
        check.validate()
    }

    fn get_checks(&self) -> &[CheckDefinition] {
        &self.checks
    }
}

//! Entity builders.

use std::collections::BTreeMap;

use insights_core::models::EntityMetadata;
use insights_core::Entity;
use serde_json::Value;

pub struct EntityBuilder {
    entity: Entity,
}

impl EntityBuilder {
    pub fn new(kind: &str, name: &str) -> Self {
        Self {
            entity: Entity {
                api_version: "backstage.io/v1alpha1".to_string(),
                kind: kind.to_string(),
                metadata: EntityMetadata {
                    name: name.to_string(),
                    annotations: BTreeMap::new(),
                    ..Default::default()
                },
                spec: serde_json::Map::new(),
            },
        }
    }

    pub fn namespace(mut self, namespace: &str) -> Self {
        self.entity.metadata.namespace = Some(namespace.to_string());
        self
    }

    pub fn annotation(mut self, key: &str, value: &str) -> Self {
        self.entity
            .metadata
            .annotations
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn spec(mut self, key: &str, value: Value) -> Self {
        self.entity.spec.insert(key.to_string(), value);
        self
    }

    pub fn system(self, system: &str) -> Self {
        self.spec("system", Value::from(system))
    }

    pub fn build(self) -> Entity {
        self.entity
    }
}

/// A `Component` in the default namespace, optionally owned by `system`.
pub fn component(name: &str, system: Option<&str>) -> Entity {
    let builder = EntityBuilder::new("Component", name);
    match system {
        Some(system) => builder.system(system).build(),
        None => builder.build(),
    }
}

/// A `System` in the default namespace carrying `annotations`.
pub fn system(name: &str, annotations: &[(&str, &str)]) -> Entity {
    annotations
        .iter()
        .fold(EntityBuilder::new("System", name), |builder, (key, value)| {
            builder.annotation(key, value)
        })
        .build()
}

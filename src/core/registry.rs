use crate::core::engine::SkillEngine;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Skills available to a host, keyed by their display name.
#[derive(Clone, Default)]
pub struct SkillRegistry {
    engines: Arc<BTreeMap<String, SkillEngine>>,
}

impl SkillRegistry {
    pub fn new(engines: Vec<SkillEngine>) -> Self {
        let engines = engines
            .into_iter()
            .map(|engine| (engine.name().to_string(), engine))
            .collect();
        Self {
            engines: Arc::new(engines),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SkillEngine> {
        self.engines.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.engines.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

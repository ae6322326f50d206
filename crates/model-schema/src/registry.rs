use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::Model;

/// Lookup of model definitions by identifier.
pub trait ModelRegistry {
    fn get(&self, id: &str) -> Option<&Model>;
}

impl ModelRegistry for HashMap<String, Model> {
    fn get(&self, id: &str) -> Option<&Model> {
        HashMap::get(self, id)
    }
}

impl ModelRegistry for IndexMap<String, Model> {
    fn get(&self, id: &str) -> Option<&Model> {
        IndexMap::get(self, id)
    }
}

/// Models keyed by id, in insertion order.
///
/// Serialises as a JSON object mapping id to definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Models {
    models: IndexMap<String, Model>,
}

impl Models {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a model under its own id, returning any model it replaced.
    pub fn insert(&mut self, model: Model) -> Option<Model> {
        self.models.insert(model.id.clone(), model)
    }

    pub fn with(mut self, model: Model) -> Self {
        self.insert(model);
        self
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl ModelRegistry for Models {
    fn get(&self, id: &str) -> Option<&Model> {
        self.models.get(id)
    }
}

impl FromIterator<Model> for Models {
    fn from_iter<I: IntoIterator<Item = Model>>(iter: I) -> Self {
        let mut models = Models::new();
        for model in iter {
            models.insert(model);
        }
        models
    }
}

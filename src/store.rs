//! Named value trees mutated by instruction batches.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use varpath_types::VariableId;

/// Maps each variable to the root of its value tree.
///
/// Entries are only ever replaced as a whole. Updates that target the same
/// variable must be serialized by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableStore {
    variables: HashMap<VariableId, Value>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &VariableId) -> Option<&Value> {
        self.variables.get(id)
    }

    /// Stores `value` under `id`, returning the previous tree if there was one.
    pub fn replace(&mut self, id: VariableId, value: Value) -> Option<Value> {
        self.variables.insert(id, value)
    }

    pub fn remove(&mut self, id: &VariableId) -> Option<Value> {
        self.variables.remove(id)
    }

    pub fn contains(&self, id: &VariableId) -> bool {
        self.variables.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VariableId, &Value)> {
        self.variables.iter()
    }
}

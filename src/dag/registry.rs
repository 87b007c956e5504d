// src/dag/registry.rs

//! Name ↔ id translation for tasks.

use std::collections::HashMap;

use tracing::trace;

use crate::document::DependencyPair;
use crate::types::{TaskId, TaskName};

/// Assigns each distinct task name a dense [`TaskId`].
///
/// Ids are handed out sequentially in the order names are first interned, so
/// a registry built from the same pair list always yields the same ids.
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    ids: HashMap<TaskName, TaskId>,
    names: Vec<TaskName>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a pair list.
    ///
    /// Within each pair the child is interned before the parent; graph shape
    /// and batch ordering depend on this.
    pub fn from_pairs(pairs: &[DependencyPair]) -> Self {
        let mut registry = Self::new();
        for pair in pairs {
            registry.intern(&pair.child);
            registry.intern(&pair.parent);
        }
        registry
    }

    /// Return the id for `name`, allocating the next one if it is new.
    pub fn intern(&mut self, name: &str) -> TaskId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }

        let id = TaskId::new(self.names.len());
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        trace!(task = %name, %id, "registered task");
        id
    }

    /// Id previously assigned to `name`, if any.
    pub fn id_of(&self, name: &str) -> Option<TaskId> {
        self.ids.get(name).copied()
    }

    /// Name for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this registry. Ids only come from
    /// [`intern`](Self::intern), so this indicates an internal bug rather than
    /// bad input.
    pub fn name_of(&self, id: TaskId) -> &str {
        match self.get_name(id) {
            Some(name) => name,
            None => panic!(
                "task id {id} out of range (registry holds {} tasks)",
                self.names.len()
            ),
        }
    }

    /// Non-panicking variant of [`name_of`](Self::name_of).
    pub fn get_name(&self, id: TaskId) -> Option<&str> {
        self.names.get(id.index()).map(|s| s.as_str())
    }

    /// Number of distinct tasks registered so far.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// All task names in id order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    /// All `(id, name)` entries in id order.
    pub fn entries(&self) -> impl Iterator<Item = (TaskId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (TaskId::new(i), name.as_str()))
    }
}

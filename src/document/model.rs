// src/document/model.rs

use serde::{Deserialize, Deserializer, Serialize};

use crate::dag::BatchSequence;
use crate::types::TaskName;

/// Input document: the list of dependency pairs.
///
/// ```json
/// {
///   "TaskParentChildPairs": [
///     { "ParentTask": "A", "ChildTask": "B" }
///   ]
/// }
/// ```
///
/// A missing or `null` `TaskParentChildPairs` value reads as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDocument {
    #[serde(
        rename = "TaskParentChildPairs",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub pairs: Vec<DependencyPair>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `ChildTask` depends on `ParentTask`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyPair {
    #[serde(rename = "ParentTask")]
    pub parent: TaskName,

    #[serde(rename = "ChildTask")]
    pub child: TaskName,
}

impl DependencyPair {
    pub fn new(parent: impl Into<TaskName>, child: impl Into<TaskName>) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
        }
    }
}

/// Output document: the sorted batches.
///
/// Tasks inside one inner array may run simultaneously; arrays run in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSequenceDocument {
    #[serde(rename = "TaskSequenceArray")]
    pub batches: BatchSequence,
}

impl From<BatchSequence> for TaskSequenceDocument {
    fn from(batches: BatchSequence) -> Self {
        Self { batches }
    }
}

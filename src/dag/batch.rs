// src/dag/batch.rs

//! Result types produced by the [`BatchScheduler`](crate::dag::BatchScheduler).

use std::fmt;

use crate::types::{TaskId, TaskName};

/// Ordered batches of task names. Batch `k` holds the tasks that become
/// runnable once every earlier batch has completed.
pub type BatchSequence = Vec<Vec<TaskName>>;

/// Structured result of a single scheduler step.
///
/// Useful for tests that want to drive the sort batch by batch and make
/// assertions about what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchStep {
    /// Zero-based index of the emitted batch.
    pub index: usize,
    /// Tasks in this batch, ascending by id.
    pub tasks: Vec<TaskId>,
    /// Outstanding prerequisite relations before this batch was discharged.
    pub edges_before: usize,
    /// Outstanding prerequisite relations after this batch was discharged.
    pub edges_after: usize,
}

/// Diagnostic attached to a failed sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Tasks that could never become ready, in id order.
    pub blocked: Vec<TaskName>,
    /// Each strongly connected group of tasks that forms a cycle.
    ///
    /// Tasks that are only blocked downstream of a cycle appear in
    /// `blocked` but not here.
    pub cycles: Vec<Vec<TaskName>>,
    /// Batches that were computed before the scheduler got stuck. Valid as a
    /// prefix, never as a final answer.
    pub partial: BatchSequence,
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cycles.is_empty() {
            return write!(f, "blocked tasks: {}", self.blocked.join(", "));
        }

        let groups: Vec<String> = self
            .cycles
            .iter()
            .map(|group| format!("[{}]", group.join(" <-> ")))
            .collect();
        write!(f, "cycles: {}", groups.join(", "))
    }
}

/// Terminal outcome of a sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    /// Every task was placed; the sequence is complete.
    Sorted(BatchSequence),
    /// A cycle prevents a full ordering.
    Cycle(CycleReport),
}

impl SortOutcome {
    pub fn is_sorted(&self) -> bool {
        matches!(self, SortOutcome::Sorted(_))
    }

    /// Batches on success, `None` on a cycle.
    pub fn batches(&self) -> Option<&BatchSequence> {
        match self {
            SortOutcome::Sorted(batches) => Some(batches),
            SortOutcome::Cycle(_) => None,
        }
    }

    /// Convert into a crate `Result`, mapping a cycle to
    /// [`TaskSortError::CyclicDependency`](crate::errors::TaskSortError::CyclicDependency).
    pub fn into_result(self) -> crate::errors::Result<BatchSequence> {
        match self {
            SortOutcome::Sorted(batches) => Ok(batches),
            SortOutcome::Cycle(report) => Err(crate::errors::TaskSortError::CyclicDependency(report)),
        }
    }
}

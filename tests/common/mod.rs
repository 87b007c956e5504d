#![allow(dead_code)]

pub use tasksort_test_utils::{builders, checks, init_tracing};

use tasksort::dag::{CycleReport, SortOutcome};

/// Unwrap a successful sort or fail the test with the cycle report.
pub fn expect_sorted(outcome: SortOutcome) -> Vec<Vec<String>> {
    match outcome {
        SortOutcome::Sorted(batches) => batches,
        SortOutcome::Cycle(report) => panic!("expected a sorted sequence, got cycle: {report}"),
    }
}

/// Unwrap a cycle report or fail the test with the batches.
pub fn expect_cycle(outcome: SortOutcome) -> CycleReport {
    match outcome {
        SortOutcome::Cycle(report) => report,
        SortOutcome::Sorted(batches) => panic!("expected a cycle, got batches: {batches:?}"),
    }
}

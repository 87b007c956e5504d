// tests/cycle_detection.rs
mod common;
use crate::common::builders::pairs;
use crate::common::{expect_cycle, init_tracing};

use std::error::Error;

use tasksort::document::DependencyPair;

use tasksort::dag::{BatchScheduler, SortOutcome, sort_pairs};
use tasksort::errors::TaskSortError;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn mutual_dependency_is_a_cycle() -> TestResult {
    init_tracing();

    let report = expect_cycle(sort_pairs(&pairs(&[("A", "B"), ("B", "A")])));

    assert!(report.partial.is_empty());
    assert_eq!(report.blocked, vec!["B", "A"]);
    assert_eq!(report.cycles, vec![vec!["B", "A"]]);

    Ok(())
}

#[test]
fn self_dependency_is_a_cycle() -> TestResult {
    init_tracing();

    let report = expect_cycle(sort_pairs(&pairs(&[("A", "A")])));

    assert_eq!(report.blocked, vec!["A"]);
    assert_eq!(report.cycles, vec![vec!["A"]]);
    assert_eq!(report.to_string(), "cycles: [A]");

    Ok(())
}

#[test]
fn no_starting_point_is_reported_like_any_other_cycle() -> TestResult {
    init_tracing();

    let deps = pairs(&[("A", "B"), ("B", "C"), ("C", "A")]);
    let mut scheduler = BatchScheduler::from_pairs(&deps);

    assert!(scheduler.ready().is_empty());
    assert!(scheduler.is_stuck());
    assert!(scheduler.step().is_none());

    let report = expect_cycle(scheduler.run());
    assert!(report.partial.is_empty());
    assert_eq!(report.cycles.len(), 1);
    assert_eq!(report.cycles[0].len(), 3);

    Ok(())
}

#[test]
fn cycle_after_valid_prefix_keeps_prefix_for_diagnostics() -> TestResult {
    init_tracing();

    // S -> A <-> B -> C
    let deps = pairs(&[("S", "A"), ("A", "B"), ("B", "A"), ("B", "C")]);
    let report = expect_cycle(sort_pairs(&deps));

    assert_eq!(report.partial, vec![vec!["S"]]);
    assert_eq!(report.blocked, vec!["A", "B", "C"]);
    assert_eq!(report.cycles, vec![vec!["A", "B"]]);
    assert_eq!(report.to_string(), "cycles: [A <-> B]");

    Ok(())
}

#[test]
fn independent_cycles_are_reported_separately() -> TestResult {
    init_tracing();

    let deps = pairs(&[("A", "B"), ("B", "A"), ("X", "Y"), ("Y", "X"), ("R", "Q")]);
    let report = expect_cycle(sort_pairs(&deps));

    assert_eq!(report.partial, vec![vec!["R"], vec!["Q"]]);
    assert_eq!(report.cycles.len(), 2);
    assert!(report.cycles.contains(&vec!["B".to_string(), "A".to_string()]));
    assert!(report.cycles.contains(&vec!["Y".to_string(), "X".to_string()]));

    Ok(())
}

#[test]
fn cycle_is_a_distinct_outcome_not_an_empty_sequence() -> TestResult {
    init_tracing();

    let outcome = sort_pairs(&pairs(&[("A", "B"), ("B", "A")]));
    assert!(!outcome.is_sorted());
    assert!(outcome.batches().is_none());
    assert!(matches!(outcome, SortOutcome::Cycle(_)));

    match outcome.into_result() {
        Err(TaskSortError::CyclicDependency(report)) => {
            let msg = TaskSortError::CyclicDependency(report).to_string();
            assert!(msg.contains("Cyclical dependencies present"));
            assert!(msg.contains("A"));
        }
        Err(e) => panic!("Expected CyclicDependency, got: {:?}", e),
        Ok(b) => panic!("Expected error, got Ok({:?})", b),
    }

    Ok(())
}

/// `t0 -> t1 -> ... -> t{n-1} -> t0`
fn ring(n: usize) -> Vec<DependencyPair> {
    (0..n)
        .map(|i| DependencyPair::new(format!("t{i}"), format!("t{}", (i + 1) % n)))
        .collect()
}

#[test]
fn long_dependency_ring_is_reported_without_crashing() -> TestResult {
    init_tracing();

    let n = 100_000;
    let report = expect_cycle(sort_pairs(&ring(n)));

    assert!(report.partial.is_empty());
    assert_eq!(report.blocked.len(), n);
    assert_eq!(report.cycles.len(), 1);
    assert_eq!(report.cycles[0].len(), n);

    Ok(())
}

#[test]
fn long_ring_behind_valid_prefix_keeps_prefix() -> TestResult {
    init_tracing();

    let n = 100_000;
    let mut deps = ring(n);
    deps.push(DependencyPair::new("start", "t0"));
    deps.push(DependencyPair::new("start", "side"));

    let report = expect_cycle(sort_pairs(&deps));

    assert_eq!(report.partial, vec![vec!["start"], vec!["side"]]);
    assert_eq!(report.blocked.len(), n);
    assert_eq!(report.cycles.len(), 1);

    Ok(())
}

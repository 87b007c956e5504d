use std::collections::HashMap;

use proptest::prelude::*;
use tasksort::dag::{BatchScheduler, SortOutcome, sort_pairs};
use tasksort::document::DependencyPair;
use tasksort_test_utils::checks::check_sequence;

// Strategy to generate an acyclic pair list.
// We ensure acyclicity by only letting task_j depend on task_i when i < j.
fn dag_pairs_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<DependencyPair>> {
    (2..=max_tasks).prop_flat_map(|num_tasks| {
        proptest::collection::vec((0..num_tasks, 0..num_tasks), 0..num_tasks * 3).prop_map(
            |raw| {
                raw.into_iter()
                    .filter(|(a, b)| a != b)
                    .map(|(a, b)| {
                        let (parent, child) = (a.min(b), a.max(b));
                        DependencyPair::new(format!("task_{parent}"), format!("task_{child}"))
                    })
                    .collect()
            },
        )
    })
}

/// Longest chain of parents above each task; this is the batch it must land in.
fn expected_depths(pairs: &[DependencyPair]) -> HashMap<String, usize> {
    let index = |name: &str| -> usize { name["task_".len()..].parse().unwrap() };

    let mut sorted: Vec<&DependencyPair> = pairs.iter().collect();
    sorted.sort_by_key(|p| index(&p.child));

    let mut depth: HashMap<String, usize> = HashMap::new();
    for pair in pairs {
        depth.entry(pair.parent.clone()).or_insert(0);
        depth.entry(pair.child.clone()).or_insert(0);
    }
    for pair in sorted {
        let candidate = depth[&pair.parent] + 1;
        let entry = depth.get_mut(&pair.child).unwrap();
        if candidate > *entry {
            *entry = candidate;
        }
    }
    depth
}

proptest! {
    #[test]
    fn acyclic_inputs_always_sort_validly(pairs in dag_pairs_strategy(12)) {
        let batches = match sort_pairs(&pairs) {
            SortOutcome::Sorted(b) => b,
            SortOutcome::Cycle(report) => {
                return Err(TestCaseError::fail(format!("unexpected cycle: {report}")));
            }
        };

        prop_assert!(check_sequence(&pairs, &batches).is_ok(), "{:?}", check_sequence(&pairs, &batches));

        // Each task lands in the earliest batch its prerequisites allow.
        let depths = expected_depths(&pairs);
        for (index, batch) in batches.iter().enumerate() {
            for task in batch {
                prop_assert_eq!(depths[task], index, "task {} in wrong batch", task);
            }
        }
    }

    #[test]
    fn sorting_is_deterministic(pairs in dag_pairs_strategy(10)) {
        prop_assert_eq!(sort_pairs(&pairs), sort_pairs(&pairs));
    }

    #[test]
    fn outstanding_edges_shrink_until_resolved(pairs in dag_pairs_strategy(10)) {
        let mut scheduler = BatchScheduler::from_pairs(&pairs);
        let task_count = scheduler.registry().count();
        let mut steps = 0;

        while let Some(step) = scheduler.step() {
            steps += 1;
            prop_assert!(steps <= task_count, "more batches than tasks");
            prop_assert!(
                step.edges_after < step.edges_before || step.edges_after == 0,
                "edges did not shrink: {} -> {}", step.edges_before, step.edges_after
            );
        }

        prop_assert!(scheduler.graph().is_fully_resolved());
    }

    #[test]
    fn reversing_an_edge_creates_a_reported_cycle(
        pairs in dag_pairs_strategy(10),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!pairs.is_empty());

        let edge = pick.get(&pairs).clone();
        let mut with_cycle = pairs.clone();
        with_cycle.push(DependencyPair::new(edge.child.clone(), edge.parent.clone()));

        match sort_pairs(&with_cycle) {
            SortOutcome::Cycle(report) => {
                prop_assert!(report.blocked.contains(&edge.parent));
                prop_assert!(report.blocked.contains(&edge.child));
                prop_assert!(report.cycles.iter().any(|group| {
                    group.contains(&edge.parent) && group.contains(&edge.child)
                }), "no cycle group contains both ends of the reversed edge");
            }
            SortOutcome::Sorted(b) => {
                return Err(TestCaseError::fail(format!("expected cycle, got {b:?}")));
            }
        }
    }
}

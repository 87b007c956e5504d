//! Structural checks on a computed batch sequence.

use std::collections::{BTreeSet, HashMap};

use anyhow::{Result, bail};
use tasksort::dag::BatchSequence;
use tasksort::document::DependencyPair;

/// Verify that `batches` is a valid ordering of `pairs`:
/// - every task named in `pairs` appears exactly once
/// - no unknown task appears
/// - every parent sits in a strictly earlier batch than its child
pub fn check_sequence(pairs: &[DependencyPair], batches: &BatchSequence) -> Result<()> {
    let mut position: HashMap<&str, usize> = HashMap::new();

    for (index, batch) in batches.iter().enumerate() {
        if batch.is_empty() {
            bail!("batch {index} is empty");
        }
        for task in batch {
            if let Some(prev) = position.insert(task.as_str(), index) {
                bail!("task '{task}' appears in batch {prev} and batch {index}");
            }
        }
    }

    let expected: BTreeSet<&str> = pairs
        .iter()
        .flat_map(|p| [p.parent.as_str(), p.child.as_str()])
        .collect();
    let actual: BTreeSet<&str> = position.keys().copied().collect();
    if expected != actual {
        bail!("task membership mismatch: expected {expected:?}, got {actual:?}");
    }

    for pair in pairs {
        let parent = position[pair.parent.as_str()];
        let child = position[pair.child.as_str()];
        if parent >= child {
            bail!(
                "'{}' (batch {child}) must come after '{}' (batch {parent})",
                pair.child,
                pair.parent
            );
        }
    }

    Ok(())
}

/// Sort each batch so order-insensitive comparisons read naturally.
pub fn normalized(batches: &BatchSequence) -> Vec<Vec<String>> {
    batches
        .iter()
        .map(|batch| {
            let mut batch = batch.clone();
            batch.sort();
            batch
        })
        .collect()
}

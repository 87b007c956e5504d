// src/dag/mod.rs

//! Dependency resolution.
//!
//! - [`registry`] maps task names to dense ids.
//! - [`graph`] holds the prerequisite relations between ids.
//! - [`scheduler`] runs the batched topological sort.
//! - [`batch`] defines the scheduler's result types.
//! - [`cycles`] names the tasks involved when a sort fails.

pub mod batch;
pub mod cycles;
pub mod graph;
pub mod registry;
pub mod scheduler;

pub use batch::{BatchSequence, BatchStep, CycleReport, SortOutcome};
pub use graph::DependencyGraph;
pub use registry::TaskRegistry;
pub use scheduler::{BatchScheduler, sort_pairs};

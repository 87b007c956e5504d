use std::mem;

use tracing::{debug, info, warn};

use crate::dag::batch::{BatchSequence, BatchStep, CycleReport, SortOutcome};
use crate::dag::cycles::find_cycles;
use crate::dag::graph::DependencyGraph;
use crate::dag::registry::TaskRegistry;
use crate::document::DependencyPair;
use crate::types::{TaskId, TaskName};

/// Batched topological sort (layer-by-layer Kahn's algorithm).
///
/// The scheduler owns the registry and graph for one computation and prunes
/// graph edges in place as batches are emitted. It is responsible for:
/// - seeding the ready set with tasks that have no prerequisites
/// - emitting the ready set as a batch and discharging its outgoing edges
/// - collecting tasks that become ready into the next batch
/// - telling a finished sort apart from one stuck on a cycle
#[derive(Debug)]
pub struct BatchScheduler {
    registry: TaskRegistry,
    graph: DependencyGraph,
    /// Tasks with no outstanding prerequisites that have not been emitted.
    ready: Vec<TaskId>,
    /// Batches emitted so far, already mapped to names.
    batches: BatchSequence,
}

impl BatchScheduler {
    /// Construct a scheduler over an already-built registry and graph.
    pub fn new(registry: TaskRegistry, graph: DependencyGraph) -> Self {
        assert_eq!(
            registry.count(),
            graph.vertex_count(),
            "registry and graph disagree on task count"
        );

        let ready = graph.roots();
        debug!(
            tasks = registry.count(),
            edges = graph.edge_count(),
            roots = ready.len(),
            "scheduler: initial ready set computed"
        );

        Self {
            registry,
            graph,
            ready,
            batches: Vec::new(),
        }
    }

    /// Intern every name in `pairs` (child before parent) and build the graph.
    pub fn from_pairs(pairs: &[DependencyPair]) -> Self {
        let registry = TaskRegistry::from_pairs(pairs);
        let graph = DependencyGraph::from_pairs(&registry, pairs);
        Self::new(registry, graph)
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Batches emitted so far.
    pub fn batches(&self) -> &BatchSequence {
        &self.batches
    }

    /// Tasks that will form the next batch, ascending by id.
    pub fn ready(&self) -> &[TaskId] {
        &self.ready
    }

    /// `true` when no further batch can be emitted.
    pub fn is_exhausted(&self) -> bool {
        self.ready.is_empty()
    }

    /// `true` when the scheduler is exhausted but edges remain, i.e. the
    /// remaining tasks sit on or behind a cycle.
    pub fn is_stuck(&self) -> bool {
        self.is_exhausted() && !self.graph.is_fully_resolved()
    }

    /// Emit the next batch and discharge its outgoing edges.
    ///
    /// Returns `None` once the ready set is empty.
    pub fn step(&mut self) -> Option<BatchStep> {
        if self.ready.is_empty() {
            return None;
        }

        // Snapshot before mutating so discharges only feed the next batch.
        let batch = mem::take(&mut self.ready);
        let edges_before = self.graph.edge_count();
        let mut next = Vec::new();

        for &v in &batch {
            let dependents: Vec<TaskId> = self.graph.dependents_of(v).iter().copied().collect();
            for u in dependents {
                self.graph.remove_prerequisite(u, v);
                if self.graph.has_no_prerequisites(u) {
                    next.push(u);
                }
            }
        }

        next.sort_unstable();
        self.ready = next;

        let index = self.batches.len();
        let names: Vec<TaskName> = batch
            .iter()
            .map(|id| self.registry.name_of(*id).to_string())
            .collect();
        debug!(batch = index, tasks = ?names, "scheduler: emitted batch");
        self.batches.push(names);

        Some(BatchStep {
            index,
            tasks: batch,
            edges_before,
            edges_after: self.graph.edge_count(),
        })
    }

    /// Emit every remaining batch and classify the result.
    pub fn run(mut self) -> SortOutcome {
        while self.step().is_some() {}

        if self.graph.is_fully_resolved() {
            info!(
                tasks = self.registry.count(),
                batches = self.batches.len(),
                "scheduler: all tasks placed"
            );
            return SortOutcome::Sorted(self.batches);
        }

        let report = self.cycle_report();
        warn!(
            blocked = report.blocked.len(),
            cycles = report.cycles.len(),
            completed_batches = report.partial.len(),
            "scheduler: cyclical dependencies present; task sequence cannot be sorted"
        );
        SortOutcome::Cycle(report)
    }

    fn cycle_report(self) -> CycleReport {
        let names = |ids: &[TaskId]| -> Vec<TaskName> {
            ids.iter()
                .map(|id| self.registry.name_of(*id).to_string())
                .collect()
        };

        let blocked = names(self.graph.unresolved().as_slice());
        let cycles = find_cycles(&self.graph)
            .iter()
            .map(|group| names(group.as_slice()))
            .collect();

        CycleReport {
            blocked,
            cycles,
            partial: self.batches,
        }
    }
}

/// Sort a dependency pair list in one call.
pub fn sort_pairs(pairs: &[DependencyPair]) -> SortOutcome {
    BatchScheduler::from_pairs(pairs).run()
}

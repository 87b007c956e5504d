// src/dag/graph.rs

use std::collections::BTreeSet;

use crate::dag::registry::TaskRegistry;
use crate::document::DependencyPair;
use crate::types::TaskId;

/// Internal vertex structure: remaining prerequisites plus reverse adjacency.
#[derive(Debug, Clone, Default)]
struct DepNode {
    /// Parents this task still waits on.
    prerequisites: BTreeSet<TaskId>,
    /// Tasks that list this one as a prerequisite.
    dependents: BTreeSet<TaskId>,
}

/// Directed dependency graph over dense task ids.
///
/// Edges are stored from the child's side: each vertex keeps the set of
/// parents it still depends on. A mirrored `dependents` set lets the
/// scheduler discharge a finished task in O(out-degree).
///
/// The graph is not assumed to be acyclic; cycles surface when the
/// scheduler runs out of ready tasks with edges still outstanding.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<DepNode>,
    edge_count: usize,
}

impl DependencyGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            nodes: vec![DepNode::default(); vertex_count],
            edge_count: 0,
        }
    }

    /// Build a graph for every pair, using ids from a registry that has
    /// already interned all names in `pairs`.
    pub fn from_pairs(registry: &TaskRegistry, pairs: &[DependencyPair]) -> Self {
        let mut graph = Self::new(registry.count());

        for pair in pairs {
            let (child, parent) = match (registry.id_of(&pair.child), registry.id_of(&pair.parent)) {
                (Some(c), Some(p)) => (c, p),
                _ => panic!(
                    "dependency pair ({} -> {}) references a task missing from the registry",
                    pair.parent, pair.child
                ),
            };
            graph.add_prerequisite(child, parent);
        }

        graph
    }

    /// Record that `child` depends on `parent`.
    ///
    /// Re-adding an existing relation is a no-op. Returns `true` if the edge
    /// was new.
    pub fn add_prerequisite(&mut self, child: TaskId, parent: TaskId) -> bool {
        self.check(child);
        self.check(parent);

        let inserted = self.nodes[child.index()].prerequisites.insert(parent);
        if inserted {
            self.nodes[parent.index()].dependents.insert(child);
            self.edge_count += 1;
        }
        inserted
    }

    /// Drop the relation "`v` depends on `parent`". Returns `true` if it existed.
    pub fn remove_prerequisite(&mut self, v: TaskId, parent: TaskId) -> bool {
        self.check(v);
        self.check(parent);

        let removed = self.nodes[v.index()].prerequisites.remove(&parent);
        if removed {
            self.nodes[parent.index()].dependents.remove(&v);
            self.edge_count -= 1;
        }
        removed
    }

    /// Parents `v` still depends on.
    pub fn prerequisites_of(&self, v: TaskId) -> &BTreeSet<TaskId> {
        self.check(v);
        &self.nodes[v.index()].prerequisites
    }

    /// Tasks that still depend on `v`.
    pub fn dependents_of(&self, v: TaskId) -> &BTreeSet<TaskId> {
        self.check(v);
        &self.nodes[v.index()].dependents
    }

    pub fn has_no_prerequisites(&self, v: TaskId) -> bool {
        self.prerequisites_of(v).is_empty()
    }

    /// `true` once no vertex has an outstanding prerequisite.
    pub fn is_fully_resolved(&self) -> bool {
        self.edge_count == 0
    }

    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of outstanding prerequisite relations.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = TaskId> {
        (0..self.nodes.len()).map(TaskId::new)
    }

    /// Vertices that currently have no prerequisites, ascending.
    pub fn roots(&self) -> Vec<TaskId> {
        self.vertices()
            .filter(|v| self.has_no_prerequisites(*v))
            .collect()
    }

    /// Vertices that still have at least one prerequisite, ascending.
    pub fn unresolved(&self) -> Vec<TaskId> {
        self.vertices()
            .filter(|v| !self.has_no_prerequisites(*v))
            .collect()
    }

    fn check(&self, v: TaskId) {
        assert!(
            v.index() < self.nodes.len(),
            "task id {v} out of range (graph has {} vertices)",
            self.nodes.len()
        );
    }
}

// src/dag/cycles.rs

//! Naming the tasks that make a graph unsortable.

use petgraph::algo::kosaraju_scc;
use petgraph::graphmap::DiGraphMap;

use crate::dag::graph::DependencyGraph;
use crate::types::TaskId;

/// Find the groups of tasks that form cycles among the edges still present
/// in `graph`.
///
/// Edge direction: parent -> child. A group is reported when it has more
/// than one member, or a single member that depends on itself. Members are
/// sorted by id and groups are ordered by their smallest member.
pub fn find_cycles(graph: &DependencyGraph) -> Vec<Vec<TaskId>> {
    let mut pg: DiGraphMap<TaskId, ()> = DiGraphMap::new();

    for v in graph.unresolved() {
        pg.add_node(v);
        for parent in graph.prerequisites_of(v) {
            pg.add_edge(*parent, v, ());
        }
    }

    let mut cycles: Vec<Vec<TaskId>> = kosaraju_scc(&pg)
        .into_iter()
        .filter(|scc| scc.len() > 1 || pg.contains_edge(scc[0], scc[0]))
        .map(|mut scc| {
            scc.sort_unstable();
            scc
        })
        .collect();

    cycles.sort_by_key(|scc| scc[0]);
    cycles
}

// src/dag/cycles.rs

//! Cycle diagnostics for tasks the orderer could not place.

use std::collections::HashSet;

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::dag::graph::DependencyGraph;
use crate::dag::task::TaskName;

/// Extract the closed loops among the `unresolved` nodes.
///
/// Only edges between unresolved nodes are considered. A strongly connected
/// component counts as a loop when it has more than one member, or a single
/// member with a self edge. Members are listed in input order and loops are
/// ordered by their first member's input position.
pub fn find_cycles(graph: &DependencyGraph, unresolved: &[usize]) -> Vec<Vec<TaskName>> {
    let members: HashSet<usize> = unresolved.iter().copied().collect();

    // Edge direction: dependency -> dependent, same as the main graph.
    let mut sub: DiGraphMap<usize, ()> = DiGraphMap::new();
    for &idx in unresolved {
        sub.add_node(idx);
    }
    for (from, to) in graph.edges() {
        if members.contains(&from) && members.contains(&to) {
            sub.add_edge(from, to, ());
        }
    }

    let mut loops: Vec<Vec<usize>> = tarjan_scc(&sub)
        .into_iter()
        .filter(|scc| scc.len() > 1 || sub.contains_edge(scc[0], scc[0]))
        .map(|mut scc| {
            scc.sort_unstable();
            scc
        })
        .collect();
    loops.sort_unstable_by_key(|scc| scc[0]);

    loops
        .into_iter()
        .map(|scc| scc.into_iter().map(|idx| graph.name(idx).to_string()).collect())
        .collect()
}

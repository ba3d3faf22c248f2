// src/dag/scheduler.rs

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, warn};

use crate::dag::cycles::find_cycles;
use crate::dag::error::{ScheduleError, ScheduleResult};
use crate::dag::graph::DependencyGraph;
use crate::dag::task::{TaskName, TaskSpec};

/// A complete, dependency-respecting order for one request.
///
/// Serialises as `{"recommendedOrder": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub recommended_order: Vec<TaskName>,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.recommended_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommended_order.is_empty()
    }

    /// Zero-based position of `name` in the order, if scheduled.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.recommended_order.iter().position(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.recommended_order.iter().map(|s| s.as_str())
    }
}

/// Compute a linear execution order for `tasks`.
///
/// The result is a pure function of the input, including its order:
/// independent tasks keep their relative input order, and tasks released by
/// the same dependency follow the order in which they were declared.
///
/// Fails with [`ScheduleError::DuplicateTaskName`] before any ordering is
/// attempted, or with [`ScheduleError::CyclicDependency`] when some tasks can
/// never become ready.
pub fn schedule(tasks: &[TaskSpec]) -> ScheduleResult<Schedule> {
    let graph = DependencyGraph::build(tasks)?;
    let order = topological_order(&graph)?;

    let recommended_order = order
        .into_iter()
        .map(|idx| graph.name(idx).to_string())
        .collect();

    Ok(Schedule { recommended_order })
}

/// Kahn's algorithm over `graph` with a FIFO frontier.
///
/// Returns input positions in scheduled order.
pub fn topological_order(graph: &DependencyGraph) -> ScheduleResult<Vec<usize>> {
    let mut in_degree: Vec<usize> = (0..graph.len()).map(|idx| graph.in_degree(idx)).collect();
    let mut frontier: VecDeque<usize> = graph.roots().collect();
    let mut order = Vec::with_capacity(graph.len());

    debug!(roots = frontier.len(), "initial frontier");

    while let Some(current) = frontier.pop_front() {
        order.push(current);

        for &dependent in graph.dependents_of(current) {
            let remaining = &mut in_degree[dependent];
            debug_assert!(
                *remaining > 0,
                "in-degree underflow for task '{}'",
                graph.name(dependent)
            );
            *remaining -= 1;
            if *remaining == 0 {
                frontier.push_back(dependent);
            }
        }
    }

    if order.len() == graph.len() {
        debug!(tasks = order.len(), "schedule complete");
        return Ok(order);
    }

    // Anything never emitted still waits on at least one dependency.
    let unresolved: Vec<usize> = (0..graph.len())
        .filter(|&idx| in_degree[idx] > 0)
        .collect();
    let cycles = find_cycles(graph, &unresolved);
    let unresolved: Vec<TaskName> = unresolved
        .into_iter()
        .map(|idx| graph.name(idx).to_string())
        .collect();

    warn!(
        scheduled = order.len(),
        total = graph.len(),
        ?unresolved,
        ?cycles,
        "circular dependencies detected"
    );

    Err(ScheduleError::cyclic_dependency(unresolved, cycles))
}

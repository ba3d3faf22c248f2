// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::dag::error::{ScheduleError, ScheduleResult};
use crate::dag::task::{TaskName, TaskSpec};

/// Internal node structure: one per input task, stored at the task's input
/// position.
#[derive(Debug, Clone)]
struct DagNode {
    name: TaskName,
    /// Direct dependents (edge `self -> dependent`), in the order the
    /// dependents appear in the input.
    dependents: Vec<usize>,
    /// Number of distinct in-request dependencies.
    in_degree: usize,
}

/// Dependency graph for a single scheduling request.
///
/// Nodes live in an arena indexed by input position so that every traversal
/// is a deterministic function of input order. Edge `A -> B` means "A must be
/// ordered before B", i.e. `B` lists `A` in its dependencies.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    nodes: Vec<DagNode>,
    index: HashMap<TaskName, usize>,
    ignored_dependencies: usize,
}

impl DependencyGraph {
    /// Build the graph from an ordered task list.
    ///
    /// - Duplicate names are rejected with [`ScheduleError::DuplicateTaskName`].
    /// - Dependencies on names absent from `tasks` are dropped.
    /// - A dependency declared twice by the same task yields one edge.
    /// - Self-dependencies are kept as a self edge; the orderer reports them
    ///   as a cycle of size one.
    pub fn build(tasks: &[TaskSpec]) -> ScheduleResult<Self> {
        let mut nodes = Vec::with_capacity(tasks.len());
        let mut index = HashMap::with_capacity(tasks.len());

        // First pass: one node per task, rejecting repeated names.
        for (pos, task) in tasks.iter().enumerate() {
            if index.insert(task.name.clone(), pos).is_some() {
                return Err(ScheduleError::duplicate_task_name(&task.name));
            }
            nodes.push(DagNode {
                name: task.name.clone(),
                dependents: Vec::new(),
                in_degree: 0,
            });
        }

        // Second pass: wire dependency -> dependent edges.
        let mut ignored_dependencies = 0;
        for (pos, task) in tasks.iter().enumerate() {
            let mut seen: HashSet<usize> = HashSet::new();
            for dep in task.dependencies.iter() {
                match index.get(dep) {
                    Some(&dep_pos) => {
                        if !seen.insert(dep_pos) {
                            continue;
                        }
                        nodes[dep_pos].dependents.push(pos);
                        nodes[pos].in_degree += 1;
                    }
                    None => {
                        ignored_dependencies += 1;
                        warn!(
                            task = %task.name,
                            dep = %dep,
                            "dependency not present in request; ignoring"
                        );
                    }
                }
            }
        }

        debug!(
            tasks = nodes.len(),
            edges = nodes.iter().map(|n| n.in_degree).sum::<usize>(),
            ignored_dependencies,
            "built dependency graph"
        );

        Ok(Self {
            nodes,
            index,
            ignored_dependencies,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Name of the node at input position `idx`.
    ///
    /// Panics if `idx` is out of range; indices only come from this graph.
    pub fn name(&self, idx: usize) -> &str {
        &self.nodes[idx].name
    }

    /// Input position of the task called `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// All task names in input order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.name.as_str())
    }

    /// Direct dependents of `idx`, in input order.
    pub fn dependents_of(&self, idx: usize) -> &[usize] {
        &self.nodes[idx].dependents
    }

    /// Number of distinct in-request dependencies of `idx`.
    pub fn in_degree(&self, idx: usize) -> usize {
        self.nodes[idx].in_degree
    }

    /// Nodes without in-request dependencies, in input order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.in_degree == 0)
            .map(|(idx, _)| idx)
    }

    /// Every edge `(dependency, dependent)` as input positions.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(|(from, n)| n.dependents.iter().map(move |&to| (from, to)))
    }

    /// How many dependency references were dropped because they named a
    /// task outside the request.
    pub fn ignored_dependencies(&self) -> usize {
        self.ignored_dependencies
    }
}

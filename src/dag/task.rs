// src/dag/task.rs

//! Scheduling input: one named task plus the names it depends on.

/// Task names are plain strings, unique within one scheduling request.
pub type TaskName = String;

/// A single task as seen by the scheduler.
///
/// `estimated_hours` and `due_date` ride along for callers and dry-run
/// output; they never influence the computed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    pub name: TaskName,
    pub estimated_hours: Option<u32>,

    /// Opaque; never parsed.
    pub due_date: Option<String>,

    /// Names of tasks that must be ordered before this one.
    ///
    /// Names that do not appear in the same request are ignored.
    pub dependencies: Vec<TaskName>,
}

impl TaskSpec {
    /// A task with no metadata and no dependencies.
    pub fn new<N: Into<TaskName>>(name: N) -> Self {
        Self {
            name: name.into(),
            estimated_hours: None,
            due_date: None,
            dependencies: Vec::new(),
        }
    }

    /// A task with dependencies but no metadata.
    pub fn with_deps<N, I, D>(name: N, deps: I) -> Self
    where
        N: Into<TaskName>,
        I: IntoIterator<Item = D>,
        D: Into<TaskName>,
    {
        Self {
            dependencies: deps.into_iter().map(Into::into).collect(),
            ..Self::new(name)
        }
    }
}

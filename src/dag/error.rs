// src/dag/error.rs

//! Errors produced by the scheduler itself.
//!
//! Both kinds are caller data errors: the request is rejected as a whole and
//! no partial order is ever returned.

use thiserror::Error;

use crate::dag::task::TaskName;

/// Result type for scheduling operations.
pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScheduleError {
    /// Two or more tasks in one request share a name.
    #[error("duplicate task name '{name}' in scheduling request")]
    DuplicateTaskName {
        /// The offending name (first repeated occurrence in input order).
        name: TaskName,
    },

    /// Some tasks could not be ordered because they sit on, or downstream
    /// of, a dependency cycle.
    #[error("circular dependencies detected; unresolved tasks: {}", .unresolved.join(", "))]
    CyclicDependency {
        /// Every task left unordered, in input order.
        unresolved: Vec<TaskName>,
        /// The closed loops among `unresolved`. Tasks that are only blocked
        /// by a loop appear in `unresolved` but not here.
        cycles: Vec<Vec<TaskName>>,
    },
}

impl ScheduleError {
    pub fn duplicate_task_name(name: impl Into<TaskName>) -> Self {
        Self::DuplicateTaskName { name: name.into() }
    }

    pub fn cyclic_dependency(unresolved: Vec<TaskName>, cycles: Vec<Vec<TaskName>>) -> Self {
        Self::CyclicDependency { unresolved, cycles }
    }

    /// Unresolved task names for a cycle failure; empty for other kinds.
    pub fn unresolved(&self) -> &[TaskName] {
        match self {
            Self::CyclicDependency { unresolved, .. } => unresolved,
            Self::DuplicateTaskName { .. } => &[],
        }
    }
}

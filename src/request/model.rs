// src/request/model.rs

use serde::Deserialize;

use crate::dag::{Schedule, TaskSpec, schedule};
use crate::errors::Result;

/// Schedule request as read from disk, before validation.
///
/// JSON follows the service payload shape:
///
/// ```json
/// {
///   "tasks": [
///     { "title": "design", "estimatedHours": 4, "dueDate": "2024-06-01", "dependencies": [] },
///     { "title": "build", "estimatedHours": 16, "dueDate": "2024-06-10", "dependencies": ["design"] }
///   ]
/// }
/// ```
///
/// TOML uses an array of tables:
///
/// ```toml
/// [[task]]
/// name = "design"
/// estimated_hours = 4
///
/// [[task]]
/// name = "build"
/// after = ["design"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawScheduleRequest {
    #[serde(default, alias = "task")]
    pub tasks: Vec<RawTaskSpec>,
}

/// One task entry, as written by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTaskSpec {
    #[serde(alias = "title")]
    pub name: String,

    /// Signed so that negative values reach validation instead of failing
    /// deserialization with an opaque message.
    #[serde(default, alias = "estimatedHours")]
    pub estimated_hours: Option<i64>,

    #[serde(default, alias = "dueDate")]
    pub due_date: Option<String>,

    /// `null` and a missing field both mean "no dependencies".
    #[serde(default, alias = "after")]
    pub dependencies: Option<Vec<String>>,
}

/// A request that passed validation and can be handed to the scheduler.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    tasks: Vec<TaskSpec>,
}

impl ScheduleRequest {
    /// Wrap tasks without validating them. Use `TryFrom<RawScheduleRequest>`
    /// for untrusted input.
    pub(crate) fn new_unchecked(tasks: Vec<TaskSpec>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[TaskSpec] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<TaskSpec> {
        self.tasks
    }

    /// Order the request's tasks. Failures come back as
    /// [`TaskorderError::Schedule`](crate::errors::TaskorderError::Schedule).
    pub fn schedule(&self) -> Result<Schedule> {
        Ok(schedule(&self.tasks)?)
    }
}

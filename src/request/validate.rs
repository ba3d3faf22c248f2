// src/request/validate.rs

use crate::dag::TaskSpec;
use crate::errors::{Result, TaskorderError};
use crate::request::model::{RawScheduleRequest, RawTaskSpec, ScheduleRequest};

/// Longest accepted task name, in characters.
pub const MAX_TASK_NAME_LEN: usize = 200;

impl TryFrom<RawScheduleRequest> for ScheduleRequest {
    type Error = TaskorderError;

    fn try_from(raw: RawScheduleRequest) -> std::result::Result<Self, Self::Error> {
        validate_raw_request(&raw)?;

        let tasks = raw
            .tasks
            .into_iter()
            .map(|t| TaskSpec {
                name: t.name,
                // Range already checked above.
                estimated_hours: t.estimated_hours.and_then(|h| u32::try_from(h).ok()),
                due_date: t.due_date,
                dependencies: t.dependencies.unwrap_or_default(),
            })
            .collect();

        Ok(ScheduleRequest::new_unchecked(tasks))
    }
}

fn validate_raw_request(req: &RawScheduleRequest) -> Result<()> {
    for (pos, task) in req.tasks.iter().enumerate() {
        validate_task_name(pos, task)?;
        validate_estimated_hours(task)?;
        validate_dependency_refs(task)?;
    }
    Ok(())
}

fn validate_task_name(pos: usize, task: &RawTaskSpec) -> Result<()> {
    if task.name.trim().is_empty() {
        return Err(TaskorderError::InvalidRequest(format!(
            "task #{} has an empty name",
            pos + 1
        )));
    }

    let len = task.name.chars().count();
    if len > MAX_TASK_NAME_LEN {
        return Err(TaskorderError::InvalidRequest(format!(
            "task #{} name is {} characters long (max {})",
            pos + 1,
            len,
            MAX_TASK_NAME_LEN
        )));
    }
    Ok(())
}

fn validate_estimated_hours(task: &RawTaskSpec) -> Result<()> {
    if let Some(hours) = task.estimated_hours {
        if u32::try_from(hours).is_err() {
            return Err(TaskorderError::InvalidRequest(format!(
                "task '{}' has invalid estimated_hours {} (expected 0..={})",
                task.name,
                hours,
                u32::MAX
            )));
        }
    }
    Ok(())
}

fn validate_dependency_refs(task: &RawTaskSpec) -> Result<()> {
    let deps = task.dependencies.as_deref().unwrap_or(&[]);
    if deps.iter().any(|d| d.trim().is_empty()) {
        return Err(TaskorderError::InvalidRequest(format!(
            "task '{}' has an empty dependency name",
            task.name
        )));
    }
    Ok(())
}

#![allow(dead_code)]

use taskorder::TaskSpec;
use taskorder::request::{RawScheduleRequest, RawTaskSpec, ScheduleRequest};

/// Builder for a validated `ScheduleRequest`, going through the same
/// validation path as files loaded from disk.
pub struct RequestBuilder {
    request: RawScheduleRequest,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            request: RawScheduleRequest::default(),
        }
    }

    pub fn with_task(mut self, task: RawTaskSpec) -> Self {
        self.request.tasks.push(task);
        self
    }

    pub fn try_build(self) -> anyhow::Result<ScheduleRequest> {
        Ok(ScheduleRequest::try_from(self.request)?)
    }

    pub fn build(self) -> ScheduleRequest {
        self.try_build()
            .expect("Failed to build valid request from builder")
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single task entry.
///
/// `build()` yields the scheduler's `TaskSpec`; `raw()` yields the unvalidated
/// request form for feeding into [`RequestBuilder`].
pub struct TaskSpecBuilder {
    name: String,
    estimated_hours: Option<i64>,
    due_date: Option<String>,
    dependencies: Vec<String>,
}

impl TaskSpecBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            estimated_hours: None,
            due_date: None,
            dependencies: vec![],
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.dependencies.push(dep.to_string());
        self
    }

    pub fn hours(mut self, hours: i64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    pub fn due(mut self, date: &str) -> Self {
        self.due_date = Some(date.to_string());
        self
    }

    pub fn raw(self) -> RawTaskSpec {
        RawTaskSpec {
            name: self.name,
            estimated_hours: self.estimated_hours,
            due_date: self.due_date,
            dependencies: Some(self.dependencies),
        }
    }

    pub fn build(self) -> TaskSpec {
        TaskSpec {
            name: self.name,
            estimated_hours: self
                .estimated_hours
                .map(|h| u32::try_from(h).expect("hours must fit in u32")),
            due_date: self.due_date,
            dependencies: self.dependencies,
        }
    }
}

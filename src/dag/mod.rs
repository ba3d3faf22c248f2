// src/dag/mod.rs

//! Dependency graph and ordering.
//!
//! - [`task`] is the scheduling input type.
//! - [`graph`] builds the per-request dependency graph.
//! - [`scheduler`] orders the graph (Kahn's algorithm, FIFO frontier).
//! - [`cycles`] explains a failed ordering in terms of actual loops.
//! - [`error`] holds the two caller-facing failure kinds.

pub mod cycles;
pub mod error;
pub mod graph;
pub mod scheduler;
pub mod task;

pub use error::{ScheduleError, ScheduleResult};
pub use graph::DependencyGraph;
pub use scheduler::{Schedule, schedule, topological_order};
pub use task::{TaskName, TaskSpec};

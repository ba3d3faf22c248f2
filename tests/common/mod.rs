#![allow(dead_code)]

use taskorder::TaskSpec;
use taskorder::dag::{Schedule, schedule};

pub use taskorder_test_utils::init_tracing;

/// Schedule `tasks` and return the order, panicking on failure.
pub fn order_of(tasks: &[TaskSpec]) -> Vec<String> {
    schedule(tasks)
        .unwrap_or_else(|e| panic!("expected a schedule, got error: {e}"))
        .recommended_order
}

/// Assert every in-request dependency is placed strictly before its dependent.
pub fn assert_respects_dependencies(tasks: &[TaskSpec], result: &Schedule) {
    for task in tasks {
        let Some(task_pos) = result.position_of(&task.name) else {
            panic!("task {} missing from schedule", task.name);
        };
        for dep in &task.dependencies {
            if let Some(dep_pos) = result.position_of(dep) {
                assert!(
                    dep_pos < task_pos,
                    "dependency {dep} (pos {dep_pos}) must come before {} (pos {task_pos})",
                    task.name
                );
            }
        }
    }
}

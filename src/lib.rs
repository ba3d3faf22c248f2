// src/lib.rs

pub mod cli;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod request;

use std::fmt::Write as _;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::{CliArgs, OutputFormat};
use crate::dag::{DependencyGraph, Schedule, ScheduleError};
use crate::errors::TaskorderError;
use crate::request::{ScheduleRequest, default_request_path, load_and_validate};

pub use crate::dag::{TaskName, TaskSpec};

/// Exit code for invocation problems (bad flags, unreadable or malformed
/// request).
pub const EXIT_FAILURE: i32 = 1;

/// Exit code when the request was well-formed but cannot be scheduled
/// (duplicate names, cycles).
pub const EXIT_UNSCHEDULABLE: i32 = 2;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - request loading + validation
/// - dry-run output, or
/// - scheduling and rendering the result to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let path = args.request.clone().unwrap_or_else(default_request_path);
    let request = load_and_validate(&path, args.format_in.resolve())
        .with_context(|| format!("failed to load request from {}", path.display()))?;

    info!(
        path = %path.display(),
        tasks = request.tasks().len(),
        "loaded schedule request"
    );

    if args.dry_run {
        print!("{}", render_dry_run(&request)?);
        debug!("dry-run complete (no scheduling)");
        return Ok(());
    }

    let result = request.schedule()?;
    info!(tasks = result.len(), "computed recommended order");

    print!("{}", render_schedule(&result, args.output)?);
    Ok(())
}

/// Map a top-level error to a process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    let unschedulable = err.downcast_ref::<ScheduleError>().is_some()
        || matches!(
            err.downcast_ref::<TaskorderError>(),
            Some(TaskorderError::Schedule(_))
        );

    if unschedulable {
        EXIT_UNSCHEDULABLE
    } else {
        EXIT_FAILURE
    }
}

/// Render a successful schedule in the requested output format.
///
/// Output always ends with a newline.
pub fn render_schedule(result: &Schedule, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(result)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (i, name) in result.iter().enumerate() {
                writeln!(out, "{}. {name}", i + 1)?;
            }
            Ok(out)
        }
    }
}

/// Simple dry-run output: tasks, metadata, dependencies and graph roots.
pub fn render_dry_run(request: &ScheduleRequest) -> Result<String> {
    let tasks = request.tasks();
    let mut out = String::new();

    writeln!(out, "taskorder dry-run")?;
    writeln!(out, "tasks ({}):", tasks.len())?;
    for task in tasks {
        writeln!(out, "  - {}", task.name)?;
        if let Some(hours) = task.estimated_hours {
            writeln!(out, "      estimated_hours: {hours}")?;
        }
        if let Some(ref due) = task.due_date {
            writeln!(out, "      due_date: {due}")?;
        }
        if !task.dependencies.is_empty() {
            writeln!(out, "      dependencies: {:?}", task.dependencies)?;
        }
    }

    let total_hours: u64 = tasks
        .iter()
        .filter_map(|t| t.estimated_hours)
        .map(u64::from)
        .sum();
    writeln!(out, "total estimated_hours: {total_hours}")?;

    match DependencyGraph::build(tasks) {
        Ok(graph) => {
            let roots: Vec<&str> = graph.roots().map(|idx| graph.name(idx)).collect();
            writeln!(out, "roots: {roots:?}")?;
            if graph.ignored_dependencies() > 0 {
                writeln!(
                    out,
                    "ignored dependencies (not in request): {}",
                    graph.ignored_dependencies()
                )?;
            }
        }
        Err(e) => writeln!(out, "graph error: {e}")?,
    }

    Ok(out)
}

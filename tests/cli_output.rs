use std::path::PathBuf;

use clap::Parser;
use taskorder::cli::{CliArgs, InputFormat, LogLevel, OutputFormat};
use taskorder::dag::{Schedule, ScheduleError, schedule};
use taskorder::errors::TaskorderError;
use taskorder::logging::resolve_level;
use taskorder::request::RequestFormat;
use taskorder::{EXIT_FAILURE, EXIT_UNSCHEDULABLE, TaskSpec, exit_code, render_dry_run, render_schedule};
use taskorder_test_utils::builders::{RequestBuilder, TaskSpecBuilder};

fn sample_schedule() -> Schedule {
    let tasks = vec![
        TaskSpec::with_deps("design", Vec::<String>::new()),
        TaskSpec::with_deps("build", ["design"]),
    ];
    schedule(&tasks).unwrap()
}

#[test]
fn json_output_uses_recommended_order_field() {
    let out = render_schedule(&sample_schedule(), OutputFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "recommendedOrder": ["design", "build"] })
    );
    assert!(out.ends_with('\n'));
}

#[test]
fn text_output_is_numbered() {
    let out = render_schedule(&sample_schedule(), OutputFormat::Text).unwrap();
    assert_eq!(out, "1. design\n2. build\n");
}

#[test]
fn dry_run_lists_tasks_metadata_and_roots() {
    let request = RequestBuilder::new()
        .with_task(TaskSpecBuilder::new("design").hours(4).due("2024-06-01").raw())
        .with_task(TaskSpecBuilder::new("build").hours(16).after("design").raw())
        .with_task(TaskSpecBuilder::new("qa").after("external").raw())
        .build();

    let out = render_dry_run(&request).unwrap();

    assert!(out.starts_with("taskorder dry-run\n"));
    assert!(out.contains("tasks (3):"));
    assert!(out.contains("  - design\n      estimated_hours: 4\n      due_date: 2024-06-01\n"));
    assert!(out.contains("      dependencies: [\"design\"]"));
    assert!(out.contains("total estimated_hours: 20"));
    assert!(out.contains("roots: [\"design\", \"qa\"]"));
    assert!(out.contains("ignored dependencies (not in request): 1"));
}

#[test]
fn dry_run_reports_duplicate_names_without_failing() {
    let request = RequestBuilder::new()
        .with_task(TaskSpecBuilder::new("A").raw())
        .with_task(TaskSpecBuilder::new("A").raw())
        .build();

    let out = render_dry_run(&request).unwrap();
    assert!(out.contains("graph error: duplicate task name 'A'"), "{out}");
}

#[test]
fn cli_defaults() {
    let args = CliArgs::try_parse_from(["taskorder"]).unwrap();

    assert_eq!(args.request, None);
    assert_eq!(args.format_in, InputFormat::Auto);
    assert_eq!(args.output, OutputFormat::Json);
    assert!(args.log_level.is_none());
    assert!(!args.dry_run);
}

#[test]
fn cli_flags_parse() {
    let args = CliArgs::try_parse_from([
        "taskorder",
        "--request",
        "plan.json",
        "--format-in",
        "toml",
        "--output",
        "text",
        "--log-level",
        "debug",
        "--dry-run",
    ])
    .unwrap();

    assert_eq!(args.request, Some(PathBuf::from("plan.json")));
    assert_eq!(args.format_in.resolve(), Some(RequestFormat::Toml));
    assert_eq!(args.output, OutputFormat::Text);
    assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    assert!(args.dry_run);
}

#[test]
fn auto_format_defers_to_extension() {
    assert_eq!(InputFormat::Auto.resolve(), None);
    assert_eq!(InputFormat::Json.resolve(), Some(RequestFormat::Json));
}

#[test]
fn log_level_priority() {
    assert_eq!(resolve_level(Some(LogLevel::Trace), Some("error")), tracing::Level::TRACE);
    assert_eq!(resolve_level(None, Some(" Debug ")), tracing::Level::DEBUG);
    assert_eq!(resolve_level(None, Some("warning")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, Some("nonsense")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, None), tracing::Level::WARN);
}

#[test]
fn scheduling_failures_get_their_own_exit_code() {
    let cyclic = anyhow::Error::from(ScheduleError::cyclic_dependency(
        vec!["A".into(), "B".into()],
        vec![vec!["A".into(), "B".into()]],
    ));
    assert_eq!(exit_code(&cyclic), EXIT_UNSCHEDULABLE);

    let wrapped = anyhow::Error::from(TaskorderError::from(ScheduleError::duplicate_task_name("A")));
    assert_eq!(exit_code(&wrapped), EXIT_UNSCHEDULABLE);

    let invalid = anyhow::Error::from(TaskorderError::InvalidRequest("nope".into()))
        .context("failed to load request from Schedule.toml");
    assert_eq!(exit_code(&invalid), EXIT_FAILURE);
}

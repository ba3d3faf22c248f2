// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::request::RequestFormat;

/// Command-line arguments for `taskorder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskorder",
    version,
    about = "Compute a dependency-respecting execution order for a set of tasks.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the schedule request (TOML or JSON).
    ///
    /// Default: `$TASKORDER_REQUEST`, or `Schedule.toml` in the current
    /// working directory.
    #[arg(long, value_name = "PATH")]
    pub request: Option<PathBuf>,

    /// Encoding of the request file. `auto` decides by file extension.
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = InputFormat::Auto)]
    pub format_in: InputFormat,

    /// How to print the computed order.
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKORDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the tasks, but don't compute an order.
    #[arg(long)]
    pub dry_run: bool,
}

/// Request encoding as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Auto,
    Json,
    Toml,
}

impl InputFormat {
    /// `None` means "infer from the path".
    pub fn resolve(self) -> Option<RequestFormat> {
        match self {
            InputFormat::Auto => None,
            InputFormat::Json => Some(RequestFormat::Json),
            InputFormat::Toml => Some(RequestFormat::Toml),
        }
    }
}

/// Output rendering for a successful schedule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `{"recommendedOrder": [...]}`
    Json,
    /// One numbered task per line.
    Text,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

use crate::dag::ScheduleError;

#[derive(Error, Debug)]
pub enum TaskorderError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

pub type Result<T> = std::result::Result<T, TaskorderError>;

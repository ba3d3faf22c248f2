// src/request/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::Result;
use crate::request::model::{RawScheduleRequest, ScheduleRequest};

/// Environment variable that overrides the default request path.
pub const REQUEST_PATH_ENV: &str = "TASKORDER_REQUEST";

/// On-disk encoding of a request file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Json,
    Toml,
}

impl RequestFormat {
    /// `.json` files are JSON; everything else is treated as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => RequestFormat::Json,
            _ => RequestFormat::Toml,
        }
    }
}

/// Parse request text without semantic validation.
pub fn parse_str(contents: &str, format: RequestFormat) -> Result<RawScheduleRequest> {
    let raw: RawScheduleRequest = match format {
        RequestFormat::Json => serde_json::from_str(contents)?,
        RequestFormat::Toml => toml::from_str(contents)?,
    };
    Ok(raw)
}

/// Load a request file and return the raw `RawScheduleRequest`.
///
/// `format = None` picks the format from the file extension.
pub fn load_from_path(
    path: impl AsRef<Path>,
    format: Option<RequestFormat>,
) -> Result<RawScheduleRequest> {
    let path = path.as_ref();
    let format = format.unwrap_or_else(|| RequestFormat::from_path(path));
    debug!(path = %path.display(), ?format, "loading schedule request");

    let contents = fs::read_to_string(path)?;
    parse_str(&contents, format)
}

/// Load a request file and validate it.
///
/// Checks for:
/// - non-empty names of bounded length,
/// - non-negative `estimated_hours`,
/// - non-empty dependency names.
///
/// Duplicate names and cycles are left to the scheduler.
pub fn load_and_validate(
    path: impl AsRef<Path>,
    format: Option<RequestFormat>,
) -> Result<ScheduleRequest> {
    let raw = load_from_path(&path, format)?;
    let request = ScheduleRequest::try_from(raw)?;
    Ok(request)
}

/// Request path used when none is given on the command line:
/// `$TASKORDER_REQUEST` if set, otherwise `Schedule.toml`.
pub fn default_request_path() -> PathBuf {
    std::env::var_os(REQUEST_PATH_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Schedule.toml"))
}

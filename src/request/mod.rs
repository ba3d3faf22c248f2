// src/request/mod.rs

//! Reading and validating schedule requests.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{RequestFormat, default_request_path, load_and_validate, load_from_path, parse_str};
pub use model::{RawScheduleRequest, RawTaskSpec, ScheduleRequest};

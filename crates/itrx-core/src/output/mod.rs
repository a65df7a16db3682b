//! Result writing module.

mod json;

pub use json::{to_json_string, write_json, JsonWriter};

use crate::error::OutputError;

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

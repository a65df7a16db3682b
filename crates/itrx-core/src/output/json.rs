//! Pretty JSON output for extraction results.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;
use tracing::{debug, trace};

use super::Result;
use crate::models::config::OutputConfig;
use crate::models::record::ExtractionResult;

/// Serialize a result as indented JSON.
pub fn to_json_string(result: &ExtractionResult, indent: usize) -> Result<String> {
    let indent = vec![b' '; indent];
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    result.serialize(&mut serializer)?;

    String::from_utf8(buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

/// Write a result to `path` as indented JSON, replacing any existing file.
pub fn write_json(result: &ExtractionResult, path: &Path, config: &OutputConfig) -> Result<()> {
    JsonWriter::from_config(config).write(result, path)
}

/// JSON result writer.
pub struct JsonWriter {
    indent: usize,
    atomic: bool,
}

impl JsonWriter {
    /// Create a writer with 4-space indentation and atomic replacement.
    pub fn new() -> Self {
        Self::from_config(&OutputConfig::default())
    }

    /// Create a writer from output configuration.
    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            indent: config.indent,
            atomic: config.atomic,
        }
    }

    /// Set the indentation width.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set whether the destination is replaced through a temporary file.
    pub fn with_atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Write the result to `path`.
    pub fn write(&self, result: &ExtractionResult, path: &Path) -> Result<()> {
        let json = to_json_string(result, self.indent)?;

        if self.atomic {
            write_atomic(path, json.as_bytes())?;
        } else {
            fs::write(path, json.as_bytes())?;
        }

        debug!("Wrote {} bytes to {}", json.len(), path.display());
        Ok(())
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write through a temporary file in the destination directory, then rename.
///
/// The temporary file is removed on drop if anything fails before the rename.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    trace!("Writing to temporary file {}", tmp.path().display());
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}

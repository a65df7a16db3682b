//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ItrxError;

/// Main configuration for the itrx pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItrxConfig {
    /// Input and output locations.
    pub paths: PathsConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Result writer configuration.
    pub output: OutputConfig,
}

/// Input and output file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// PDF document to read.
    pub input: PathBuf,

    /// JSON file to write.
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("sampleitr.pdf"),
            output: PathBuf::from("extracted_data.json"),
        }
    }
}

/// Library used to turn PDF pages into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextBackend {
    /// Page-by-page extraction with lopdf.
    #[default]
    Lopdf,
    /// Page-by-page extraction with pdf-extract.
    PdfExtract,
}

/// PDF processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Text extraction backend.
    pub backend: TextBackend,

    /// Try to open encrypted documents with the empty user password.
    pub try_empty_password: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            backend: TextBackend::Lopdf,
            try_empty_password: true,
        }
    }
}

/// What happens when several lines report the same figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// Every matching line overwrites the figure, even with an empty value.
    #[default]
    LastWins,
    /// The first value found is kept; later lines cannot replace it.
    FirstWins,
}

/// How the "income chargeable under the head 'salaries'" label is matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelMatching {
    /// Lowercase label, straight or typographic quotes (or none) around "salaries".
    #[default]
    Normalized,
    /// Mixed-case label with typographic quotes, compared byte for byte
    /// against the lowercased line. Never matches lowercased text.
    Verbatim,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Policy for repeated labels.
    pub match_policy: MatchPolicy,

    /// Matching mode for the chargeable-salaries label.
    pub label_matching: LabelMatching,
}

/// Result writer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Number of spaces per indentation level.
    pub indent: usize,

    /// Write through a temporary file and rename it over the destination.
    pub atomic: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            atomic: true,
        }
    }
}

impl ItrxConfig {
    /// Default configuration with the given input and output paths.
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            paths: PathsConfig {
                input: input.into(),
                output: output.into(),
            },
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file.
    ///
    /// A file that cannot be read is an I/O error; one that is not a valid
    /// configuration is a configuration error naming the file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ItrxError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ItrxConfig::default();
        assert_eq!(config.paths.input, PathBuf::from("sampleitr.pdf"));
        assert_eq!(config.paths.output, PathBuf::from("extracted_data.json"));
        assert_eq!(config.pdf.backend, TextBackend::Lopdf);
        assert_eq!(config.extraction.match_policy, MatchPolicy::LastWins);
        assert_eq!(config.extraction.label_matching, LabelMatching::Normalized);
        assert_eq!(config.output.indent, 4);
        assert!(config.output.atomic);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"extraction": {"match_policy": "first-wins"}, "pdf": {"backend": "pdf-extract"}}"#;
        let config: ItrxConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.extraction.match_policy, MatchPolicy::FirstWins);
        assert_eq!(config.extraction.label_matching, LabelMatching::Normalized);
        assert_eq!(config.pdf.backend, TextBackend::PdfExtract);
        assert!(config.pdf.try_empty_password);
        assert_eq!(config.paths, PathsConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ItrxConfig::with_paths("form16.pdf", "out/figures.json");
        config.extraction.label_matching = LabelMatching::Verbatim;
        config.output.atomic = false;
        config.save(&path).unwrap();

        let loaded = ItrxConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ItrxConfig::from_file(&path).unwrap_err();
        match err {
            ItrxError::Config(message) => assert!(message.contains("config.json"), "{message}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_backend_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"pdf": {"backend": "pdfium"}}"#).unwrap();

        let err = ItrxConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ItrxError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ItrxConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
        match err {
            ItrxError::Io(source) => assert_eq!(source.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other}"),
        }
    }
}

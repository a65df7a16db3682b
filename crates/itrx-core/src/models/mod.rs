//! Data models and configuration.

pub mod config;
pub mod record;

pub use config::{
    ExtractionConfig, ItrxConfig, LabelMatching, MatchPolicy, OutputConfig, PathsConfig,
    PdfConfig, TextBackend,
};
pub use record::{ExtractionResult, Field};

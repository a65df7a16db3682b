//! Error types for the itrx-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the itrx library.
#[derive(Error, Debug)]
pub enum ItrxError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Result writing error.
    #[error("output error: {0}")]
    Output(#[from] OutputError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The PDF file could not be opened or read.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the PDF document.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// Failed to extract text from a page.
    #[error("failed to extract text from page {page}: {reason}")]
    TextExtraction { page: u32, reason: String },

    /// No document has been loaded yet.
    #[error("no document loaded")]
    NotLoaded,
}

/// Errors related to writing the extraction result.
#[derive(Error, Debug)]
pub enum OutputError {
    /// JSON serialization failed.
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the destination (or its temporary file) failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Renaming the temporary file over the destination failed.
    #[error("failed to persist output: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Result type for the itrx library.
pub type Result<T> = std::result::Result<T, ItrxError>;

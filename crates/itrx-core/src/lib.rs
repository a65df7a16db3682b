//! Core library for extracting salary and tax figures from income-tax PDFs.
//!
//! This crate provides:
//! - PDF text extraction (lopdf or pdf-extract, page by page)
//! - Label-based figure extraction (gross/net salary, other income,
//!   chargeable salary income, total tax deducted)
//! - JSON output of the fixed five-key record
//! - A single-pass pipeline tying the three together

pub mod error;
pub mod extraction;
pub mod models;
pub mod output;
pub mod pdf;
pub mod pipeline;

pub use error::{ItrxError, OutputError, PdfError, Result};
pub use extraction::{ExtractionReport, FieldMatch, FigureParser, SalaryFieldParser};
pub use models::config::ItrxConfig;
pub use models::record::{ExtractionResult, Field};
pub use output::{write_json, JsonWriter};
pub use pdf::{extract_text_from_file, PdfExtractor, PdfProcessor};

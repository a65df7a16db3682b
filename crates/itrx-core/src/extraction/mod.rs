//! Salary and tax figure extraction module.

mod parser;
pub mod rules;

pub use parser::{ExtractionReport, FieldMatch, SalaryFieldParser};

/// Trait for figure parsers.
pub trait FigureParser {
    /// Parse figures from document text.
    ///
    /// Parsing never fails: a figure that cannot be found is left unset.
    fn parse(&self, text: &str) -> ExtractionReport;
}

//! End-to-end extraction: PDF text, figures, JSON file.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::extraction::{ExtractionReport, FigureParser, SalaryFieldParser};
use crate::models::config::ItrxConfig;
use crate::output::JsonWriter;
use crate::pdf::extract_text_from_file;

/// Run the pipeline once with the given configuration.
///
/// Reads `config.paths.input`, extracts the figures and writes them to
/// `config.paths.output`. Missing figures are logged and reported, not
/// treated as errors.
pub fn run(config: &ItrxConfig) -> Result<ExtractionReport> {
    info!("Extracting text from {}", config.paths.input.display());
    let text = extract_text_from_file(&config.paths.input, &config.pdf)?;
    debug!("Extracted {} characters of text", text.len());

    let parser = SalaryFieldParser::from_config(&config.extraction);
    let report = parser.parse(&text);
    for warning in &report.warnings {
        warn!("{}", warning);
    }

    JsonWriter::from_config(&config.output).write(&report.result, &config.paths.output)?;
    info!("Saved figures to {}", config.paths.output.display());

    Ok(report)
}

//! Extract command - read a PDF, extract the figures, write JSON.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::debug;

use itrx_core::models::config::{LabelMatching, MatchPolicy, TextBackend};
use itrx_core::pipeline;

use super::config::load_config;

/// Arguments for the extract command.
#[derive(Args, Default)]
pub struct ExtractArgs {
    /// Input PDF (default: sampleitr.pdf)
    input: Option<PathBuf>,

    /// Output JSON file (default: extracted_data.json)
    output: Option<PathBuf>,

    /// Keep the first value found for a figure instead of the last
    #[arg(long)]
    first_match: bool,

    /// Match the chargeable-salaries label byte for byte (legacy behaviour)
    #[arg(long)]
    verbatim_labels: bool,

    /// Text extraction backend
    #[arg(long, value_enum)]
    backend: Option<Backend>,

    /// Write the output file directly instead of through a temporary file
    #[arg(long)]
    no_atomic: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Backend {
    /// lopdf page text
    Lopdf,
    /// pdf-extract page text
    PdfExtract,
}

impl From<Backend> for TextBackend {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Lopdf => TextBackend::Lopdf,
            Backend::PdfExtract => TextBackend::PdfExtract,
        }
    }
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let mut config = load_config(config_path)?;

    if let Some(input) = args.input {
        config.paths.input = input;
    }
    if let Some(output) = args.output {
        config.paths.output = output;
    }
    if args.first_match {
        config.extraction.match_policy = MatchPolicy::FirstWins;
    }
    if args.verbatim_labels {
        config.extraction.label_matching = LabelMatching::Verbatim;
    }
    if let Some(backend) = args.backend {
        config.pdf.backend = backend.into();
    }
    if args.no_atomic {
        config.output.atomic = false;
    }

    let report = pipeline::run(&config).with_context(|| {
        format!(
            "failed to extract figures from {}",
            config.paths.input.display()
        )
    })?;

    println!(
        "{} Extracted data has been saved to {}",
        style("✓").green(),
        config.paths.output.display()
    );

    debug!(
        "{} label lines matched, total time {:?}",
        report.matches.len(),
        start.elapsed()
    );

    Ok(())
}

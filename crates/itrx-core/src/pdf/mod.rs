//! PDF processing module.

mod extractor;

pub use extractor::PdfExtractor;

#[cfg(test)]
pub(crate) use extractor::test_pdf;

use std::path::Path;

use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;

    /// Extract the text of every page, in document order.
    fn extract_pages(&self) -> Result<Vec<String>> {
        (1..=self.page_count())
            .map(|page| self.extract_page_text(page))
            .collect()
    }

    /// Extract text from the entire PDF.
    ///
    /// Pages without text are skipped; every other page is followed by a
    /// single newline.
    fn extract_text(&self) -> Result<String> {
        Ok(join_page_texts(self.extract_pages()?))
    }
}

/// Join page texts, one newline after each page that has any text.
pub fn join_page_texts<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut full_text = String::new();
    for page in pages {
        let text = page.as_ref().trim_end();
        if text.is_empty() {
            continue;
        }
        full_text.push_str(text);
        full_text.push('\n');
    }
    full_text
}

/// Read a PDF file and extract the text of all its pages.
pub fn extract_text_from_file(path: &Path, config: &PdfConfig) -> Result<String> {
    let mut extractor = PdfExtractor::from_config(config);
    extractor.load_file(path)?;
    extractor.extract_text()
}

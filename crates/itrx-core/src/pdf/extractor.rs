//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use std::cell::OnceCell;
use std::path::Path;
use tracing::{debug, trace};

use super::{PdfProcessor, Result};
use crate::error::PdfError;
use crate::models::config::{PdfConfig, TextBackend};

/// PDF text extractor.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    backend: TextBackend,
    try_empty_password: bool,
    /// pdf-extract works on the whole document, so its pages are kept after
    /// the first call.
    extracted_pages: OnceCell<Vec<String>>,
}

impl PdfExtractor {
    /// Create a new PDF extractor using the lopdf backend.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            backend: TextBackend::Lopdf,
            try_empty_password: true,
            extracted_pages: OnceCell::new(),
        }
    }

    /// Create an extractor from PDF configuration.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self::new()
            .with_backend(config.backend)
            .with_empty_password(config.try_empty_password)
    }

    /// Set the text extraction backend.
    pub fn with_backend(mut self, backend: TextBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Set whether encrypted documents are opened with the empty password.
    pub fn with_empty_password(mut self, enabled: bool) -> Self {
        self.try_empty_password = enabled;
        self
    }

    /// Read and load a PDF file.
    ///
    /// The file is read in full and closed before parsing starts.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let data = std::fs::read(path).map_err(|source| PdfError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", data.len(), path.display());
        self.load(&data)
    }

    fn document(&self) -> Result<&Document> {
        self.document.as_ref().ok_or(PdfError::NotLoaded)
    }

    fn pdf_extract_pages(&self) -> Result<&[String]> {
        self.document()?;
        if let Some(pages) = self.extracted_pages.get() {
            return Ok(pages.as_slice());
        }
        let pages = pdf_extract::extract_text_from_mem_by_pages(&self.raw_data)
            .map_err(|e| PdfError::Parse(e.to_string()))?;
        trace!("pdf-extract returned {} pages", pages.len());
        Ok(self.extracted_pages.get_or_init(|| pages).as_slice())
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            if !self.try_empty_password || doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract reads the raw bytes, so keep the decrypted form
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        debug!("Loaded PDF with {} pages", doc.get_pages().len());
        self.document = Some(doc);
        self.extracted_pages = OnceCell::new();
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        match self.backend {
            TextBackend::Lopdf => {
                let doc = self.document()?;
                let text = doc
                    .extract_text(&[page])
                    .map_err(|e| PdfError::TextExtraction {
                        page,
                        reason: e.to_string(),
                    })?;
                trace!("Page {}: {} chars", page, text.len());
                Ok(text)
            }
            TextBackend::PdfExtract => {
                let pages = self.pdf_extract_pages()?;
                (page as usize)
                    .checked_sub(1)
                    .and_then(|index| pages.get(index))
                    .cloned()
                    .ok_or(PdfError::TextExtraction {
                        page,
                        reason: "page not found".to_string(),
                    })
            }
        }
    }

    fn extract_pages(&self) -> Result<Vec<String>> {
        match self.backend {
            TextBackend::Lopdf => {
                self.document()?;
                (1..=self.page_count())
                    .map(|page| self.extract_page_text(page))
                    .collect()
            }
            TextBackend::PdfExtract => Ok(self.pdf_extract_pages()?.to_vec()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
        assert!(matches!(extractor.extract_page_text(1), Err(PdfError::NotLoaded)));
    }

    #[test]
    fn test_extracts_pages_in_order() {
        let data = test_pdf::build(&[
            &["Gross Salary 500000", "Net Salary 450000"],
            &["Total Tax Deducted 25000"],
        ]);
        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();

        assert_eq!(extractor.page_count(), 2);
        assert_eq!(
            extractor.extract_text().unwrap(),
            "Gross Salary 500000\nNet Salary 450000\nTotal Tax Deducted 25000\n"
        );
    }

    #[test]
    fn test_page_without_text_contributes_nothing() {
        let data = test_pdf::build(&[&["Gross Salary 1000"], &[], &["Net Salary 900"]]);
        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();

        assert_eq!(extractor.page_count(), 3);
        assert_eq!(extractor.extract_page_text(2).unwrap().trim(), "");
        assert_eq!(
            extractor.extract_text().unwrap(),
            "Gross Salary 1000\nNet Salary 900\n"
        );
    }

    #[test]
    fn test_document_without_pages_is_empty_text() {
        let data = test_pdf::build(&[]);
        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();

        assert_eq!(extractor.page_count(), 0);
        assert_eq!(extractor.extract_text().unwrap(), "");
    }

    #[test]
    fn test_invalid_data_is_parse_error() {
        let mut extractor = PdfExtractor::new();
        let err = extractor.load(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.pdf");

        let mut extractor = PdfExtractor::new();
        let err = extractor.load_file(&path).unwrap_err();
        match err {
            PdfError::Open { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_pdf_extract_backend() {
        let data = test_pdf::build(&[
            &["Gross Salary 500000", "Net Salary 450000"],
            &["Total Tax Deducted 25000"],
        ]);
        let mut extractor = PdfExtractor::new().with_backend(TextBackend::PdfExtract);
        extractor.load(&data).unwrap();

        let pages = extractor.extract_pages().unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains("Gross Salary 500000"), "{:?}", pages[0]);
        assert!(pages[1].contains("Total Tax Deducted 25000"), "{:?}", pages[1]);

        // Single pages come from the same extraction run
        assert_eq!(extractor.extract_page_text(2).unwrap(), pages[1]);
        assert_eq!(extractor.extracted_pages.get().map(Vec::len), Some(2));
        assert!(matches!(
            extractor.extract_page_text(3),
            Err(PdfError::TextExtraction { page: 3, .. })
        ));
        assert!(matches!(
            extractor.extract_page_text(0),
            Err(PdfError::TextExtraction { page: 0, .. })
        ));
    }

    #[test]
    fn test_reload_drops_cached_pages() {
        let mut extractor = PdfExtractor::new().with_backend(TextBackend::PdfExtract);
        extractor
            .load(&test_pdf::build(&[&["Gross Salary 1000"], &["Net Salary 900"]]))
            .unwrap();
        assert_eq!(extractor.extract_pages().unwrap().len(), 2);

        extractor.load(&test_pdf::build(&[&["Net Salary 800"]])).unwrap();
        let pages = extractor.extract_pages().unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains("Net Salary 800"), "{:?}", pages[0]);
    }

    #[test]
    fn test_encrypted_document_opens_with_empty_password() {
        let data = test_pdf::build_encrypted(
            &[&["Gross Salary 500000"], &["Net Salary 450000"]],
            false,
        );
        assert!(Document::load_mem(&data).unwrap().is_encrypted());

        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();
        assert_eq!(
            extractor.extract_text().unwrap(),
            "Gross Salary 500000\nNet Salary 450000\n"
        );

        // pdf-extract reads the decrypted copy
        assert!(!Document::load_mem(&extractor.raw_data).unwrap().is_encrypted());
        let mut extractor = PdfExtractor::new().with_backend(TextBackend::PdfExtract);
        extractor.load(&data).unwrap();
        assert!(extractor.extract_text().unwrap().contains("Net Salary 450000"));
    }

    #[test]
    fn test_encrypted_document_without_empty_password_attempt() {
        let data = test_pdf::build_encrypted(&[&["Gross Salary 500000"]], false);

        let mut extractor = PdfExtractor::new().with_empty_password(false);
        let err = extractor.load(&data).unwrap_err();
        assert!(matches!(err, PdfError::Encrypted));
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_encrypted_document_with_user_password() {
        let data = test_pdf::build_encrypted(&[&["Gross Salary 500000"]], true);

        let mut extractor = PdfExtractor::new();
        let err = extractor.load(&data).unwrap_err();
        assert!(matches!(err, PdfError::Encrypted));
        assert!(matches!(extractor.extract_text(), Err(PdfError::NotLoaded)));
    }

    #[test]
    fn test_from_config() {
        let config = PdfConfig {
            backend: TextBackend::PdfExtract,
            try_empty_password: false,
        };
        let extractor = PdfExtractor::from_config(&config);
        assert_eq!(extractor.backend, TextBackend::PdfExtract);
        assert!(!extractor.try_empty_password);
    }
}

//! PDF text extraction using lopdf.

use std::path::Path;

use lopdf::Document;
use tracing::debug;

use super::{PageTextSource, Result};
use crate::error::PdfError;

/// Reads the embedded text layer of a PDF, one page at a time.
pub struct PdfReader {
    document: Document,
}

impl PdfReader {
    /// Load a PDF from bytes.
    pub fn load(data: &[u8]) -> Result<Self> {
        let mut document = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if document.is_encrypted() {
            if document.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");
        }

        let page_count = document.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        Ok(Self { document })
    }

    /// Load a PDF from a file.
    pub fn open(path: &Path) -> crate::Result<Self> {
        let data = std::fs::read(path)?;
        Ok(Self::load(&data)?)
    }
}

impl PageTextSource for PdfReader {
    fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        if page == 0 || page > self.page_count() {
            return Err(PdfError::InvalidPage(page));
        }
        self.document
            .extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

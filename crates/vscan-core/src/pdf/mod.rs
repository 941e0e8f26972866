//! PDF text input.

mod reader;

pub use reader::PdfReader;

use tracing::warn;

use crate::error::PdfError;
use crate::models::lines::LineSequence;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// A document whose text can be read page by page.
pub trait PageTextSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Extract text from a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;

    /// Concatenate every page's lines in page order.
    ///
    /// A page that fails to extract contributes no lines.
    fn line_sequence(&self) -> LineSequence {
        let pages = (1..=self.page_count()).filter_map(|page| {
            self.extract_page_text(page)
                .map_err(|e| warn!("Skipping page {}: {}", page, e))
                .ok()
        });
        LineSequence::from_pages(pages)
    }
}

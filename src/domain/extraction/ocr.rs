//! Seams for the scanned-document fallback
//!
//! Both operations are blocking and CPU-heavy; callers on an async runtime
//! must run them on a blocking thread.

#[cfg(test)]
use mockall::automock;

use crate::domain::DomainError;

/// Receives each rendered page as a PNG, with its zero-based index
pub type PageSink<'a> = dyn FnMut(usize, Vec<u8>) -> Result<(), DomainError> + 'a;

/// Renders the pages of a PDF to PNG images
pub trait PageRasterizer: Send + Sync {
    /// Render up to `max_pages` pages at `dpi`, in page order.
    ///
    /// Each page is handed to `on_page` before the next one is rendered, and
    /// an error from `on_page` stops rendering. Returns the number of pages
    /// delivered.
    fn render_pages(
        &self,
        pdf: &[u8],
        dpi: u32,
        max_pages: usize,
        on_page: &mut PageSink<'_>,
    ) -> Result<usize, DomainError>;
}

/// Recognizes machine-printed text in a page image
#[cfg_attr(test, automock)]
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, png: &[u8]) -> Result<String, DomainError>;

    fn engine_name(&self) -> &'static str;
}
